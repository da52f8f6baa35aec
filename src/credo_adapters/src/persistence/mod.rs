pub mod hashmap_user_store;
pub mod postgres_user_store;

pub use hashmap_user_store::HashMapUserStore;
pub use postgres_user_store::PostgresUserStore;
