pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    AllowedOrigins, ApplicationSettings, CorsSettings, DatabaseSettings, HashingSettings,
    Settings, StoreKind,
};
