mod error;
mod health;
mod login;
mod register;

pub use error::{ApiError, ErrorResponse, UserResponse};
pub use health::health_check;
pub use login::{login_by_email, login_by_username};
pub use register::register;
