pub mod env {
    pub const ENVIRONMENT_ENV_VAR: &str = "CREDO_ENVIRONMENT";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const SETTINGS_ENV_PREFIX: &str = "CREDO";
}

pub mod routes {
    pub const USERS_PREFIX: &str = "/api/users";
    pub const LOGIN_USERNAME: &str = "/login/username";
    pub const LOGIN_EMAIL: &str = "/login/email";
    pub const REGISTER: &str = "/register";
    pub const HEALTH: &str = "/health";
}

pub mod prod {
    pub const CONFIG_DIR: &str = "config";
    pub const DEFAULT_ENVIRONMENT: &str = "local";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
