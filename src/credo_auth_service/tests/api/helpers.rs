use credo_adapters::{
    config::{HashingSettings, test},
    hashing::Argon2PasswordHasher,
    persistence::HashMapUserStore,
};
use credo_auth_service::AuthService;
use serde::Serialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

impl TestApp {
    pub async fn new() -> Self {
        // Cheapest parameters argon2 accepts, to keep the suite fast
        let hasher = Argon2PasswordHasher::new(&HashingSettings {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        })
        .expect("Failed to build password hasher");

        let listener = TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!(
            "http://{}",
            listener.local_addr().expect("Listener has no address")
        );

        let service = AuthService::new(HashMapUserStore::new(), hasher);
        tokio::spawn(service.run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
        }
    }

    /// A fresh app with the fixture account already registered.
    pub async fn with_seeded_user() -> Self {
        let app = Self::new().await;
        let response = app.post_register(&seeded_user()).await;
        assert_eq!(response.status().as_u16(), 201);
        app
    }

    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> reqwest::Response {
        self.http_client
            .post(format!("{}{path}", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_login_username<B: Serialize + ?Sized>(&self, body: &B) -> reqwest::Response {
        self.post_json("/api/users/login/username", body).await
    }

    pub async fn post_login_email<B: Serialize + ?Sized>(&self, body: &B) -> reqwest::Response {
        self.post_json("/api/users/login/email", body).await
    }

    pub async fn post_register<B: Serialize + ?Sized>(&self, body: &B) -> reqwest::Response {
        self.post_json("/api/users/register", body).await
    }

    pub async fn get_health(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/health", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

pub const SEEDED_USERNAME: &str = "fwilloughley0";
pub const SEEDED_EMAIL: &str = "asculpher0@independent.co.uk";
pub const SEEDED_PASSWORD: &str = "4OTUUVDkYT";

pub fn seeded_user() -> Value {
    json!({
        "email": SEEDED_EMAIL,
        "username": SEEDED_USERNAME,
        "password": SEEDED_PASSWORD,
    })
}
