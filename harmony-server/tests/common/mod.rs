#![allow(dead_code)]

use std::sync::Arc;

use auth::PasswordHasher;
use auth::TokenCodec;
use chrono::Duration;
use harmony_server::domain::auth::service::AuthService;
use harmony_server::domain::channel::service::ChannelService;
use harmony_server::domain::user::service::UserService;
use harmony_server::inbound::http::router::create_router;
use harmony_server::inbound::http::router::AppState;
use harmony_server::outbound::repositories::connect;
use harmony_server::outbound::repositories::SqliteChannelRepository;
use harmony_server::outbound::repositories::SqliteUserRepository;
use serde_json::json;
use serde_json::Value;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over a private in-memory database
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub codec: TokenCodec,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let pool = connect("sqlite::memory:", 1)
            .await
            .expect("Failed to open test database");

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
        let channel_repository = Arc::new(SqliteChannelRepository::new(pool));

        // Cheapest Argon2 parameters keep the suite fast
        let hasher = Arc::new(
            PasswordHasher::with_params(1024, 1, 1).expect("Failed to create password hasher"),
        );
        let tokens = Arc::new(codec());

        let state = AppState {
            auth_service: Arc::new(AuthService::new(
                Arc::clone(&user_repository),
                hasher,
                Arc::clone(&tokens),
            )),
            user_service: Arc::new(UserService::new(user_repository)),
            channel_service: Arc::new(ChannelService::new(channel_repository)),
            tokens,
        };

        let router = create_router(state);
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            codec: codec(),
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn patch(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.patch(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Register an account and return the response body
    pub async fn register(&self, username: &str, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/auth/register")
            .json(&json!({
                "username": username,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/auth/login")
            .json(&json!({
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register and log in, returning (user id, access token, refresh token)
    pub async fn signed_in_user(&self, username: &str, email: &str) -> (String, String, String) {
        let body: Value = self
            .register(username, email, "longpw123")
            .await
            .json()
            .await
            .expect("Failed to parse response");
        let user_id = body["data"]["id"].as_str().unwrap().to_string();

        let body: Value = self
            .login(email, "longpw123")
            .await
            .json()
            .await
            .expect("Failed to parse response");

        (
            user_id,
            body["data"]["access_token"].as_str().unwrap().to_string(),
            body["data"]["refresh_token"].as_str().unwrap().to_string(),
        )
    }
}

fn codec() -> TokenCodec {
    TokenCodec::new(JWT_SECRET, Duration::minutes(15), Duration::days(7))
}
