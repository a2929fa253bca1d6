//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, forging session
//! cookies, and resetting test data.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, Ordering};
use std::time::Duration;

use anyhow::Result;
use reqwest::{header, Client, Response};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use warbler_common::AppConfig;
use warbler_core::value_objects::UserId;
use warbler_db::{delete_all_rows, PgPool};
use warbler_web::{create_app, create_app_state, session_key, CURR_USER_KEY};

/// Counter for unique test ports
static PORT_COUNTER: AtomicU16 = AtomicU16::new(19000);

/// Get a unique port for testing
pub fn get_test_port() -> u16 {
    PORT_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Session secret used when the environment does not provide one
const TEST_SESSION_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub pool: PgPool,
    session_secret: String,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let port = get_test_port();
        let addr = SocketAddr::from(([127, 0, 0, 1], port));

        let session_secret = config.session.secret.clone();
        let pool = PgPool::connect(&config.database.url).await?;

        // Create app state (creates the schema on startup)
        let state = create_app_state(config).await?;

        // Build application
        let app = create_app(state);

        // Bind to port
        let listener = TcpListener::bind(addr).await?;
        let actual_addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        // Create HTTP client with a cookie store so login sessions persist
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr: actual_addr,
            client,
            pool,
            session_secret,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Forge a signed session cookie for a user
    ///
    /// Produces the same cookie the server sets at login, so tests can
    /// act as a logged-in user without going through the login form.
    pub fn session_cookie(&self, user_id: UserId) -> String {
        let key = session_key(&self.session_secret);
        let mut jar = cookie::CookieJar::new();
        jar.signed_mut(&key)
            .add(cookie::Cookie::new(CURR_USER_KEY, user_id.to_string()));
        let value = jar
            .get(CURR_USER_KEY)
            .map(|c| c.value().to_string())
            .unwrap_or_default();
        format!("{CURR_USER_KEY}={value}")
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request as a logged-in user
    pub async fn get_as(&self, path: &str, user_id: UserId) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header(header::COOKIE, self.session_cookie(user_id))
            .send()
            .await?)
    }

    /// Make a POST request with a form body
    pub async fn post_form<T: Serialize>(&self, path: &str, form: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).form(form).send().await?)
    }

    /// Make a POST request with a form body as a logged-in user
    pub async fn post_form_as<T: Serialize>(
        &self,
        path: &str,
        user_id: UserId,
        form: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header(header::COOKIE, self.session_cookie(user_id))
            .form(form)
            .send()
            .await?)
    }

    /// Make a bodyless POST request as a logged-in user
    pub async fn post_as(&self, path: &str, user_id: UserId) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header(header::COOKIE, self.session_cookie(user_id))
            .send()
            .await?)
    }

    /// Delete every row from every table
    pub async fn reset_db(&self) -> Result<()> {
        delete_all_rows(&self.pool).await?;
        Ok(())
    }
}

/// Create a test configuration from the environment
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    if std::env::var("SESSION_SECRET").is_err() {
        std::env::set_var("SESSION_SECRET", TEST_SESSION_SECRET);
    }

    AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Helper to check if the test environment is available
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Assert response status and return the body text
pub async fn assert_page(response: Response, expected_status: reqwest::StatusCode) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    if status != expected_status {
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(body)
}
