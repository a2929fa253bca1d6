//! Test fixtures and data generators
//!
//! Provides reusable test data and direct-to-database setup for
//! integration tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use serde::Serialize;

use warbler_core::entities::{Message, User};
use warbler_core::value_objects::UserId;
use warbler_db::PgPool;
use warbler_service::dto::{NewMessageRequest, SignupRequest};
use warbler_service::{AuthService, MessageService, ServiceContext};

/// Counter for unique test data within a run
static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Get a suffix unique across test runs
///
/// Seeded from the wall clock so fixtures from an earlier run against
/// the same database never collide with the current one.
pub fn unique_suffix() -> u64 {
    static SEED: OnceLock<u64> = OnceLock::new();
    let seed = *SEED.get_or_init(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_micros()).unwrap_or(u64::MAX))
    });
    seed + COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Signup form body
#[derive(Debug, Clone, Serialize)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub image_url: Option<String>,
}

impl SignupForm {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "password".to_string(),
            image_url: None,
        }
    }
}

/// Login form body
#[derive(Debug, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn from_signup(form: &SignupForm) -> Self {
        Self {
            username: form.username.clone(),
            password: form.password.clone(),
        }
    }
}

/// New message form body
#[derive(Debug, Serialize)]
pub struct MessageForm {
    pub text: String,
}

/// Create a user directly through the service layer
pub async fn create_user(pool: &PgPool, username: &str) -> Result<User> {
    let ctx = ServiceContext::from_pool(pool.clone());
    let user = AuthService::new(&ctx)
        .signup(SignupRequest {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password: "password".to_string(),
            image_url: None,
        })
        .await?;
    Ok(user)
}

/// Create a user with a unique generated username
pub async fn create_unique_user(pool: &PgPool) -> Result<User> {
    let username = format!("testuser{}", unique_suffix());
    create_user(pool, &username).await
}

/// Post a message directly through the service layer
pub async fn create_message(pool: &PgPool, user_id: UserId, text: &str) -> Result<Message> {
    let ctx = ServiceContext::from_pool(pool.clone());
    let message = MessageService::new(&ctx)
        .post_message(
            user_id,
            NewMessageRequest {
                text: text.to_string(),
            },
        )
        .await?;
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_suffix_is_seeded_from_the_clock() {
        let first = unique_suffix();
        let second = unique_suffix();
        assert_ne!(first, second);
        // Microseconds since the epoch, so a fresh process never
        // restarts at a small fixed value
        assert!(first > 1_600_000_000_000_000);
    }

    #[test]
    fn test_signup_form_unique_generates_distinct_users() {
        let a = SignupForm::unique();
        let b = SignupForm::unique();
        assert_ne!(a.username, b.username);
        assert_ne!(a.email, b.email);
        assert!(a.username.len() <= 32);
    }
}
