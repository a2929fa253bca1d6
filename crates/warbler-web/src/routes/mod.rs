//! Route definitions
//!
//! All pages and form actions organized by area.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, follows, health, messages, pages};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .merge(auth_routes())
        .merge(user_routes())
        .merge(message_routes())
        .merge(health_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", get(auth::signup_form).post(auth::signup))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", post(auth::logout))
}

/// User pages and follow actions
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:user_id", get(pages::profile))
        .route("/users/:user_id/following", get(pages::following))
        .route("/users/:user_id/followers", get(pages::followers))
        .route("/users/:user_id/likes", get(pages::likes))
        .route("/users/follow/:user_id", post(follows::follow))
        .route("/users/stop-following/:user_id", post(follows::stop_following))
}

/// Message routes
fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/messages/new", post(messages::new_message))
        .route("/messages/:message_id", get(messages::show_message))
        .route("/messages/:message_id/like", post(messages::toggle_like))
}

/// Health check routes
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
