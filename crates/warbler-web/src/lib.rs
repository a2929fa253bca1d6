//! # warbler-web
//!
//! Server-rendered web application built with Axum.

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod session;
pub mod state;
pub mod views;

pub use server::{create_app, create_app_state, run, run_server};
pub use session::{session_key, CURR_USER_KEY};
pub use state::AppState;
