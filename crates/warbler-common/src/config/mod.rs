//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment, ServerConfig, SessionConfig,
    MIN_SESSION_SECRET_LEN,
};
