//! Request handlers organized by page area

pub mod auth;
pub mod follows;
pub mod health;
pub mod messages;
pub mod pages;
