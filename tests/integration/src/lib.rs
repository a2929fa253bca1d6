//! Integration test utilities for the warbler web application
//!
//! This crate provides helpers for running end-to-end tests against
//! the server-rendered pages.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
