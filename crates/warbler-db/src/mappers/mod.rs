//! Entity <-> model mappers

mod message;
mod user;
