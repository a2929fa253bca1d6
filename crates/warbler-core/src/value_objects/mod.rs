//! Value objects for the domain layer

mod id;

pub use id::{IdParseError, MessageId, UserId};
