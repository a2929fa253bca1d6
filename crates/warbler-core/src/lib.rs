//! # warbler-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Message, NewMessage, NewUser, User, DEFAULT_IMAGE_URL};
pub use error::DomainError;
pub use traits::{
    FollowRepository, LikeRepository, MessageRepository, RepoResult, UserRepository,
};
pub use value_objects::{IdParseError, MessageId, UserId};
