//! PostgreSQL repository implementations

mod error;
mod follow;
mod like;
mod message;
mod user;

pub use follow::PgFollowRepository;
pub use like::PgLikeRepository;
pub use message::PgMessageRepository;
pub use user::PgUserRepository;
