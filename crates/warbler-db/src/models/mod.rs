//! Database models with SQLx `FromRow` derives

mod message;
mod user;

pub use message::MessageModel;
pub use user::UserModel;
