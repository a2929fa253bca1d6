//! Domain entities

mod message;
mod user;

pub use message::{Message, NewMessage, MAX_MESSAGE_LEN};
pub use user::{NewUser, User, DEFAULT_IMAGE_URL};
