//! Data transfer objects for the service layer

pub mod requests;
pub mod responses;

pub use requests::{LoginRequest, NewMessageRequest, SignupRequest};
pub use responses::{MessageWithAuthor, ProfileStats, UserProfile};
