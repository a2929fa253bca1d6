//! Message entity - a short post ("warble") by a user

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::{MessageId, UserId};

/// Maximum message length in characters
pub const MAX_MESSAGE_LEN: usize = 140;

/// A message posted by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub id: MessageId,
    pub user_id: UserId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a message; the id is assigned by the database
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub user_id: UserId,
    pub text: String,
}
