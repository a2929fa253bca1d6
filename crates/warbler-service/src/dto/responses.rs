//! Response DTOs for the service layer
//!
//! These carry fully resolved data for page rendering.

use serde::Serialize;

use warbler_core::entities::{Message, User};

/// A message paired with its author, ready for display
#[derive(Debug, Clone, Serialize)]
pub struct MessageWithAuthor {
    pub message: Message,
    pub author: User,
}

/// Aggregate counters shown on a user's profile page
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ProfileStats {
    pub messages: i64,
    pub followers: i64,
    pub following: i64,
    pub likes: i64,
}

/// A user's profile page data
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub user: User,
    pub stats: ProfileStats,
    pub messages: Vec<Message>,
}
