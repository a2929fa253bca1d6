//! User entity - represents a warbler account

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::UserId;

/// Image shown for users that never uploaded a profile picture
pub const DEFAULT_IMAGE_URL: &str = "/static/images/default-pic.png";

/// A registered user account
///
/// The password hash never travels with the entity; it stays behind the
/// repository boundary and is only touched during signup and authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Get the profile image URL, falling back to the default picture
    pub fn image_url_or_default(&self) -> &str {
        self.image_url.as_deref().unwrap_or(DEFAULT_IMAGE_URL)
    }
}

/// Fields required to create a user; the id is assigned by the database
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub image_url: Option<String>,
}
