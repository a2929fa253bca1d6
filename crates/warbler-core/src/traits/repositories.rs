//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Message, NewMessage, NewUser, User};
use crate::error::DomainError;
use crate::value_objects::{MessageId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if a username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Check if an email is already registered
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Insert a new user and return it with its database-assigned id
    async fn create(&self, new_user: &NewUser, password_hash: &str) -> RepoResult<User>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find message by ID
    async fn find_by_id(&self, id: MessageId) -> RepoResult<Option<Message>>;

    /// List a user's messages, newest first
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<Message>>;

    /// Count a user's messages
    async fn count_by_user(&self, user_id: UserId) -> RepoResult<i64>;

    /// Recent messages from the given user and everyone they follow,
    /// newest first, capped at `limit`
    async fn timeline(&self, user_id: UserId, limit: i64) -> RepoResult<Vec<Message>>;

    /// Messages the given user has liked, newest first
    async fn find_liked_by_user(&self, user_id: UserId) -> RepoResult<Vec<Message>>;

    /// Insert a new message and return it with its database-assigned id
    async fn create(&self, new_message: &NewMessage) -> RepoResult<Message>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Add a follow edge; adding an existing edge is a no-op
    async fn follow(&self, follower_id: UserId, followed_id: UserId) -> RepoResult<()>;

    /// Remove a follow edge; removing a missing edge is a no-op
    async fn unfollow(&self, follower_id: UserId, followed_id: UserId) -> RepoResult<()>;

    /// Membership check on the follow edge
    async fn is_following(&self, follower_id: UserId, followed_id: UserId) -> RepoResult<bool>;

    /// Users who follow the given user
    async fn followers(&self, user_id: UserId) -> RepoResult<Vec<User>>;

    /// Users the given user follows
    async fn following(&self, user_id: UserId) -> RepoResult<Vec<User>>;

    /// Count of users who follow the given user
    async fn follower_count(&self, user_id: UserId) -> RepoResult<i64>;

    /// Count of users the given user follows
    async fn following_count(&self, user_id: UserId) -> RepoResult<i64>;
}

// ============================================================================
// Like Repository
// ============================================================================

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Record a like; liking the same message twice is a no-op
    async fn like(&self, user_id: UserId, message_id: MessageId) -> RepoResult<()>;

    /// Remove a like; removing a missing like is a no-op
    async fn unlike(&self, user_id: UserId, message_id: MessageId) -> RepoResult<()>;

    /// Check whether the user has liked the message
    async fn is_liked(&self, user_id: UserId, message_id: MessageId) -> RepoResult<bool>;

    /// Count of messages the user has liked
    async fn count_by_user(&self, user_id: UserId) -> RepoResult<i64>;
}
