//! Like service
//!
//! Likes on messages, including the toggle used by the like button.

use tracing::{info, instrument};

use warbler_core::value_objects::{MessageId, UserId};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Like service
pub struct LikeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LikeService<'a> {
    /// Create a new LikeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Like a message; liking twice is a no-op
    #[instrument(skip(self))]
    pub async fn like(&self, user_id: UserId, message_id: MessageId) -> ServiceResult<()> {
        self.ensure_message_exists(message_id).await?;
        self.ctx.like_repo().like(user_id, message_id).await?;
        info!(%user_id, %message_id, "Message liked");
        Ok(())
    }

    /// Remove a like from a message
    #[instrument(skip(self))]
    pub async fn unlike(&self, user_id: UserId, message_id: MessageId) -> ServiceResult<()> {
        self.ensure_message_exists(message_id).await?;
        self.ctx.like_repo().unlike(user_id, message_id).await?;
        info!(%user_id, %message_id, "Message unliked");
        Ok(())
    }

    /// Toggle a like; returns true when the message ends up liked
    #[instrument(skip(self))]
    pub async fn toggle(&self, user_id: UserId, message_id: MessageId) -> ServiceResult<bool> {
        self.ensure_message_exists(message_id).await?;

        if self.ctx.like_repo().is_liked(user_id, message_id).await? {
            self.ctx.like_repo().unlike(user_id, message_id).await?;
            info!(%user_id, %message_id, "Message unliked");
            Ok(false)
        } else {
            self.ctx.like_repo().like(user_id, message_id).await?;
            info!(%user_id, %message_id, "Message liked");
            Ok(true)
        }
    }

    /// Check whether a user has liked a message
    #[instrument(skip(self))]
    pub async fn is_liked(&self, user_id: UserId, message_id: MessageId) -> ServiceResult<bool> {
        Ok(self.ctx.like_repo().is_liked(user_id, message_id).await?)
    }

    /// Number of messages a user has liked
    #[instrument(skip(self))]
    pub async fn count_for_user(&self, user_id: UserId) -> ServiceResult<i64> {
        Ok(self.ctx.like_repo().count_by_user(user_id).await?)
    }

    async fn ensure_message_exists(&self, message_id: MessageId) -> ServiceResult<()> {
        if self.ctx.message_repo().find_by_id(message_id).await?.is_none() {
            return Err(ServiceError::not_found("Message", message_id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Integration tests live in tests/integration with a real database
}
