//! Follow service
//!
//! Following relationships between users.

use tracing::{info, instrument};

use warbler_core::entities::User;
use warbler_core::error::DomainError;
use warbler_core::value_objects::UserId;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Follow service
pub struct FollowService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FollowService<'a> {
    /// Create a new FollowService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Make `follower_id` follow `followed_id`
    ///
    /// Following yourself is rejected; following someone twice is a no-op.
    #[instrument(skip(self))]
    pub async fn follow(&self, follower_id: UserId, followed_id: UserId) -> ServiceResult<()> {
        if follower_id == followed_id {
            return Err(DomainError::SelfFollow.into());
        }
        self.ensure_exists(followed_id).await?;

        self.ctx.follow_repo().follow(follower_id, followed_id).await?;

        info!(%follower_id, %followed_id, "Follow created");
        Ok(())
    }

    /// Make `follower_id` stop following `followed_id`
    #[instrument(skip(self))]
    pub async fn unfollow(&self, follower_id: UserId, followed_id: UserId) -> ServiceResult<()> {
        self.ensure_exists(followed_id).await?;

        self.ctx.follow_repo().unfollow(follower_id, followed_id).await?;

        info!(%follower_id, %followed_id, "Follow removed");
        Ok(())
    }

    /// Check whether `follower_id` follows `followed_id`
    #[instrument(skip(self))]
    pub async fn is_following(
        &self,
        follower_id: UserId,
        followed_id: UserId,
    ) -> ServiceResult<bool> {
        Ok(self
            .ctx
            .follow_repo()
            .is_following(follower_id, followed_id)
            .await?)
    }

    /// Users who follow `user_id`
    #[instrument(skip(self))]
    pub async fn followers(&self, user_id: UserId) -> ServiceResult<Vec<User>> {
        self.ensure_exists(user_id).await?;
        Ok(self.ctx.follow_repo().followers(user_id).await?)
    }

    /// Users that `user_id` follows
    #[instrument(skip(self))]
    pub async fn following(&self, user_id: UserId) -> ServiceResult<Vec<User>> {
        self.ensure_exists(user_id).await?;
        Ok(self.ctx.follow_repo().following(user_id).await?)
    }

    async fn ensure_exists(&self, user_id: UserId) -> ServiceResult<()> {
        if self.ctx.user_repo().find_by_id(user_id).await?.is_none() {
            return Err(ServiceError::not_found("User", user_id.to_string()));
        }
        Ok(())
    }
}
