//! User service
//!
//! User lookup and profile page aggregation.

use tracing::instrument;

use warbler_core::entities::User;
use warbler_core::value_objects::UserId;

use crate::dto::{ProfileStats, UserProfile};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id.to_string()))
    }

    /// Get a user by username
    #[instrument(skip(self))]
    pub async fn get_user_by_username(&self, username: &str) -> ServiceResult<Option<User>> {
        Ok(self.ctx.user_repo().find_by_username(username).await?)
    }

    /// Aggregate counters for a user's profile page
    #[instrument(skip(self))]
    pub async fn profile_stats(&self, id: UserId) -> ServiceResult<ProfileStats> {
        Ok(ProfileStats {
            messages: self.ctx.message_repo().count_by_user(id).await?,
            followers: self.ctx.follow_repo().follower_count(id).await?,
            following: self.ctx.follow_repo().following_count(id).await?,
            likes: self.ctx.like_repo().count_by_user(id).await?,
        })
    }

    /// Load everything the profile page needs for one user
    #[instrument(skip(self))]
    pub async fn get_profile(&self, id: UserId) -> ServiceResult<UserProfile> {
        let user = self.get_user(id).await?;
        let stats = self.profile_stats(id).await?;
        let messages = self.ctx.message_repo().find_by_user(id).await?;

        Ok(UserProfile {
            user,
            stats,
            messages,
        })
    }
}
