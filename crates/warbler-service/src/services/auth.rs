//! Authentication service
//!
//! Handles user signup and credential checks.

use tracing::{info, instrument, warn};
use validator::Validate;

use warbler_common::auth::{hash_password, verify_password};
use warbler_core::entities::{NewUser, User};

use crate::dto::SignupRequest;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Sign up a new user
    ///
    /// Hashes the password and stores the user. The profile image falls
    /// back to the default picture when none is given.
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<User> {
        request.validate()?;

        if self.ctx.user_repo().username_exists(&request.username).await? {
            return Err(ServiceError::conflict("Username already taken"));
        }
        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let image_url = request.image_url.filter(|url| !url.trim().is_empty());
        let new_user = NewUser {
            username: request.username,
            email: request.email,
            image_url,
        };

        let user = self.ctx.user_repo().create(&new_user, &password_hash).await?;

        info!(user_id = %user.id, "User signed up successfully");

        Ok(user)
    }

    /// Check a username and password
    ///
    /// Returns the matching user, or `None` when the username is unknown
    /// or the password does not match.
    #[instrument(skip(self, password))]
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> ServiceResult<Option<User>> {
        let Some(user) = self.ctx.user_repo().find_by_username(username).await? else {
            warn!(username, "Authentication failed: user not found");
            return Ok(None);
        };

        let Some(password_hash) = self.ctx.user_repo().get_password_hash(user.id).await? else {
            warn!(user_id = %user.id, "Authentication failed: no password hash");
            return Ok(None);
        };

        let is_valid = verify_password(password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Authentication failed: invalid password");
            return Ok(None);
        }

        info!(user_id = %user.id, "User authenticated successfully");

        Ok(Some(user))
    }
}
