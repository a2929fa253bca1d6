//! Message service
//!
//! Message posting, lookup, and timeline assembly.

use std::collections::HashMap;

use tracing::{info, instrument};
use validator::Validate;

use warbler_core::entities::{Message, NewMessage, User};
use warbler_core::value_objects::{MessageId, UserId};

use crate::dto::{MessageWithAuthor, NewMessageRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Home timeline page size
const TIMELINE_LIMIT: i64 = 100;

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a new message for a user
    #[instrument(skip(self, request), fields(user_id = %user_id))]
    pub async fn post_message(
        &self,
        user_id: UserId,
        request: NewMessageRequest,
    ) -> ServiceResult<Message> {
        request.validate()?;

        if request.text.trim().is_empty() {
            return Err(ServiceError::validation("Message must not be blank"));
        }

        let message = self
            .ctx
            .message_repo()
            .create(&NewMessage {
                user_id,
                text: request.text,
            })
            .await?;

        info!(message_id = %message.id, "Message posted");

        Ok(message)
    }

    /// Get a message by ID
    #[instrument(skip(self))]
    pub async fn get_message(&self, id: MessageId) -> ServiceResult<Message> {
        self.ctx
            .message_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Message", id.to_string()))
    }

    /// Home timeline for a user: their own messages plus those of users
    /// they follow, newest first
    #[instrument(skip(self))]
    pub async fn timeline(&self, user_id: UserId) -> ServiceResult<Vec<MessageWithAuthor>> {
        let messages = self
            .ctx
            .message_repo()
            .timeline(user_id, TIMELINE_LIMIT)
            .await?;
        self.with_authors(messages).await
    }

    /// Messages liked by a user, with their authors
    #[instrument(skip(self))]
    pub async fn liked_by(&self, user_id: UserId) -> ServiceResult<Vec<MessageWithAuthor>> {
        let messages = self.ctx.message_repo().find_liked_by_user(user_id).await?;
        self.with_authors(messages).await
    }

    /// Resolve the author of each message
    async fn with_authors(
        &self,
        messages: Vec<Message>,
    ) -> ServiceResult<Vec<MessageWithAuthor>> {
        let mut authors: HashMap<UserId, User> = HashMap::new();
        for message in &messages {
            if !authors.contains_key(&message.user_id) {
                let author = self
                    .ctx
                    .user_repo()
                    .find_by_id(message.user_id)
                    .await?
                    .ok_or_else(|| {
                        ServiceError::not_found("User", message.user_id.to_string())
                    })?;
                authors.insert(message.user_id, author);
            }
        }

        Ok(messages
            .into_iter()
            .filter_map(|message| {
                let author = authors.get(&message.user_id).cloned()?;
                Some(MessageWithAuthor { message, author })
            })
            .collect())
    }
}
