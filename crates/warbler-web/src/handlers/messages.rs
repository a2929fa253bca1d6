//! Message handlers
//!
//! Posting, viewing, and liking messages.

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};

use warbler_core::value_objects::MessageId;
use warbler_service::dto::{MessageWithAuthor, NewMessageRequest};
use warbler_service::{LikeService, MessageService, UserService};

use crate::response::PageResult;
use crate::session::{CurrentUser, OptionalCurrentUser};
use crate::state::AppState;
use crate::views;

/// Post a new message
///
/// POST /messages/new
pub async fn new_message(
    State(state): State<AppState>,
    current: CurrentUser,
    Form(request): Form<NewMessageRequest>,
) -> PageResult<Redirect> {
    MessageService::new(state.service_context())
        .post_message(current.user_id, request)
        .await?;

    Ok(Redirect::to(&format!("/users/{}", current.user_id)))
}

/// Show a single message
///
/// GET /messages/:message_id
pub async fn show_message(
    State(state): State<AppState>,
    session: OptionalCurrentUser,
    Path(message_id): Path<i64>,
) -> PageResult<Html<String>> {
    let ctx = state.service_context();

    let message = MessageService::new(ctx)
        .get_message(MessageId::new(message_id))
        .await?;
    let author = UserService::new(ctx).get_user(message.user_id).await?;

    let nav = match session.0 {
        Some(current) => UserService::new(ctx).get_user(current.user_id).await.ok(),
        None => None,
    };

    Ok(Html(views::message_page(
        nav.as_ref(),
        &MessageWithAuthor { message, author },
    )))
}

/// Toggle a like on a message
///
/// POST /messages/:message_id/like
pub async fn toggle_like(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(message_id): Path<i64>,
) -> PageResult<Redirect> {
    LikeService::new(state.service_context())
        .toggle(current.user_id, MessageId::new(message_id))
        .await?;

    Ok(Redirect::to("/"))
}
