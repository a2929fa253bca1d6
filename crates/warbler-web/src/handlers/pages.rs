//! Page handlers
//!
//! Home timeline and user profile pages.

use axum::{
    extract::{Path, State},
    response::Html,
};

use warbler_core::entities::User;
use warbler_core::value_objects::UserId;
use warbler_service::{MessageService, ServiceError, UserService};

use crate::response::PageResult;
use crate::session::OptionalCurrentUser;
use crate::state::AppState;
use crate::views;

/// Resolve the navbar user for an optional session
///
/// A stale cookie (user since deleted) renders as anonymous rather than
/// an error.
async fn nav_user(state: &AppState, session: OptionalCurrentUser) -> PageResult<Option<User>> {
    let Some(current) = session.0 else {
        return Ok(None);
    };
    let service = UserService::new(state.service_context());
    match service.get_user(current.user_id).await {
        Ok(user) => Ok(Some(user)),
        Err(ServiceError::NotFound { .. }) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Home page
///
/// Logged-in users see their timeline; anonymous visitors get the
/// signup pitch.
///
/// GET /
pub async fn home(
    State(state): State<AppState>,
    session: OptionalCurrentUser,
) -> PageResult<Html<String>> {
    match nav_user(&state, session).await? {
        Some(user) => {
            let messages = MessageService::new(state.service_context())
                .timeline(user.id)
                .await?;
            Ok(Html(views::home_page(&user, &messages)))
        }
        None => Ok(Html(views::home_anon_page())),
    }
}

/// User profile page with messages and stat counters
///
/// GET /users/:user_id
pub async fn profile(
    State(state): State<AppState>,
    session: OptionalCurrentUser,
    Path(user_id): Path<i64>,
) -> PageResult<Html<String>> {
    let nav = nav_user(&state, session).await?;

    let user_service = UserService::new(state.service_context());
    let profile = user_service.get_profile(UserId::new(user_id)).await?;

    let messages: Vec<_> = profile
        .messages
        .iter()
        .cloned()
        .map(|message| warbler_service::dto::MessageWithAuthor {
            message,
            author: profile.user.clone(),
        })
        .collect();

    Ok(Html(views::profile_page(nav.as_ref(), &profile, &messages)))
}

/// Users that this user follows
///
/// GET /users/:user_id/following
pub async fn following(
    State(state): State<AppState>,
    session: OptionalCurrentUser,
    Path(user_id): Path<i64>,
) -> PageResult<Html<String>> {
    let nav = nav_user(&state, session).await?;
    let id = UserId::new(user_id);

    let profile = UserService::new(state.service_context()).get_profile(id).await?;
    let users = warbler_service::FollowService::new(state.service_context())
        .following(id)
        .await?;

    Ok(Html(views::user_list_page(
        nav.as_ref(),
        &profile,
        "Following",
        &users,
    )))
}

/// Users following this user
///
/// GET /users/:user_id/followers
pub async fn followers(
    State(state): State<AppState>,
    session: OptionalCurrentUser,
    Path(user_id): Path<i64>,
) -> PageResult<Html<String>> {
    let nav = nav_user(&state, session).await?;
    let id = UserId::new(user_id);

    let profile = UserService::new(state.service_context()).get_profile(id).await?;
    let users = warbler_service::FollowService::new(state.service_context())
        .followers(id)
        .await?;

    Ok(Html(views::user_list_page(
        nav.as_ref(),
        &profile,
        "Followers",
        &users,
    )))
}

/// Messages this user has liked
///
/// GET /users/:user_id/likes
pub async fn likes(
    State(state): State<AppState>,
    session: OptionalCurrentUser,
    Path(user_id): Path<i64>,
) -> PageResult<Html<String>> {
    let nav = nav_user(&state, session).await?;
    let id = UserId::new(user_id);

    let profile = UserService::new(state.service_context()).get_profile(id).await?;
    let liked = MessageService::new(state.service_context()).liked_by(id).await?;

    Ok(Html(views::likes_page(nav.as_ref(), &profile, &liked)))
}
