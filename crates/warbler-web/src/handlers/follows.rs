//! Follow handlers
//!
//! Follow and unfollow actions for the logged-in user.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use warbler_core::value_objects::UserId;
use warbler_service::FollowService;

use crate::response::PageResult;
use crate::session::CurrentUser;
use crate::state::AppState;

/// Follow a user
///
/// POST /users/follow/:user_id
pub async fn follow(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(user_id): Path<i64>,
) -> PageResult<Redirect> {
    FollowService::new(state.service_context())
        .follow(current.user_id, UserId::new(user_id))
        .await?;

    Ok(Redirect::to(&format!(
        "/users/{}/following",
        current.user_id
    )))
}

/// Stop following a user
///
/// POST /users/stop-following/:user_id
pub async fn stop_following(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(user_id): Path<i64>,
) -> PageResult<Redirect> {
    FollowService::new(state.service_context())
        .unfollow(current.user_id, UserId::new(user_id))
        .await?;

    Ok(Redirect::to(&format!(
        "/users/{}/following",
        current.user_id
    )))
}
