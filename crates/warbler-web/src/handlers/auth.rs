//! Authentication handlers
//!
//! Signup, login, and logout pages and form handlers.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::SignedCookieJar;

use warbler_service::dto::{LoginRequest, SignupRequest};
use warbler_service::AuthService;

use crate::response::PageResult;
use crate::session;
use crate::state::AppState;
use crate::views;

/// Show the signup form
///
/// GET /signup
pub async fn signup_form() -> Html<String> {
    Html(views::signup_page(None))
}

/// Create a new account and log the user in
///
/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(request): Form<SignupRequest>,
) -> PageResult<Response> {
    let service = AuthService::new(state.service_context());

    match service.signup(request).await {
        Ok(user) => {
            let jar = session::log_in(jar, user.id);
            Ok((jar, Redirect::to("/")).into_response())
        }
        // Re-render the form with the problem instead of an error page
        Err(err) if matches!(err.status_code(), 400 | 409) => {
            Ok(Html(views::signup_page(Some(&err.to_string()))).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// Show the login form
///
/// GET /login
pub async fn login_form() -> Html<String> {
    Html(views::login_page(None))
}

/// Log in with username and password
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(request): Form<LoginRequest>,
) -> PageResult<Response> {
    let service = AuthService::new(state.service_context());

    match service
        .authenticate(&request.username, &request.password)
        .await?
    {
        Some(user) => {
            let jar = session::log_in(jar, user.id);
            Ok((jar, Redirect::to("/")).into_response())
        }
        None => Ok(Html(views::login_page(Some("Invalid credentials."))).into_response()),
    }
}

/// Log out and clear the session
///
/// POST /logout
pub async fn logout(jar: SignedCookieJar) -> (SignedCookieJar, Redirect) {
    (session::log_out(jar), Redirect::to("/login"))
}
