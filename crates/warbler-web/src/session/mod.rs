//! Signed-cookie session handling
//!
//! The logged-in user's ID is stored in a signed cookie. Extractors pull
//! it back out of incoming requests.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::Redirect,
};
use axum_extra::extract::cookie::{Cookie, Key, SignedCookieJar};

use warbler_core::value_objects::UserId;

/// Cookie name holding the logged-in user's ID
pub const CURR_USER_KEY: &str = "curr_user";

/// Derive the cookie signing key from the configured session secret
///
/// # Panics
/// Panics if the secret is shorter than 32 bytes; configuration loading
/// enforces the minimum length before this is reached.
pub fn session_key(secret: &str) -> Key {
    Key::derive_from(secret.as_bytes())
}

/// Add the session cookie for a user to the jar
pub fn log_in(jar: SignedCookieJar, user_id: UserId) -> SignedCookieJar {
    let cookie = Cookie::build((CURR_USER_KEY, user_id.to_string()))
        .path("/")
        .http_only(true)
        .build();
    jar.add(cookie)
}

/// Remove the session cookie from the jar
pub fn log_out(jar: SignedCookieJar) -> SignedCookieJar {
    jar.remove(Cookie::build((CURR_USER_KEY, "")).path("/").build())
}

/// Logged-in user extracted from the session cookie
///
/// Rejects with a redirect to the home page when no valid session exists.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    /// User ID from the session cookie
    pub user_id: UserId,
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::<Key>::from_request_parts(parts, state)
            .await
            .map_err(|_| Redirect::to("/"))?;

        let cookie = jar.get(CURR_USER_KEY).ok_or_else(|| Redirect::to("/"))?;
        let user_id = cookie
            .value()
            .parse::<UserId>()
            .map_err(|_| Redirect::to("/"))?;

        Ok(CurrentUser { user_id })
    }
}

/// Optional logged-in user
///
/// Holds `None` when no valid session cookie is present.
#[derive(Debug, Clone, Copy)]
pub struct OptionalCurrentUser(pub Option<CurrentUser>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalCurrentUser
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match CurrentUser::from_request_parts(parts, state).await {
            Ok(user) => Ok(OptionalCurrentUser(Some(user))),
            Err(_) => Ok(OptionalCurrentUser(None)),
        }
    }
}
