//! End-to-end flows through the signup, login, follow, and like forms
//!
//! These tests require a running PostgreSQL database. Set DATABASE_URL
//! before running; tests are skipped otherwise.

use integration_tests::{
    assert_page, check_test_env, create_message, create_unique_user, LoginForm, MessageForm,
    SignupForm, TestServer,
};
use reqwest::StatusCode;

#[tokio::test]
async fn test_signup_logs_user_in() {
    if !check_test_env() {
        return;
    }
    let server = TestServer::start().await.unwrap();

    let form = SignupForm::unique();
    let response = server.post_form("/signup", &form).await.unwrap();

    // Redirects home, where the navbar shows the logged-in state
    let body = assert_page(response, StatusCode::OK).await.unwrap();
    assert!(body.contains("Log out"));
    assert!(body.contains(&format!("@{}", form.username)));
}

#[tokio::test]
async fn test_signup_duplicate_username_rerenders_form() {
    if !check_test_env() {
        return;
    }
    let server = TestServer::start().await.unwrap();

    let form = SignupForm::unique();
    server.post_form("/signup", &form).await.unwrap();

    let mut duplicate = form.clone();
    duplicate.email = format!("other-{}", form.email);
    let response = server.post_form("/signup", &duplicate).await.unwrap();

    let body = assert_page(response, StatusCode::OK).await.unwrap();
    assert!(body.contains("Username already taken"));
    assert!(!body.contains("Log out"));
}

#[tokio::test]
async fn test_login_and_logout_flow() {
    if !check_test_env() {
        return;
    }
    let server = TestServer::start().await.unwrap();

    let form = SignupForm::unique();
    server.post_form("/signup", &form).await.unwrap();

    // Log out lands on the login page
    let response = server
        .client
        .post(format!("{}/logout", server.base_url()))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("Welcome back."));

    // Home is anonymous again
    let body = server.get("/").await.unwrap().text().await.unwrap();
    assert!(body.contains("Sign up now to get your own personalized timeline!"));

    // Logging back in restores the session
    let response = server
        .post_form("/login", &LoginForm::from_signup(&form))
        .await
        .unwrap();
    let body = response.text().await.unwrap();
    assert!(body.contains("Log out"));
}

#[tokio::test]
async fn test_login_with_wrong_password_fails() {
    if !check_test_env() {
        return;
    }
    let server = TestServer::start().await.unwrap();

    let form = SignupForm::unique();
    server.post_form("/signup", &form).await.unwrap();
    server
        .client
        .post(format!("{}/logout", server.base_url()))
        .send()
        .await
        .unwrap();

    let response = server
        .post_form(
            "/login",
            &LoginForm {
                username: form.username.clone(),
                password: "wrongpassword".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("Invalid credentials."));
    assert!(!body.contains("Log out"));
}

#[tokio::test]
async fn test_follow_and_unfollow_roundtrip() {
    if !check_test_env() {
        return;
    }
    let server = TestServer::start().await.unwrap();

    let u1 = create_unique_user(&server.pool).await.unwrap();
    let u2 = create_unique_user(&server.pool).await.unwrap();

    // Follow lands on the current user's following page
    let response = server
        .post_as(&format!("/users/follow/{}", u2.id), u1.id)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains(&format!("@{}", u2.username)));

    // Unfollow removes them again
    let response = server
        .post_as(&format!("/users/stop-following/{}", u2.id), u1.id)
        .await
        .unwrap();
    let body = response.text().await.unwrap();
    let cards = body.split(r#"<div class="card user-card">"#).count() - 1;
    assert_eq!(cards, 0);
}

#[tokio::test]
async fn test_follow_yourself_is_rejected() {
    if !check_test_env() {
        return;
    }
    let server = TestServer::start().await.unwrap();
    let user = create_unique_user(&server.pool).await.unwrap();

    let response = server
        .post_as(&format!("/users/follow/{}", user.id), user.id)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_follow_requires_login() {
    if !check_test_env() {
        return;
    }
    let server = TestServer::start().await.unwrap();
    let user = create_unique_user(&server.pool).await.unwrap();

    // Without a session the action redirects to the anonymous home page
    let response = server
        .client
        .post(format!("{}/users/follow/{}", server.base_url(), user.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("Sign up now to get your own personalized timeline!"));
}

#[tokio::test]
async fn test_post_message_shows_on_profile() {
    if !check_test_env() {
        return;
    }
    let server = TestServer::start().await.unwrap();
    let user = create_unique_user(&server.pool).await.unwrap();

    let response = server
        .post_form_as(
            "/messages/new",
            user.id,
            &MessageForm {
                text: "Hello warbler".to_string(),
            },
        )
        .await
        .unwrap();

    // Redirects to the user's profile with the new message on it
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("Hello warbler"));
}

#[tokio::test]
async fn test_message_over_140_chars_is_rejected() {
    if !check_test_env() {
        return;
    }
    let server = TestServer::start().await.unwrap();
    let user = create_unique_user(&server.pool).await.unwrap();

    let response = server
        .post_form_as(
            "/messages/new",
            user.id,
            &MessageForm {
                text: "x".repeat(141),
            },
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_like_toggle_roundtrip() {
    if !check_test_env() {
        return;
    }
    let server = TestServer::start().await.unwrap();

    let user = create_unique_user(&server.pool).await.unwrap();
    let author = create_unique_user(&server.pool).await.unwrap();
    let message = create_message(&server.pool, author.id, "toggled warble")
        .await
        .unwrap();

    // First toggle likes the message
    server
        .post_as(&format!("/messages/{}/like", message.id), user.id)
        .await
        .unwrap();
    let body = server
        .get_as(&format!("/users/{}/likes", user.id), user.id)
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("toggled warble"));

    // Second toggle removes the like
    server
        .post_as(&format!("/messages/{}/like", message.id), user.id)
        .await
        .unwrap();
    let body = server
        .get_as(&format!("/users/{}/likes", user.id), user.id)
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(!body.contains("toggled warble"));
}

#[tokio::test]
async fn test_health_endpoints() {
    if !check_test_env() {
        return;
    }
    let server = TestServer::start().await.unwrap();

    let body = assert_page(server.get("/health").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(body.contains(r#""status":"ok""#));
    assert!(body.contains(r#""service":""#));

    let body = assert_page(server.get("/health/ready").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(body.contains(r#""database":true"#));
}
