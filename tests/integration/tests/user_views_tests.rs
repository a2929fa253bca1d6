//! View tests for the server-rendered pages
//!
//! These tests require a running PostgreSQL database. Set DATABASE_URL
//! before running; tests are skipped otherwise.

use integration_tests::{
    assert_page, check_test_env, create_message, create_unique_user, TestServer,
};
use reqwest::StatusCode;
use warbler_service::{FollowService, LikeService, ServiceContext};

#[tokio::test]
async fn test_anonymous_home_shows_signup_cta() {
    if !check_test_env() {
        return;
    }
    let server = TestServer::start().await.unwrap();

    let body = assert_page(server.get("/").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(body.contains("Sign up now to get your own personalized timeline!"));
    assert!(!body.contains("Log out"));
}

#[tokio::test]
async fn test_logged_in_home_shows_logout() {
    if !check_test_env() {
        return;
    }
    let server = TestServer::start().await.unwrap();
    let user = create_unique_user(&server.pool).await.unwrap();

    let body = assert_page(server.get_as("/", user.id).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(body.contains("Log out"));
    assert!(body.contains(&format!("@{}", user.username)));
}

#[tokio::test]
async fn test_profile_shows_stat_counters() {
    if !check_test_env() {
        return;
    }
    let server = TestServer::start().await.unwrap();

    let user = create_unique_user(&server.pool).await.unwrap();
    let other = create_unique_user(&server.pool).await.unwrap();

    // Two messages by the user, one by someone else that the user likes
    create_message(&server.pool, user.id, "a warble").await.unwrap();
    create_message(&server.pool, user.id, "a second warble").await.unwrap();
    let liked = create_message(&server.pool, other.id, "likeable warble")
        .await
        .unwrap();

    let ctx = ServiceContext::from_pool(server.pool.clone());
    LikeService::new(&ctx).like(user.id, liked.id).await.unwrap();

    let response = server
        .get_as(&format!("/users/{}", user.id), user.id)
        .await
        .unwrap();
    let body = assert_page(response, StatusCode::OK).await.unwrap();

    assert!(body.contains(&format!("@{}", user.username)));

    // Exactly four stat counters: messages, followers, following, likes
    let stats: Vec<&str> = body.split(r#"<li class="stat">"#).skip(1).collect();
    assert_eq!(stats.len(), 4);
    assert!(stats[0].contains(">2<"));
    assert!(stats[1].contains(">0<"));
    assert!(stats[2].contains(">0<"));
    assert!(stats[3].contains(">1<"));
}

#[tokio::test]
async fn test_profile_is_visible_without_login() {
    if !check_test_env() {
        return;
    }
    let server = TestServer::start().await.unwrap();
    let user = create_unique_user(&server.pool).await.unwrap();
    create_message(&server.pool, user.id, "public warble").await.unwrap();

    let response = server.get(&format!("/users/{}", user.id)).await.unwrap();
    let body = assert_page(response, StatusCode::OK).await.unwrap();
    assert!(body.contains("public warble"));
}

#[tokio::test]
async fn test_unknown_user_profile_returns_404() {
    if !check_test_env() {
        return;
    }
    let server = TestServer::start().await.unwrap();

    let response = server.get("/users/999999999").await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_following_and_followers_pages() {
    if !check_test_env() {
        return;
    }
    let server = TestServer::start().await.unwrap();

    let u1 = create_unique_user(&server.pool).await.unwrap();
    let u2 = create_unique_user(&server.pool).await.unwrap();

    let ctx = ServiceContext::from_pool(server.pool.clone());
    FollowService::new(&ctx).follow(u1.id, u2.id).await.unwrap();

    let response = server
        .get_as(&format!("/users/{}/following", u1.id), u1.id)
        .await
        .unwrap();
    let body = assert_page(response, StatusCode::OK).await.unwrap();
    assert!(body.contains(&format!("@{}", u2.username)));

    let response = server
        .get_as(&format!("/users/{}/followers", u2.id), u1.id)
        .await
        .unwrap();
    let body = assert_page(response, StatusCode::OK).await.unwrap();
    assert!(body.contains(&format!("@{}", u1.username)));
}

#[tokio::test]
async fn test_likes_page_lists_liked_messages() {
    if !check_test_env() {
        return;
    }
    let server = TestServer::start().await.unwrap();

    let user = create_unique_user(&server.pool).await.unwrap();
    let author = create_unique_user(&server.pool).await.unwrap();
    let message = create_message(&server.pool, author.id, "much liked warble")
        .await
        .unwrap();

    let ctx = ServiceContext::from_pool(server.pool.clone());
    LikeService::new(&ctx).like(user.id, message.id).await.unwrap();

    let response = server
        .get_as(&format!("/users/{}/likes", user.id), user.id)
        .await
        .unwrap();
    let body = assert_page(response, StatusCode::OK).await.unwrap();
    assert!(body.contains("much liked warble"));
    assert!(body.contains(&format!("@{}", author.username)));
}

#[tokio::test]
async fn test_single_message_page() {
    if !check_test_env() {
        return;
    }
    let server = TestServer::start().await.unwrap();

    let user = create_unique_user(&server.pool).await.unwrap();
    let message = create_message(&server.pool, user.id, "a lone warble")
        .await
        .unwrap();

    let response = server
        .get(&format!("/messages/{}", message.id))
        .await
        .unwrap();
    let body = assert_page(response, StatusCode::OK).await.unwrap();
    assert!(body.contains("a lone warble"));
}
