//! Server-rendered HTML views
//!
//! Pages are assembled with plain string formatting around a shared
//! layout. All user-provided content goes through `escape`.

use axum::http::StatusCode;

use warbler_core::entities::User;
use warbler_service::dto::{MessageWithAuthor, UserProfile};

/// Escape text for safe embedding in HTML
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shared page layout with navbar
///
/// The navbar shows signup/login links for anonymous visitors and the
/// profile link plus a "Log out" button for logged-in users.
fn layout(title: &str, nav_user: Option<&User>, body: &str) -> String {
    let nav = match nav_user {
        Some(user) => format!(
            concat!(
                r#"<a href="/users/{id}">@{username}</a>"#,
                r#"<form action="/logout" method="POST" class="nav-logout">"#,
                r#"<button type="submit" class="btn btn-link">Log out</button>"#,
                "</form>"
            ),
            id = user.id,
            username = escape(&user.username),
        ),
        None => concat!(
            r#"<a href="/signup">Sign up</a> "#,
            r#"<a href="/login">Log in</a>"#
        )
        .to_string(),
    };

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en">"#,
            "<head>",
            r#"<meta charset="utf-8">"#,
            "<title>{title}</title>",
            r#"<link rel="stylesheet" href="/static/style.css">"#,
            "</head>",
            "<body>",
            r#"<nav class="navbar">"#,
            r#"<a href="/" class="navbar-brand">Warbler</a>"#,
            r#"<div class="navbar-nav">{nav}</div>"#,
            "</nav>",
            r#"<div class="container">{body}</div>"#,
            "</body>",
            "</html>"
        ),
        title = escape(title),
        nav = nav,
        body = body,
    )
}

/// Render one message in a list
fn message_item(item: &MessageWithAuthor) -> String {
    format!(
        concat!(
            r#"<li class="list-group-item message">"#,
            r#"<a href="/users/{author_id}">@{username}</a>"#,
            r#"<span class="text-muted">{timestamp}</span>"#,
            "<p>{text}</p>",
            r#"<form action="/messages/{message_id}/like" method="POST">"#,
            r#"<button type="submit" class="btn btn-sm">&#9733;</button>"#,
            "</form>",
            "</li>"
        ),
        author_id = item.author.id,
        username = escape(&item.author.username),
        timestamp = item.message.created_at.format("%d %B %Y"),
        message_id = item.message.id,
        text = escape(&item.message.text),
    )
}

/// Home page for an anonymous visitor
pub fn home_anon_page() -> String {
    let body = concat!(
        r#"<div class="home-hero">"#,
        "<h1>What's Happening?</h1>",
        "<h4>New to Warbler?</h4>",
        "<p>Sign up now to get your own personalized timeline!</p>",
        r#"<a href="/signup" class="btn btn-primary">Sign up</a>"#,
        "</div>"
    );
    layout("Warbler", None, body)
}

/// Home timeline for a logged-in user
pub fn home_page(user: &User, timeline: &[MessageWithAuthor]) -> String {
    let items: String = timeline.iter().map(|item| message_item(item)).collect();
    let body = format!(
        concat!(
            r#"<form action="/messages/new" method="POST" class="new-message">"#,
            r#"<textarea name="text" maxlength="140" placeholder="What's happening?"></textarea>"#,
            r#"<button type="submit" class="btn btn-primary">Warble</button>"#,
            "</form>",
            r#"<ul class="list-group" id="messages">{items}</ul>"#
        ),
        items = items,
    );
    layout("Warbler", Some(user), &body)
}

/// Signup form, optionally with an error banner
pub fn signup_page(error: Option<&str>) -> String {
    let banner = error.map_or_else(String::new, |msg| {
        format!(r#"<div class="alert alert-danger">{}</div>"#, escape(msg))
    });
    let body = format!(
        concat!(
            "<h2>Join Warbler today.</h2>",
            "{banner}",
            r#"<form action="/signup" method="POST">"#,
            r#"<input type="text" name="username" placeholder="Username" required>"#,
            r#"<input type="email" name="email" placeholder="E-mail" required>"#,
            r#"<input type="password" name="password" placeholder="Password" required>"#,
            r#"<input type="url" name="image_url" placeholder="(Optional) Image URL">"#,
            r#"<button type="submit" class="btn btn-primary">Sign me up!</button>"#,
            "</form>"
        ),
        banner = banner,
    );
    layout("Join Warbler", None, &body)
}

/// Login form, optionally with an error banner
pub fn login_page(error: Option<&str>) -> String {
    let banner = error.map_or_else(String::new, |msg| {
        format!(r#"<div class="alert alert-danger">{}</div>"#, escape(msg))
    });
    let body = format!(
        concat!(
            "<h2>Welcome back.</h2>",
            "{banner}",
            r#"<form action="/login" method="POST">"#,
            r#"<input type="text" name="username" placeholder="Username" required>"#,
            r#"<input type="password" name="password" placeholder="Password" required>"#,
            r#"<button type="submit" class="btn btn-primary">Log in</button>"#,
            "</form>"
        ),
        banner = banner,
    );
    layout("Log in to Warbler", None, &body)
}

/// Stat counter strip shown on profile-related pages
///
/// Exactly four counters, in order: messages, followers, following, likes.
fn user_stats(profile: &UserProfile) -> String {
    let id = profile.user.id;
    let stats = profile.stats;
    format!(
        concat!(
            r#"<ul class="user-stats nav nav-pills">"#,
            r#"<li class="stat"><p class="small">Messages</p>"#,
            r#"<h4><a href="/users/{id}">{messages}</a></h4></li>"#,
            r#"<li class="stat"><p class="small">Followers</p>"#,
            r#"<h4><a href="/users/{id}/followers">{followers}</a></h4></li>"#,
            r#"<li class="stat"><p class="small">Following</p>"#,
            r#"<h4><a href="/users/{id}/following">{following}</a></h4></li>"#,
            r#"<li class="stat"><p class="small">Likes</p>"#,
            r#"<h4><a href="/users/{id}/likes">{likes}</a></h4></li>"#,
            "</ul>"
        ),
        id = id,
        messages = stats.messages,
        followers = stats.followers,
        following = stats.following,
        likes = stats.likes,
    )
}

/// Header block for a user's pages: image, username, stat counters
fn user_header(profile: &UserProfile) -> String {
    format!(
        concat!(
            r#"<div class="user-header">"#,
            r#"<img src="{image}" alt="Profile image" class="profile-img">"#,
            "<h2>@{username}</h2>",
            "{stats}",
            "</div>"
        ),
        image = escape(profile.user.image_url_or_default()),
        username = escape(&profile.user.username),
        stats = user_stats(profile),
    )
}

/// A user's profile page with their messages
pub fn profile_page(
    nav_user: Option<&User>,
    profile: &UserProfile,
    messages: &[MessageWithAuthor],
) -> String {
    let items: String = messages.iter().map(|item| message_item(item)).collect();
    let body = format!(
        concat!(
            "{header}",
            r#"<ul class="list-group" id="messages">{items}</ul>"#
        ),
        header = user_header(profile),
        items = items,
    );
    let title = format!("@{}", profile.user.username);
    layout(&title, nav_user, &body)
}

/// List of users for the followers and following pages
pub fn user_list_page(
    nav_user: Option<&User>,
    profile: &UserProfile,
    heading: &str,
    users: &[User],
) -> String {
    let cards: String = users
        .iter()
        .map(|user| {
            format!(
                concat!(
                    r#"<div class="card user-card">"#,
                    r#"<img src="{image}" alt="Profile image" class="card-img">"#,
                    r#"<a href="/users/{id}">@{username}</a>"#,
                    "</div>"
                ),
                image = escape(user.image_url_or_default()),
                id = user.id,
                username = escape(&user.username),
            )
        })
        .collect();
    let body = format!(
        concat!(
            "{header}",
            "<h3>{heading}</h3>",
            r#"<div class="user-cards">{cards}</div>"#
        ),
        header = user_header(profile),
        heading = escape(heading),
        cards = cards,
    );
    let title = format!("@{}", profile.user.username);
    layout(&title, nav_user, &body)
}

/// Messages a user has liked
pub fn likes_page(
    nav_user: Option<&User>,
    profile: &UserProfile,
    liked: &[MessageWithAuthor],
) -> String {
    let items: String = liked.iter().map(|item| message_item(item)).collect();
    let body = format!(
        concat!(
            "{header}",
            "<h3>Liked warbles</h3>",
            r#"<ul class="list-group" id="messages">{items}</ul>"#
        ),
        header = user_header(profile),
        items = items,
    );
    let title = format!("@{}", profile.user.username);
    layout(&title, nav_user, &body)
}

/// A single message page
pub fn message_page(nav_user: Option<&User>, item: &MessageWithAuthor) -> String {
    let body = format!(
        r#"<ul class="list-group" id="messages">{}</ul>"#,
        message_item(item)
    );
    layout("Warbler", nav_user, &body)
}

/// Error page rendered for any failed request
pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        concat!(
            r#"<div class="error-page">"#,
            "<h1>{code}</h1>",
            "<p>{message}</p>",
            r#"<a href="/">Back home</a>"#,
            "</div>"
        ),
        code = status.as_u16(),
        message = escape(message),
    );
    layout("Something went wrong", None, &body)
}
