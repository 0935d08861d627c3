//! Route definitions
//!
//! All API routes organized by domain. The forum endpoints live at the root
//! (the paths are the public contract); health probes are exported
//! separately so they bypass rate limiting.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{authentications, comments, health, likes, replies, threads, users};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(authentication_routes())
        .merge(thread_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new().route("/users", post(users::register))
}

/// Authentication routes
fn authentication_routes() -> Router<AppState> {
    Router::new()
        .route("/authentications", post(authentications::login))
        .route("/authentications", put(authentications::refresh))
        .route("/authentications", delete(authentications::logout))
}

/// Thread routes, including nested comments, replies, and likes
fn thread_routes() -> Router<AppState> {
    Router::new()
        // Thread CRUD
        .route("/threads", post(threads::create_thread))
        .route("/threads/:thread_id", get(threads::get_thread))
        // Comments
        .route("/threads/:thread_id/comments", post(comments::add_comment))
        .route(
            "/threads/:thread_id/comments/:comment_id",
            delete(comments::delete_comment),
        )
        // Replies
        .route(
            "/threads/:thread_id/comments/:comment_id/replies",
            post(replies::add_reply),
        )
        .route(
            "/threads/:thread_id/comments/:comment_id/replies/:reply_id",
            delete(replies::delete_reply),
        )
        // Likes
        .route(
            "/threads/:thread_id/comments/:comment_id/likes",
            put(likes::toggle_like),
        )
}
