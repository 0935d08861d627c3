//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with migrations applied
//! - Environment variables: DATABASE_URL, API_PORT, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Fixed placeholder for soft-deleted comments
const COMMENT_DELETED: &str = "**komentar telah dihapus**";
/// Fixed placeholder for soft-deleted replies
const REPLY_DELETED: &str = "**balasan telah dihapus**";

/// Register a unique user and log in; returns (register request, tokens)
async fn register_and_login(server: &TestServer) -> (RegisterRequest, AuthResponse) {
    let register_req = RegisterRequest::unique();
    let response = server.post("/users", &register_req).await.unwrap();
    let _: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/authentications", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    (register_req, auth)
}

/// Create a thread as the given user; returns its id
async fn create_thread(server: &TestServer, token: &str) -> String {
    let request = CreateThreadRequest::unique();
    let response = server.post_auth("/threads", token, &request).await.unwrap();
    let thread: ThreadResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    thread.id
}

/// Add a comment to a thread; returns its id
async fn add_comment(server: &TestServer, token: &str, thread_id: &str, content: &str) -> String {
    let response = server
        .post_auth(
            &format!("/threads/{thread_id}/comments"),
            token,
            &CreateContentRequest {
                content: content.to_string(),
            },
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    comment.id
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/users", &request).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(user.username, request.username);
    assert_eq!(user.fullname, request.fullname);
    assert!(!user.id.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_username_is_bad_request() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/users", &request).await.unwrap();

    let response = server.post("/users", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_register_invalid_payload() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Missing fullname entirely
    let response = server
        .post(
            "/users",
            &serde_json::json!({"username": "someone", "password": "secretpassword"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Authentication Tests
// ============================================================================

#[tokio::test]
async fn test_login_and_refresh_rotation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_and_login(&server).await;

    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);

    // Refresh rotates the pair
    let response = server
        .put(
            "/authentications",
            &RefreshTokenRequest {
                refresh_token: auth.refresh_token.clone(),
            },
        )
        .await
        .unwrap();
    let rotated: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_ne!(rotated.refresh_token, auth.refresh_token);

    // The old refresh token is gone
    let response = server
        .put(
            "/authentications",
            &RefreshTokenRequest {
                refresh_token: auth.refresh_token,
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        username: "nonexistentuser".to_string(),
        password: "wrongpassword".to_string(),
    };

    let response = server.post("/authentications", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout_revokes_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_and_login(&server).await;

    let body = RefreshTokenRequest {
        refresh_token: auth.refresh_token.clone(),
    };
    let response = server.delete("/authentications", &body).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Second logout with the same token finds nothing
    let response = server.delete("/authentications", &body).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Thread Tests
// ============================================================================

#[tokio::test]
async fn test_create_thread_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/threads", &CreateThreadRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_create_and_fetch_thread() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = register_and_login(&server).await;

    let request = CreateThreadRequest::unique();
    let response = server
        .post_auth("/threads", &auth.access_token, &request)
        .await
        .unwrap();
    let thread: ThreadResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(thread.title, request.title);

    // The detail view is public
    let response = server.get(&format!("/threads/{}", thread.id)).await.unwrap();
    let detail: ThreadDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.id, thread.id);
    assert_eq!(detail.username, register_req.username);
    assert!(detail.comments.is_empty());
}

#[tokio::test]
async fn test_get_missing_thread_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/threads/123456789").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Comment / Reply / Like Flow
// ============================================================================

#[tokio::test]
async fn test_full_thread_aggregation_with_soft_deletes() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (alice_req, alice) = register_and_login(&server).await;
    let (bob_req, bob) = register_and_login(&server).await;

    let thread_id = create_thread(&server, &alice.access_token).await;

    // Two comments; the second will be soft-deleted
    let c1 = add_comment(&server, &bob.access_token, &thread_id, "hello").await;
    let c2 = add_comment(&server, &alice.access_token, &thread_id, "bye").await;

    // Two replies under the first comment; the second will be soft-deleted
    let response = server
        .post_auth(
            &format!("/threads/{thread_id}/comments/{c1}/replies"),
            &alice.access_token,
            &CreateContentRequest {
                content: "first reply".to_string(),
            },
        )
        .await
        .unwrap();
    let r1: ReplyResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/threads/{thread_id}/comments/{c1}/replies"),
            &bob.access_token,
            &CreateContentRequest {
                content: "second reply".to_string(),
            },
        )
        .await
        .unwrap();
    let r2: ReplyResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Soft-delete C2 (by its owner alice) and R2 (by its owner bob)
    let response = server
        .delete_auth(
            &format!("/threads/{thread_id}/comments/{c2}"),
            &alice.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/threads/{thread_id}/comments/{c1}/replies/{}", r2.id),
            &bob.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Aggregate view: both comments present, deleted content masked
    let response = server.get(&format!("/threads/{thread_id}")).await.unwrap();
    let detail: ThreadDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(detail.comments.len(), 2);

    let first = &detail.comments[0];
    assert_eq!(first.id, c1);
    assert_eq!(first.content, "hello");
    assert_eq!(first.username, bob_req.username);
    assert_eq!(first.replies.len(), 2);
    assert_eq!(first.replies[0].id, r1.id);
    assert_eq!(first.replies[0].content, "first reply");
    assert_eq!(first.replies[0].username, alice_req.username);
    assert_eq!(first.replies[1].content, REPLY_DELETED);

    let second = &detail.comments[1];
    assert_eq!(second.id, c2);
    assert_eq!(second.content, COMMENT_DELETED);
    assert!(second.replies.is_empty());
}

#[tokio::test]
async fn test_comment_on_missing_thread_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_and_login(&server).await;

    let response = server
        .post_auth(
            "/threads/987654321/comments",
            &auth.access_token,
            &CreateContentRequest {
                content: "orphan".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_comment_by_non_owner_is_forbidden() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_and_login(&server).await;
    let (_, mallory) = register_and_login(&server).await;

    let thread_id = create_thread(&server, &alice.access_token).await;
    let comment_id = add_comment(&server, &alice.access_token, &thread_id, "mine").await;

    let response = server
        .delete_auth(
            &format!("/threads/{thread_id}/comments/{comment_id}"),
            &mallory.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Content is still visible, unmasked
    let response = server.get(&format!("/threads/{thread_id}")).await.unwrap();
    let detail: ThreadDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.comments[0].content, "mine");
}

#[tokio::test]
async fn test_like_toggle_roundtrip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_and_login(&server).await;
    let (_, bob) = register_and_login(&server).await;

    let thread_id = create_thread(&server, &alice.access_token).await;
    let comment_id = add_comment(&server, &alice.access_token, &thread_id, "likeable").await;
    let like_path = format!("/threads/{thread_id}/comments/{comment_id}/likes");

    // Like from both users
    let response = server.put_auth(&like_path, &alice.access_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    let response = server.put_auth(&like_path, &bob.access_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/threads/{thread_id}")).await.unwrap();
    let detail: ThreadDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.comments[0].like_count, 2);

    // Second toggle from bob unlikes
    let response = server.put_auth(&like_path, &bob.access_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/threads/{thread_id}")).await.unwrap();
    let detail: ThreadDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.comments[0].like_count, 1);
}

#[tokio::test]
async fn test_like_requires_existing_comment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_and_login(&server).await;
    let thread_id = create_thread(&server, &auth.access_token).await;

    let response = server
        .put_auth(
            &format!("/threads/{thread_id}/comments/111222333/likes"),
            &auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
