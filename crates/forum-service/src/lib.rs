//! # forum-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    AuthResponse, CommentDetailResponse, CommentResponse, CreateCommentRequest,
    CreateReplyRequest, CreateThreadRequest, HealthResponse, LoginRequest, LogoutRequest,
    ReadinessResponse, RefreshTokenRequest, RegisterUserRequest, ReplyDetailResponse,
    ReplyResponse, ThreadDetailResponse, ThreadResponse, UserResponse,
};
pub use services::{
    AuthService, CommentLikeService, CommentService, ReplyService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, ThreadService, UserService,
};
