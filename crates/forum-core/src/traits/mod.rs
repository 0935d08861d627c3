//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AuthenticationRepository, CommentLikeRepository, CommentRepository, RepoResult,
    ReplyRepository, ThreadRepository, UserRepository,
};
