//! Path parameter extractors
//!
//! Typed path structs parsing Snowflake IDs out of the URL.

use forum_core::Snowflake;

use crate::response::ApiError;

fn parse_id(raw: &str, what: &str) -> Result<Snowflake, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path(format!("Invalid {what} format")))
}

/// Path parameters with thread_id
#[derive(Debug, serde::Deserialize)]
pub struct ThreadIdPath {
    pub thread_id: String,
}

impl ThreadIdPath {
    /// Parse thread_id as Snowflake
    pub fn thread_id(&self) -> Result<Snowflake, ApiError> {
        parse_id(&self.thread_id, "thread_id")
    }
}

/// Path parameters with thread_id and comment_id
#[derive(Debug, serde::Deserialize)]
pub struct CommentPath {
    pub thread_id: String,
    pub comment_id: String,
}

impl CommentPath {
    /// Parse thread_id as Snowflake
    pub fn thread_id(&self) -> Result<Snowflake, ApiError> {
        parse_id(&self.thread_id, "thread_id")
    }

    /// Parse comment_id as Snowflake
    pub fn comment_id(&self) -> Result<Snowflake, ApiError> {
        parse_id(&self.comment_id, "comment_id")
    }
}

/// Path parameters with thread_id, comment_id, and reply_id
#[derive(Debug, serde::Deserialize)]
pub struct ReplyPath {
    pub thread_id: String,
    pub comment_id: String,
    pub reply_id: String,
}

impl ReplyPath {
    /// Parse thread_id as Snowflake
    pub fn thread_id(&self) -> Result<Snowflake, ApiError> {
        parse_id(&self.thread_id, "thread_id")
    }

    /// Parse comment_id as Snowflake
    pub fn comment_id(&self) -> Result<Snowflake, ApiError> {
        parse_id(&self.comment_id, "comment_id")
    }

    /// Parse reply_id as Snowflake
    pub fn reply_id(&self) -> Result<Snowflake, ApiError> {
        parse_id(&self.reply_id, "reply_id")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_id_parsing() {
        let path = ThreadIdPath {
            thread_id: "123".to_string(),
        };
        assert_eq!(path.thread_id().unwrap(), Snowflake::new(123));

        let bad = ThreadIdPath {
            thread_id: "not-a-number".to_string(),
        };
        assert!(bad.thread_id().is_err());
    }
}
