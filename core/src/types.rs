//! Domain DTOs for the comments API.
//!
//! # Design
//! `Comment` mirrors the backend serializer's field set. Identity and
//! bookkeeping fields (`id`, `author`, `date`, `updated_at`, `likes`,
//! `image`) are assigned by the server; the client only ever sends `text`.
//! The backend stores a missing avatar as an empty string, so `image`
//! normalizes `""` and `null` to `None` on the way in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ApiError;

/// Server-assigned comment identifier.
pub type CommentId = u64;

/// A single comment returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub text: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub likes: i64,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub image: Option<String>,
}

/// Request payload for creating a new comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComment {
    pub text: String,
}

/// Request payload for editing a comment. The server recomputes
/// `updated_at` when the text actually changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateComment {
    pub text: String,
}

impl CreateComment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl UpdateComment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Reject text that is empty once surrounding whitespace is removed.
pub fn validate_text(text: &str) -> Result<(), ApiError> {
    if text.trim().is_empty() {
        return Err(ApiError::Validation);
    }
    Ok(())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
