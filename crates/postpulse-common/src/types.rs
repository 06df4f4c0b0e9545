//! Core post records shared across the postpulse workspace

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp type used throughout the application. Source data carries no
/// timezone, so timestamps stay naive end to end.
pub type Timestamp = NaiveDateTime;

/// One post record exactly as it appears in the source CSV. Columns beyond
/// these four are ignored on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPost {
    /// Post category; rows tagged "Comment" are excluded from all analysis
    pub message_type: String,
    /// Author identifier
    pub author: String,
    /// Blog identifier; may be absent, in which case the author stands in
    #[serde(default)]
    pub blog: Option<String>,
    /// Publication timestamp as written in the file
    pub time_base: String,
}

/// One post record after timestamp normalization. `blog` stays optional
/// until the backfill stage replaces absent values with the author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Post category
    pub message_type: String,
    /// Author identifier
    pub author: String,
    /// Blog identifier, `Some` for every post once backfilled
    pub blog: Option<String>,
    /// Publication timestamp
    pub time_base: Timestamp,
}

impl Post {
    /// Blog value as a borrowed str, if present
    pub fn blog_name(&self) -> Option<&str> {
        self.blog.as_deref()
    }
}
