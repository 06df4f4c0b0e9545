//! Blog-name pattern matching

use serde::{Deserialize, Serialize};

/// The tracked blog identifier as it appears in the wild: the Latin
/// spelling and its Cyrillic homograph. Kept as interchangeable literal
/// tokens rather than a regex so the set stays explicit and extensible.
pub const TRACKED_BLOG_TOKENS: [&str; 2] = ["M125", "М125"];

/// Case-insensitive substring matcher over a fixed set of tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogMatcher {
    /// Tokens, lowercased at construction
    tokens: Vec<String>,
}

impl BlogMatcher {
    /// Create a matcher from an arbitrary token set
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Matcher for the tracked blog ([`TRACKED_BLOG_TOKENS`])
    pub fn tracked() -> Self {
        Self::new(TRACKED_BLOG_TOKENS)
    }

    /// Whether a blog value contains any token, ignoring case. Absent blog
    /// values never match.
    pub fn matches(&self, blog: Option<&str>) -> bool {
        let Some(blog) = blog else {
            return false;
        };
        let lowered = blog.to_lowercase();
        self.tokens.iter().any(|token| lowered.contains(token))
    }
}

impl Default for BlogMatcher {
    fn default() -> Self {
        Self::tracked()
    }
}
