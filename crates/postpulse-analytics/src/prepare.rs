//! Row preparation stages: comment filtering, timestamp normalization and
//! blog backfill

use postpulse_common::{utils, Post, RawPost, Result};
use tracing::debug;

/// Message type excluded from every aggregation. Matched exactly,
/// case-sensitive.
pub const COMMENT_TYPE: &str = "Comment";

/// Drop rows tagged as comments. An empty result is valid.
pub fn filter_comments(posts: Vec<RawPost>) -> Vec<RawPost> {
    let before = posts.len();
    let kept: Vec<RawPost> = posts
        .into_iter()
        .filter(|post| post.message_type != COMMENT_TYPE)
        .collect();
    debug!("comment filter kept {} of {} rows", kept.len(), before);
    kept
}

/// Parse every `time_base` string into a timestamp. A single unparseable
/// value fails the whole batch; there is no partial tolerance.
pub fn parse_timestamps(posts: Vec<RawPost>) -> Result<Vec<Post>> {
    posts
        .into_iter()
        .map(|raw| {
            let time_base = utils::parse_timestamp(&raw.time_base)?;
            Ok(Post {
                message_type: raw.message_type,
                author: raw.author,
                blog: raw.blog,
                time_base,
            })
        })
        .collect()
}

/// Replace absent or empty blog identifiers with the post's author.
/// Afterward every post has a non-empty blog value.
pub fn backfill_blogs(posts: &mut [Post]) {
    let mut filled = 0usize;
    for post in posts.iter_mut() {
        let missing = post.blog.as_deref().map_or(true, str::is_empty);
        if missing {
            post.blog = Some(post.author.clone());
            filled += 1;
        }
    }
    debug!("backfilled blog from author on {} rows", filled);
}
