//! Rolling 24-hour window share analysis

use crate::BlogMatcher;
use postpulse_common::{utils, Post, Timestamp};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of one analysis window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowResult {
    /// Window start (inclusive)
    pub start: Timestamp,
    /// Window end (exclusive), always `start` + the window size
    pub end: Timestamp,
    /// Posts inside the window whose blog matches the tracked pattern
    pub matched_count: u64,
    /// All posts inside the window
    pub total_count: u64,
    /// `matched_count` as a percentage of `total_count`; 0 for an empty
    /// window
    pub percent: f64,
}

/// Slides a fixed-size window at a one-hour step over the posts and
/// computes the tracked-blog share per window.
///
/// Windows overlap by design; every consecutive hourly start in range
/// produces exactly one result.
#[derive(Debug, Clone)]
pub struct RollingWindowAnalyzer {
    window_hours: usize,
    matcher: BlogMatcher,
}

impl RollingWindowAnalyzer {
    /// Create an analyzer with the given window size in hours
    pub fn new(window_hours: usize, matcher: BlogMatcher) -> Self {
        Self {
            window_hours,
            matcher,
        }
    }

    /// Analyzer with the standard 24-hour window and the tracked-blog
    /// matcher
    pub fn daily() -> Self {
        Self::new(24, BlogMatcher::tracked())
    }

    /// Compute one [`WindowResult`] per valid window start, in
    /// chronological order.
    ///
    /// The hourly instants run from floor(min) to ceil(max) inclusive; a
    /// window only starts while a full `window_hours` span remains, so the
    /// final `window_hours` instants never start one. Fewer instants than
    /// that produce no windows at all.
    pub fn analyze(&self, posts: &[Post]) -> Vec<WindowResult> {
        let (Some(min), Some(max)) = (
            posts.iter().map(|p| p.time_base).min(),
            posts.iter().map(|p| p.time_base).max(),
        ) else {
            return Vec::new();
        };

        let instants = utils::hour_sequence(utils::floor_hour(min), utils::ceil_hour(max));
        let window_count = instants.len().saturating_sub(self.window_hours);

        let mut results = Vec::with_capacity(window_count);
        for i in 0..window_count {
            let start = instants[i];
            let end = instants[i + self.window_hours];

            let mut matched_count = 0u64;
            let mut total_count = 0u64;
            for post in posts {
                if post.time_base >= start && post.time_base < end {
                    total_count += 1;
                    if self.matcher.matches(post.blog_name()) {
                        matched_count += 1;
                    }
                }
            }

            let percent = if total_count > 0 {
                (matched_count as f64 / total_count as f64) * 100.0
            } else {
                0.0
            };

            results.push(WindowResult {
                start,
                end,
                matched_count,
                total_count,
                percent,
            });
        }

        debug!(
            "analyzed {} posts over {} sliding windows of {}h",
            posts.len(),
            results.len(),
            self.window_hours
        );
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use postpulse_common::utils::parse_timestamp;

    fn post(blog: &str, time_base: &str) -> Post {
        Post {
            message_type: "Post".to_string(),
            author: "a".to_string(),
            blog: Some(blog.to_string()),
            time_base: parse_timestamp(time_base).unwrap(),
        }
    }

    fn ts(s: &str) -> Timestamp {
        parse_timestamp(s).unwrap()
    }

    #[test]
    fn test_window_count_and_ordering() {
        // instants: 2023-05-01 00:00 .. 2023-05-02 02:00 -> 27, windows: 3
        let posts = vec![
            post("m125 news", "2023-05-01 00:10:00"),
            post("other", "2023-05-02 01:30:00"),
        ];

        let results = RollingWindowAnalyzer::daily().analyze(&posts);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].start, ts("2023-05-01 00:00:00"));
        assert_eq!(results[1].start, ts("2023-05-01 01:00:00"));
        assert_eq!(results[2].start, ts("2023-05-01 02:00:00"));
    }

    #[test]
    fn test_every_window_spans_exactly_24_hours() {
        let posts = vec![
            post("m125", "2023-05-01 03:15:00"),
            post("other", "2023-05-03 12:45:00"),
        ];

        for result in RollingWindowAnalyzer::daily().analyze(&posts) {
            assert_eq!(result.end - result.start, Duration::hours(24));
            assert!(result.matched_count <= result.total_count);
        }
    }

    #[test]
    fn test_window_bounds_are_start_inclusive_end_exclusive() {
        let posts = vec![
            post("other", "2023-05-01 00:00:00"), // on the first start
            post("other", "2023-05-02 00:00:00"), // on the first end
            post("other", "2023-05-02 02:00:00"),
        ];

        let results = RollingWindowAnalyzer::daily().analyze(&posts);
        // first window [00:00, +24h): the post sitting on the end boundary
        // is excluded
        assert_eq!(results[0].total_count, 1);
        // second window [01:00, 01:00+24h): picks up the boundary post
        assert_eq!(results[1].total_count, 1);
    }

    #[test]
    fn test_percent_guarded_on_empty_window() {
        // two posts 30h apart leave several fully empty windows between them
        let posts = vec![
            post("m125", "2023-05-01 00:00:00"),
            post("m125", "2023-05-02 06:00:00"),
        ];

        let results = RollingWindowAnalyzer::daily().analyze(&posts);
        let empty: Vec<&WindowResult> =
            results.iter().filter(|r| r.total_count == 0).collect();
        assert!(!empty.is_empty());
        for result in empty {
            assert_eq!(result.percent, 0.0);
        }
    }

    #[test]
    fn test_percent_computation() {
        let posts = vec![
            post("m125 feed", "2023-05-01 01:00:00"),
            post("other", "2023-05-01 02:00:00"),
            post("another", "2023-05-01 03:00:00"),
            post("М125", "2023-05-01 04:00:00"),
            post("other", "2023-05-02 02:00:00"),
        ];

        let results = RollingWindowAnalyzer::daily().analyze(&posts);
        // first window [01:00, +24h) holds the four early posts, two matching
        let first = &results[0];
        assert_eq!(first.total_count, 4);
        assert_eq!(first.matched_count, 2);
        assert!((first.percent - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_short_range_produces_no_windows() {
        let posts = vec![
            post("m125", "2023-05-01 09:10:00"),
            post("other", "2023-05-01 18:40:00"),
        ];

        // 09:00..19:00 is 11 instants, fewer than a 24h window needs
        assert!(RollingWindowAnalyzer::daily().analyze(&posts).is_empty());
    }

    #[test]
    fn test_empty_input_produces_no_windows() {
        assert!(RollingWindowAnalyzer::daily().analyze(&[]).is_empty());
    }

    #[test]
    fn test_absent_blog_counts_toward_total_only() {
        let mut posts = vec![
            post("m125", "2023-05-01 01:00:00"),
            post("other", "2023-05-02 05:00:00"),
        ];
        posts.push(Post {
            message_type: "Post".to_string(),
            author: "a".to_string(),
            blog: None,
            time_base: ts("2023-05-01 02:00:00"),
        });

        let results = RollingWindowAnalyzer::daily().analyze(&posts);
        assert_eq!(results[0].total_count, 2);
        assert_eq!(results[0].matched_count, 1);
    }
}
