//! Hourly publication aggregation

use postpulse_common::{utils, Post, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// One hour-wide aggregation bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyBucket {
    /// Start of the hour
    pub hour: Timestamp,
    /// Posts whose timestamp falls inside this hour
    pub count: u64,
}

/// How the bucket range is anchored around the observed min/max timestamps.
///
/// The two aggregations the pipeline runs use different anchors and are not
/// guaranteed to share a time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeAnchor {
    /// floor(min) / ceil(max) to the hour
    Hour,
    /// floor(min) / ceil(max) to the start of day, still stepping hourly
    Day,
}

/// Aggregator bucketing posts into hourly bins over the full observed
/// range, with zero-filled gaps.
#[derive(Debug, Clone, Copy)]
pub struct HourlyAggregator {
    anchor: RangeAnchor,
}

impl HourlyAggregator {
    /// Create an aggregator with the given range anchoring
    pub fn new(anchor: RangeAnchor) -> Self {
        Self { anchor }
    }

    /// Bucket the posts into hourly counts.
    ///
    /// The output covers every hour instant between the anchored bounds
    /// inclusive; hours with no posts report count 0, and the output length
    /// equals the generated instant count exactly. An empty input produces
    /// an empty output.
    pub fn aggregate(&self, posts: &[Post]) -> Vec<HourlyBucket> {
        let (Some(min), Some(max)) = (
            posts.iter().map(|p| p.time_base).min(),
            posts.iter().map(|p| p.time_base).max(),
        ) else {
            return Vec::new();
        };

        let (start, end) = match self.anchor {
            RangeAnchor::Hour => (utils::floor_hour(min), utils::ceil_hour(max)),
            RangeAnchor::Day => (utils::floor_day(min), utils::ceil_day(max)),
        };

        let mut counts: HashMap<Timestamp, u64> = HashMap::new();
        for post in posts {
            *counts.entry(utils::floor_hour(post.time_base)).or_insert(0) += 1;
        }

        let buckets: Vec<HourlyBucket> = utils::hour_sequence(start, end)
            .into_iter()
            .map(|hour| HourlyBucket {
                hour,
                count: counts.get(&hour).copied().unwrap_or(0),
            })
            .collect();

        debug!(
            "aggregated {} posts into {} hourly buckets ({:?} anchoring)",
            posts.len(),
            buckets.len(),
            self.anchor
        );
        buckets
    }
}
