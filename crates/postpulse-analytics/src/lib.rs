//! # Postpulse Analytics
//!
//! The computational core of postpulse: comment filtering, timestamp
//! normalization, blog backfill, hourly aggregation and rolling-window
//! share analysis. Every stage takes and returns plain data so it can be
//! unit tested without file I/O.

pub mod hourly;
pub mod pattern;
pub mod prepare;
pub mod window;

pub use hourly::{HourlyAggregator, HourlyBucket, RangeAnchor};
pub use pattern::BlogMatcher;
pub use prepare::{backfill_blogs, filter_comments, parse_timestamps};
pub use window::{RollingWindowAnalyzer, WindowResult};
