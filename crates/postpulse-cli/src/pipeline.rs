//! The analysis pipeline, stage by stage
//!
//! Load → filter → normalize → backfill → aggregate → window → export →
//! render. Every stage takes and returns plain data; only the loader,
//! exporter and renderer touch the filesystem.

use crate::{exporter, loader, Settings};
use postpulse_analytics::{
    backfill_blogs, filter_comments, parse_timestamps, BlogMatcher, HourlyAggregator,
    RangeAnchor, RollingWindowAnalyzer,
};
use postpulse_charts::{ChartConfig, ChartRenderer, LineMarkerChart, TimePoint, TimeSeries};
use postpulse_common::{Post, Result};
use tracing::{info, warn};

/// Counts from a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Rows in the source file
    pub rows_loaded: usize,
    /// Rows remaining after the comment filter
    pub posts_analyzed: usize,
    /// Hourly buckets over all posts
    pub hourly_buckets: usize,
    /// Hourly buckets over the tracked subset
    pub tracked_buckets: usize,
    /// Sliding windows produced
    pub windows: usize,
}

/// Execute one full analysis run.
///
/// Returns `Ok(None)` when the input file is missing: the absence is
/// announced and no output file is produced or modified. Every other
/// failure is an error.
pub fn run(settings: &Settings) -> Result<Option<RunReport>> {
    let Some(raw) = loader::load_posts(&settings.input_path)? else {
        warn!(
            "input file '{}' not found, nothing to analyze",
            settings.input_path.display()
        );
        return Ok(None);
    };
    let rows_loaded = raw.len();

    let mut posts = parse_timestamps(filter_comments(raw))?;
    backfill_blogs(&mut posts);

    let matcher = BlogMatcher::new(&settings.pattern_tokens);
    let tracked: Vec<Post> = posts
        .iter()
        .filter(|post| matcher.matches(post.blog_name()))
        .cloned()
        .collect();

    let hourly_all = HourlyAggregator::new(RangeAnchor::Hour).aggregate(&posts);
    let hourly_tracked = HourlyAggregator::new(RangeAnchor::Day).aggregate(&tracked);
    let windows =
        RollingWindowAnalyzer::new(settings.window_hours, matcher).analyze(&posts);

    exporter::write_hourly(&settings.hourly_all_path, &hourly_all)?;
    exporter::merge_hourly_positional(&settings.hourly_tracked_path, &hourly_tracked)?;
    exporter::write_windows(&settings.windows_path, &windows)?;

    let series = TimeSeries {
        name: "Percent 125".to_string(),
        points: windows
            .iter()
            .map(|w| TimePoint {
                at: w.start,
                value: w.percent,
            })
            .collect(),
        color: None,
    };
    let config = ChartConfig {
        title: "Percent of publications with \"125\"".to_string(),
        x_label: Some("Period start".to_string()),
        y_label: Some("Percent 125".to_string()),
        ..Default::default()
    };
    LineMarkerChart::new().render_to_file(&config, &[series], &settings.chart_path)?;

    let report = RunReport {
        rows_loaded,
        posts_analyzed: posts.len(),
        hourly_buckets: hourly_all.len(),
        tracked_buckets: hourly_tracked.len(),
        windows: windows.len(),
    };
    info!(
        "run complete: {} posts, {} hourly buckets, {} windows",
        report.posts_analyzed, report.hourly_buckets, report.windows
    );
    Ok(Some(report))
}
