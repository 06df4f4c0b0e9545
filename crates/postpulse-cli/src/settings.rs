//! Fixed run settings
//!
//! The tool deliberately has no CLI flags, environment variables or config
//! files: every path and threshold is a constant of the run, collected here
//! in one typed struct.

use postpulse_analytics::pattern::TRACKED_BLOG_TOKENS;
use std::path::PathBuf;

/// All paths and thresholds for one analysis run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Source post log
    pub input_path: PathBuf,
    /// Hourly counts over all non-comment posts
    pub hourly_all_path: PathBuf,
    /// Hourly counts over the tracked-blog subset, merged positionally into
    /// any prior file
    pub hourly_tracked_path: PathBuf,
    /// Rolling-window share table
    pub windows_path: PathBuf,
    /// Rendered share chart
    pub chart_path: PathBuf,
    /// Tokens identifying the tracked blog
    pub pattern_tokens: Vec<String>,
    /// Analysis window size in hours
    pub window_hours: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("ss_data_backup.csv"),
            hourly_all_path: PathBuf::from("publications_per_hour_not_comments.csv"),
            hourly_tracked_path: PathBuf::from("publications_per_hour_full.csv"),
            windows_path: PathBuf::from("percentages_per_24_hour_periods.csv"),
            chart_path: PathBuf::from("percent_125.png"),
            pattern_tokens: TRACKED_BLOG_TOKENS.iter().map(|t| t.to_string()).collect(),
            window_hours: 24,
        }
    }
}

impl Settings {
    /// Settings with every file path rooted under `dir`; used by tests and
    /// any embedding that runs the pipeline away from the working directory
    pub fn rooted_at(dir: &std::path::Path) -> Self {
        let defaults = Self::default();
        Self {
            input_path: dir.join(&defaults.input_path),
            hourly_all_path: dir.join(&defaults.hourly_all_path),
            hourly_tracked_path: dir.join(&defaults.hourly_tracked_path),
            windows_path: dir.join(&defaults.windows_path),
            chart_path: dir.join(&defaults.chart_path),
            pattern_tokens: defaults.pattern_tokens,
            window_hours: defaults.window_hours,
        }
    }
}
