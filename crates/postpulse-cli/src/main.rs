//! Postpulse - Main Entry Point

use anyhow::Result;
use postpulse_cli::{pipeline, Settings};
use postpulse_common::logging;
use tracing::info;

fn main() -> Result<()> {
    logging::init_default_logging()?;

    info!("starting postpulse analysis run");

    let settings = Settings::default();
    if let Some(report) = pipeline::run(&settings)? {
        info!(
            "analyzed {} of {} rows into {} windows, outputs written alongside {}",
            report.posts_analyzed,
            report.rows_loaded,
            report.windows,
            settings.input_path.display()
        );
    }

    Ok(())
}
