//! Source CSV loading

use postpulse_common::{RawPost, Result};
use std::path::Path;
use tracing::info;

/// Read all post rows from the source CSV.
///
/// Returns `Ok(None)` when the file does not exist; the caller decides how
/// to announce that. Any read or deserialization failure on an existing
/// file is an error.
pub fn load_posts(path: &Path) -> Result<Option<Vec<RawPost>>> {
    if !path.exists() {
        return Ok(None);
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut posts = Vec::new();
    for row in reader.deserialize() {
        posts.push(row?);
    }

    info!("loaded {} rows from {}", posts.len(), path.display());
    Ok(Some(posts))
}
