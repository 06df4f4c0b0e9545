//! CSV export of analysis results

use postpulse_analytics::{HourlyBucket, WindowResult};
use postpulse_common::{utils, Result};
use std::path::Path;
use tracing::info;

/// Column headers of the hourly count tables
const HOURLY_HEADERS: [&str; 2] = ["time_base", "Publications"];

/// Column headers of the rolling-window share table
const WINDOW_HEADERS: [&str; 5] = [
    "Start Period",
    "End Period",
    "Publications with 125",
    "Total Publications",
    "Percent 125",
];

/// Write an hourly count table, replacing any existing file
pub fn write_hourly(path: &Path, buckets: &[HourlyBucket]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HOURLY_HEADERS)?;
    for bucket in buckets {
        writer.write_record([
            utils::format_timestamp(&bucket.hour),
            bucket.count.to_string(),
        ])?;
    }
    writer.flush()?;

    info!("wrote {} hourly rows to {}", buckets.len(), path.display());
    Ok(())
}

/// Write an hourly count table on top of any prior file, overwriting only
/// the `time_base` and `Publications` columns by row position.
///
/// Extra columns a prior run may have added are preserved; the two known
/// columns are appended if the prior file lacks them. Rows are aligned
/// purely by index — the prior table is assumed to have the same number of
/// rows as the new one. On a mismatch, surplus prior rows keep their stale
/// values and surplus new rows are appended with empty cells elsewhere.
pub fn merge_hourly_positional(path: &Path, buckets: &[HourlyBucket]) -> Result<()> {
    if !path.exists() {
        return write_hourly(path, buckets);
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(String::from).collect());
    }

    let time_idx = column_index(&mut headers, HOURLY_HEADERS[0]);
    let count_idx = column_index(&mut headers, HOURLY_HEADERS[1]);

    while rows.len() < buckets.len() {
        rows.push(Vec::new());
    }
    for row in rows.iter_mut() {
        row.resize(headers.len(), String::new());
    }
    for (row, bucket) in rows.iter_mut().zip(buckets) {
        row[time_idx] = utils::format_timestamp(&bucket.hour);
        row[count_idx] = bucket.count.to_string();
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&headers)?;
    for row in &rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    info!(
        "merged {} hourly rows into {} ({} columns preserved)",
        buckets.len(),
        path.display(),
        headers.len()
    );
    Ok(())
}

/// Write the rolling-window share table, replacing any existing file
pub fn write_windows(path: &Path, windows: &[WindowResult]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(WINDOW_HEADERS)?;
    for window in windows {
        writer.write_record([
            utils::format_timestamp(&window.start),
            utils::format_timestamp(&window.end),
            window.matched_count.to_string(),
            window.total_count.to_string(),
            window.percent.to_string(),
        ])?;
    }
    writer.flush()?;

    info!("wrote {} window rows to {}", windows.len(), path.display());
    Ok(())
}

/// Index of `name` in `headers`, appending it as a new column when absent
fn column_index(headers: &mut Vec<String>, name: &str) -> usize {
    match headers.iter().position(|h| h == name) {
        Some(idx) => idx,
        None => {
            headers.push(name.to_string());
            headers.len() - 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postpulse_analytics::BlogMatcher;
    use postpulse_analytics::RollingWindowAnalyzer;
    use postpulse_common::utils::parse_timestamp;
    use postpulse_common::Post;
    use std::io::Write;
    use tempfile::tempdir;

    fn bucket(hour: &str, count: u64) -> HourlyBucket {
        HourlyBucket {
            hour: parse_timestamp(hour).unwrap(),
            count,
        }
    }

    #[test]
    fn test_write_hourly() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hourly.csv");

        write_hourly(
            &path,
            &[bucket("2023-05-01 09:00:00", 2), bucket("2023-05-01 10:00:00", 0)],
        )
        .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "time_base,Publications");
        assert_eq!(lines[1], "2023-05-01 09:00:00,2");
        assert_eq!(lines[2], "2023-05-01 10:00:00,0");
    }

    #[test]
    fn test_merge_without_prior_file_writes_fresh() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hourly.csv");

        merge_hourly_positional(&path, &[bucket("2023-05-01 09:00:00", 4)]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("time_base,Publications"));
        assert!(contents.contains("2023-05-01 09:00:00,4"));
    }

    #[test]
    fn test_merge_overwrites_known_columns_and_preserves_extras() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hourly.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "time_base,Publications,annotation").unwrap();
        writeln!(file, "2020-01-01 00:00:00,99,spike").unwrap();
        writeln!(file, "2020-01-01 01:00:00,98,quiet").unwrap();
        drop(file);

        merge_hourly_positional(
            &path,
            &[bucket("2023-05-01 09:00:00", 1), bucket("2023-05-01 10:00:00", 2)],
        )
        .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "time_base,Publications,annotation");
        // the two known columns are replaced, the annotation survives by
        // row position
        assert_eq!(lines[1], "2023-05-01 09:00:00,1,spike");
        assert_eq!(lines[2], "2023-05-01 10:00:00,2,quiet");
    }

    #[test]
    fn test_merge_appends_missing_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hourly.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "note").unwrap();
        writeln!(file, "first").unwrap();
        drop(file);

        merge_hourly_positional(&path, &[bucket("2023-05-01 09:00:00", 3)]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "note,time_base,Publications");
        assert_eq!(lines[1], "first,2023-05-01 09:00:00,3");
    }

    #[test]
    fn test_merge_with_more_buckets_than_prior_rows_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hourly.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "time_base,Publications,annotation").unwrap();
        writeln!(file, "2020-01-01 00:00:00,99,spike").unwrap();
        drop(file);

        merge_hourly_positional(
            &path,
            &[bucket("2023-05-01 09:00:00", 1), bucket("2023-05-01 10:00:00", 2)],
        )
        .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "2023-05-01 10:00:00,2,");
    }

    #[test]
    fn test_write_windows() {
        let posts = vec![
            Post {
                message_type: "Post".to_string(),
                author: "a".to_string(),
                blog: Some("m125".to_string()),
                time_base: parse_timestamp("2023-05-01 00:30:00").unwrap(),
            },
            Post {
                message_type: "Post".to_string(),
                author: "b".to_string(),
                blog: Some("other".to_string()),
                time_base: parse_timestamp("2023-05-02 02:30:00").unwrap(),
            },
        ];
        let windows =
            RollingWindowAnalyzer::new(24, BlogMatcher::tracked()).analyze(&posts);

        let dir = tempdir().unwrap();
        let path = dir.path().join("windows.csv");
        write_windows(&path, &windows).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines[0],
            "Start Period,End Period,Publications with 125,Total Publications,Percent 125"
        );
        assert_eq!(lines.len(), windows.len() + 1);
        assert_eq!(
            lines[1],
            "2023-05-01 00:00:00,2023-05-02 00:00:00,1,1,100"
        );
    }
}
