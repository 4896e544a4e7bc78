use crate::error::PanelError;
use crate::types::FileRecord;
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;
use std::time::SystemTime;
use walkdir::WalkDir;

/// Static list shown when no source directory is given.
#[must_use]
pub fn sample_records() -> Vec<FileRecord> {
    vec![
        FileRecord::new("Document.pdf", "10 MB", "2 days ago"),
        FileRecord::new("Presentation.pptx", "25 MB", "1 week ago"),
        FileRecord::new("Report.docx", "5 MB", "3 months ago"),
    ]
}

/// Lists the regular files directly inside `path`, ordered by file name.
pub fn scan_directory(path: &Path, now: DateTime<Local>) -> Result<Vec<FileRecord>, PanelError> {
    let meta = fs::metadata(path).map_err(|source| PanelError::SourceDir {
        path: path.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(PanelError::SourceDir {
            path: path.to_path_buf(),
            source: std::io::Error::other("not a directory"),
        });
    }

    let records = WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                log::warn!("Skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let m = match e.metadata() {
                Ok(m) => m,
                Err(err) => {
                    log::warn!("Skipping {}: {err}", e.path().display());
                    return None;
                }
            };

            // Unknown mtimes read as the epoch rather than "just now"
            let modified: DateTime<Local> =
                m.modified().unwrap_or(SystemTime::UNIX_EPOCH).into();

            Some(FileRecord {
                name: e.file_name().to_string_lossy().to_string(),
                size: human_bytes::human_bytes(m.len() as f64),
                modified: relative_time(modified, now),
            })
        })
        .collect::<Vec<_>>();

    log::info!("Loaded {} files from {}", records.len(), path.display());
    Ok(records)
}

/// Formats the age of `modified` relative to `now`, e.g. "2 days ago".
#[must_use]
pub fn relative_time(modified: DateTime<Local>, now: DateTime<Local>) -> String {
    let diff = now.signed_duration_since(modified);

    let minutes = diff.num_minutes();
    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return ago(minutes, "minute");
    }

    let hours = diff.num_hours();
    if hours < 24 {
        return ago(hours, "hour");
    }

    let days = diff.num_days();
    match days {
        0..7 => ago(days, "day"),
        7..30 => ago(days / 7, "week"),
        30..365 => ago(days / 30, "month"),
        _ => ago(days / 365, "year"),
    }
}

fn ago(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::fs::File;
    use std::io::Write;

    fn at(now: DateTime<Local>, delta: Duration) -> String {
        relative_time(now - delta, now)
    }

    #[test]
    fn test_sample_records() {
        let records = sample_records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "Document.pdf");
        assert_eq!(records[1].caption(), "25 MB • Last modified 1 week ago");
        assert_eq!(records[2].modified, "3 months ago");
    }

    #[test]
    fn test_relative_time_thresholds() {
        let now = Local::now();
        assert_eq!(at(now, Duration::seconds(30)), "just now");
        assert_eq!(at(now, Duration::minutes(1)), "1 minute ago");
        assert_eq!(at(now, Duration::minutes(59)), "59 minutes ago");
        assert_eq!(at(now, Duration::hours(1)), "1 hour ago");
        assert_eq!(at(now, Duration::hours(23)), "23 hours ago");
        assert_eq!(at(now, Duration::days(2)), "2 days ago");
        assert_eq!(at(now, Duration::days(7)), "1 week ago");
        assert_eq!(at(now, Duration::days(29)), "4 weeks ago");
        assert_eq!(at(now, Duration::days(90)), "3 months ago");
        assert_eq!(at(now, Duration::days(365)), "1 year ago");
        assert_eq!(at(now, Duration::days(800)), "2 years ago");
    }

    #[test]
    fn test_relative_time_future_is_just_now() {
        let now = Local::now();
        assert_eq!(relative_time(now + Duration::hours(3), now), "just now");
    }

    #[test]
    fn test_scan_directory_lists_files_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = File::create(dir.path().join("b.txt")).unwrap();
        b.write_all(b"hello").unwrap();
        File::create(dir.path().join("a.pdf")).unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        File::create(dir.path().join("nested").join("hidden.txt")).unwrap();

        let records = scan_directory(dir.path(), Local::now()).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "b.txt"]);
        assert_eq!(records[1].size, human_bytes::human_bytes(5.0));
        assert_eq!(records[0].modified, "just now");
    }

    #[test]
    fn test_scan_directory_ages_files_against_now() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("old.log")).unwrap();

        let later = Local::now() + Duration::days(3);
        let records = scan_directory(dir.path(), later).unwrap();
        assert_eq!(records[0].modified, "3 days ago");
    }

    #[test]
    fn test_scan_directory_rejects_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = scan_directory(&missing, Local::now()).unwrap_err();
        assert!(matches!(err, PanelError::SourceDir { .. }));
    }

    #[test]
    fn test_scan_directory_rejects_file_root() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        File::create(&file).unwrap();
        assert!(scan_directory(&file, Local::now()).is_err());
    }
}
