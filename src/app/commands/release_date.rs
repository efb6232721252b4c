//! Release-date bookkeeping.
//!
//! A version that opens a major line (`x.y.1`) gets a date on first
//! sight: the day before the current date, recorded in the store so every
//! later build reads the same value. A patch release reuses the date of
//! its major line and fails if that line was never recorded. Versions
//! without any `.` have no release date.

use chrono::{Days, NaiveDate};

use crate::domain::{AppError, version};
use crate::services::ReleaseStore;

/// Date format used in the store, e.g. `20240811`.
pub const DATE_FORMAT: &str = "%Y%m%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDateOutcome {
    /// `yyyyMMdd`, or `None` for dev versions.
    pub date: Option<String>,
    /// Whether this call added the entry to the store.
    pub recorded: bool,
}

pub fn execute(
    store: &ReleaseStore,
    version_str: &str,
    today: NaiveDate,
) -> Result<ReleaseDateOutcome, AppError> {
    let Some(major_line) = version::major_line_of(version_str) else {
        return Ok(ReleaseDateOutcome { date: None, recorded: false });
    };

    if version::is_major_line(version_str) {
        if let Some(date) = store.get(version_str)? {
            return Ok(ReleaseDateOutcome { date: Some(date), recorded: false });
        }

        // Tagging happens the day after the release is cut.
        let date = (today - Days::new(1)).format(DATE_FORMAT).to_string();
        let note = format!("Last update was for release {} {}", version_str, date);
        store.record(version_str, &date, &note)?;
        return Ok(ReleaseDateOutcome { date: Some(date), recorded: true });
    }

    match store.get(&major_line)? {
        Some(date) => Ok(ReleaseDateOutcome { date: Some(date), recorded: false }),
        None => Err(AppError::MissingMajorRelease(major_line)),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn store_in(dir: &TempDir) -> ReleaseStore {
        ReleaseStore::new(dir.path().join("versions"))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn a_new_major_line_records_yesterday() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let outcome = execute(&store, "1.2.1", date(2024, 8, 12)).unwrap();

        assert_eq!(outcome.date, Some("20240811".to_string()));
        assert!(outcome.recorded);

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "# Last update was for release 1.2.1 20240811\n1.2.1=20240811\n");
    }

    #[test]
    fn a_recorded_major_line_reads_back_unchanged() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.record("1.2.1", "20240501", "note").unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        let outcome = execute(&store, "1.2.1", date(2024, 8, 12)).unwrap();

        assert_eq!(outcome.date, Some("20240501".to_string()));
        assert!(!outcome.recorded);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn a_patch_release_reuses_its_major_line_date() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.record("1.2.1", "20240501", "note").unwrap();

        let outcome = execute(&store, "1.2.3", date(2024, 8, 12)).unwrap();

        assert_eq!(outcome.date, Some("20240501".to_string()));
        assert!(!outcome.recorded);
    }

    #[test]
    fn a_patch_without_its_major_line_fails() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let err = execute(&store, "1.2.3", date(2024, 8, 12)).unwrap_err();

        assert!(matches!(err, AppError::MissingMajorRelease(_)));
        assert_eq!(err.to_string(), "Failed to find last major release 1.2.1");
    }

    #[test]
    fn two_segment_versions_use_the_same_scheme() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.record("2.1", "20240301", "note").unwrap();

        let outcome = execute(&store, "2.4", date(2024, 8, 12)).unwrap();
        assert_eq!(outcome.date, Some("20240301".to_string()));
    }

    #[test]
    fn dotless_versions_have_no_release_date() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let outcome = execute(&store, "snapshot", date(2024, 8, 12)).unwrap();

        assert_eq!(outcome.date, None);
        assert!(!outcome.recorded);
        assert!(!store.path().exists());
    }

    #[test]
    fn a_month_boundary_rolls_back_correctly() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let outcome = execute(&store, "3.0.1", date(2024, 9, 1)).unwrap();
        assert_eq!(outcome.date, Some("20240831".to_string()));
    }
}
