//! Artifact freshness gate.
//!
//! Decides whether the persisted size-type artifact is young enough to skip
//! a full refresh. Age is measured from the artifact's modification time;
//! the writer replaces the file wholesale, so mtime is creation time.

use std::path::Path;

use chrono::{DateTime, Utc};

/// True when the artifact at `path` is still usable.
///
/// Always false when `force` is set or the artifact is absent. If the
/// metadata read fails (artifact vanished between checks), the artifact is
/// treated as stale and refreshed.
pub fn is_fresh(path: &Path, max_age_days: i64, force: bool) -> bool {
    if force {
        return false;
    }
    match artifact_age_days(path) {
        Some(age) => age < max_age_days,
        None => false,
    }
}

/// Age of the artifact in whole days, or `None` if it cannot be read.
pub fn artifact_age_days(path: &Path) -> Option<i64> {
    let meta = std::fs::metadata(path).ok()?;
    let modified = meta.modified().ok()?;
    Some(age_days(modified.into(), Utc::now()))
}

/// Whole days elapsed between two instants, truncated, never negative.
fn age_days(then: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - then).num_days().max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_fresh_file_is_fresh() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sizes.txt");
        fs::write(&path, "m5.large\n").unwrap();
        assert!(is_fresh(&path, 10, false));
    }

    #[test]
    fn test_force_overrides_fresh_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sizes.txt");
        fs::write(&path, "m5.large\n").unwrap();
        assert!(!is_fresh(&path, 10, true));
    }

    #[test]
    fn test_absent_file_is_stale() {
        let tmp = TempDir::new().unwrap();
        assert!(!is_fresh(&tmp.path().join("sizes.txt"), 10, false));
    }

    #[test]
    fn test_zero_window_is_always_stale() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sizes.txt");
        fs::write(&path, "m5.large\n").unwrap();
        // Age 0 is not < 0, so even a brand-new artifact must refresh.
        assert!(!is_fresh(&path, 0, false));
    }

    #[test]
    fn test_age_truncates_to_whole_days() {
        let now = Utc::now();
        assert_eq!(age_days(now - TimeDelta::hours(47), now), 1);
        assert_eq!(age_days(now - TimeDelta::hours(23), now), 0);
        assert_eq!(age_days(now - TimeDelta::days(10), now), 10);
    }

    #[test]
    fn test_future_mtime_clamps_to_zero() {
        let now = Utc::now();
        assert_eq!(age_days(now + TimeDelta::hours(5), now), 0);
    }

    #[test]
    fn test_boundary_age_is_stale() {
        let now = Utc::now();
        let age = age_days(now - TimeDelta::days(10), now);
        // age >= max_age_days means not fresh
        assert!(age >= 10);
    }
}
