//! Commit id extraction from log file names.

use std::path::Path;

/// File name prefix of logs written by the perf harness.
pub const LOG_PREFIX: &str = "test-backend-ops-perf-";

/// Extract the commit id from a file named `test-backend-ops-perf-<id>.log`.
///
/// Only the file name is inspected. Returns `None` when the name does not
/// follow the convention.
pub fn extract_commit_id(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let rest = name.strip_prefix(LOG_PREFIX)?;
    let (id, ext) = rest.split_once('.')?;
    (!id.is_empty() && ext.starts_with("log")).then(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(name: &str) -> Option<String> {
        extract_commit_id(Path::new(name))
    }

    #[test]
    fn test_extract_commit_id() {
        assert_eq!(commit("test-backend-ops-perf-abc1234.log").as_deref(), Some("abc1234"));
        assert_eq!(commit("/tmp/runs/test-backend-ops-perf-deadbeef.log").as_deref(), Some("deadbeef"));
        assert_eq!(commit("test-backend-ops-perf-v1-rc2.log").as_deref(), Some("v1-rc2"));
    }

    #[test]
    fn test_extract_commit_id_no_match() {
        assert_eq!(commit("results.log"), None);
        assert_eq!(commit("test-backend-ops-perf-.log"), None);
        assert_eq!(commit("test-backend-ops-perf-abc1234.txt"), None);
        assert_eq!(commit("test-backend-ops-perf-abc1234"), None);
        assert_eq!(commit("my-test-backend-ops-perf-abc1234.log"), None);
        assert_eq!(commit("test-backend-ops-perf-abc.1234.log"), None);
    }
}
