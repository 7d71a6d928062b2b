//! Caller-owned sets of usernames that are already taken.

use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;
use std::path::Path;

use crate::error::Result;

/// Read-only membership lookup over the usernames already in use.
///
/// Comparison is exact. The generator never mutates the set.
pub trait UsernameSet {
    fn contains_username(&self, candidate: &str) -> bool;
}

impl<S: BuildHasher> UsernameSet for HashSet<String, S> {
    fn contains_username(&self, candidate: &str) -> bool {
        self.contains(candidate)
    }
}

impl UsernameSet for BTreeSet<String> {
    fn contains_username(&self, candidate: &str) -> bool {
        self.contains(candidate)
    }
}

impl UsernameSet for [String] {
    fn contains_username(&self, candidate: &str) -> bool {
        self.iter().any(|e| e == candidate)
    }
}

impl UsernameSet for Vec<String> {
    fn contains_username(&self, candidate: &str) -> bool {
        self.as_slice().contains_username(candidate)
    }
}

/// Parse a newline-separated username list.
///
/// Lines are trimmed; blank lines and `#` comments are skipped.
pub fn parse_existing_usernames(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Load a username list from a file, one username per line.
pub fn load_existing_usernames(path: &Path) -> Result<HashSet<String>> {
    let content = std::fs::read_to_string(path)?;
    let usernames = parse_existing_usernames(&content);
    tracing::debug!(path = %path.display(), count = usernames.len(), "loaded existing usernames");
    Ok(usernames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosternameError;

    #[test]
    fn hash_set_membership() {
        let set: HashSet<String> = ["JohSmi".to_string()].into_iter().collect();
        assert!(set.contains_username("JohSmi"));
        assert!(!set.contains_username("JohSmid"));
    }

    #[test]
    fn membership_is_case_sensitive() {
        let set: BTreeSet<String> = ["johsmi".to_string()].into_iter().collect();
        assert!(!set.contains_username("JohSmi"));
    }

    #[test]
    fn slice_and_vec_membership() {
        let existing = vec!["a1".to_string(), "b2".to_string()];
        assert!(existing.contains_username("b2"));
        assert!(existing.as_slice().contains_username("a1"));
        assert!(!existing.contains_username("c3"));
    }

    #[test]
    fn parse_skips_blanks_and_comments() {
        let content = "# taken accounts\nJohSmi\n\n   JueMue  \n#old\n";
        let set = parse_existing_usernames(content);
        assert_eq!(set.len(), 2);
        assert!(set.contains("JohSmi"));
        assert!(set.contains("JueMue"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taken.txt");
        std::fs::write(&path, "JohSmi\nJohSmid\n").unwrap();

        let set = load_existing_usernames(&path).expect("should load");
        assert_eq!(set.len(), 2);
        assert!(set.contains("JohSmid"));
    }

    #[test]
    fn load_nonexistent_file_returns_io_error() {
        let result = load_existing_usernames(Path::new("/nonexistent/taken.txt"));
        assert!(matches!(result, Err(RosternameError::Io(_))));
    }
}
