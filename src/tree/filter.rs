//! Name-based entry filtering

use std::collections::BTreeSet;
use std::ffi::{OsStr, OsString};

use super::config::TraversalConfig;

/// Decides which directory entries take part in a render.
/// Applied once per directory read, before sorting.
#[derive(Debug, Clone)]
pub struct EntryFilter<'a> {
    show_hidden: bool,
    ignore_names: &'a BTreeSet<String>,
}

impl<'a> EntryFilter<'a> {
    pub fn new(config: &'a TraversalConfig) -> Self {
        Self {
            show_hidden: config.show_hidden,
            ignore_names: &config.ignore_names,
        }
    }

    /// Check if an entry name should be included.
    pub fn is_included(&self, name: &OsStr) -> bool {
        if !self.show_hidden && name.as_encoded_bytes().starts_with(b".") {
            return false;
        }
        match name.to_str() {
            Some(name) => !self.ignore_names.contains(name),
            None => true,
        }
    }

    /// Filter a raw listing and sort what remains by exact byte order.
    pub fn apply(&self, names: Vec<OsString>) -> Vec<OsString> {
        let mut kept: Vec<OsString> = names
            .into_iter()
            .filter(|name| self.is_included(name))
            .collect();
        kept.sort();
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<OsString> {
        items.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_hidden_excluded_by_default() {
        let config = TraversalConfig::new("/");
        let filter = EntryFilter::new(&config);
        assert!(!filter.is_included(OsStr::new(".git")));
        assert!(!filter.is_included(OsStr::new(".")));
        assert!(filter.is_included(OsStr::new("src")));
    }

    #[test]
    fn test_hidden_shown_when_enabled() {
        let config = TraversalConfig::new("/").with_show_hidden(true);
        let filter = EntryFilter::new(&config);
        assert!(filter.is_included(OsStr::new(".env")));
    }

    #[test]
    fn test_ignore_is_exact() {
        let config = TraversalConfig::new("/").with_ignore_names(["target"]);
        let filter = EntryFilter::new(&config);
        assert!(!filter.is_included(OsStr::new("target")));
        assert!(filter.is_included(OsStr::new("target2")));
        assert!(filter.is_included(OsStr::new("Target")));
        assert!(filter.is_included(OsStr::new("*")));
    }

    #[test]
    fn test_ignore_applies_to_hidden_names_too() {
        let config = TraversalConfig::new("/")
            .with_show_hidden(true)
            .with_ignore_names([".git"]);
        let filter = EntryFilter::new(&config);
        assert_eq!(filter.apply(names(&[".git", ".env"])), names(&[".env"]));
    }

    #[test]
    fn test_apply_sorts_by_bytes() {
        let config = TraversalConfig::new("/");
        let filter = EntryFilter::new(&config);
        let sorted = filter.apply(names(&["b", "a", "A", "_x", ".hidden", "B"]));
        assert_eq!(sorted, names(&["A", "B", "_x", "a", "b"]));
    }
}
