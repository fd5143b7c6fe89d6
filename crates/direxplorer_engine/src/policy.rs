use direxplorer_base::gateway::MATCH_ALL;

use crate::SearchCounts;

/// Settings and counters for one or more searches.
///
/// The counters are not reset when a new search starts, so several roots can be
/// explored with one policy and summarized together. Call [`TraversalPolicy::reset`]
/// to start counting from zero again.
///
/// # Examples
///
/// ```
/// use direxplorer_engine::TraversalPolicy;
///
/// let mut policy = TraversalPolicy::new();
/// policy.add_pattern("*.rs").add_pattern("*.toml").set_recurse(true);
/// assert_eq!(policy.patterns(), ["*.rs", "*.toml"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalPolicy {
    patterns: Vec<String>,
    recurse: bool,
    hide_empty_directories: bool,
    show_all_in_current_directory: bool,
    max_items: usize,
    file_count: usize,
    dir_count: usize,
}

impl TraversalPolicy {
    /// A policy matching every file, without recursion or item limit.
    pub fn new() -> Self {
        Self {
            patterns: vec![MATCH_ALL.to_string()],
            recurse: false,
            hide_empty_directories: false,
            show_all_in_current_directory: false,
            max_items: 0,
            file_count: 0,
            dir_count: 0,
        }
    }

    /// Replace all patterns. An empty list restores the match-everything default.
    pub fn set_patterns<I, S>(&mut self, patterns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns = patterns.into_iter().map(Into::into).collect();
        if self.patterns.is_empty() {
            self.patterns.push(MATCH_ALL.to_string());
        }
        self
    }

    /// Append a pattern. The first explicit pattern replaces the default.
    pub fn add_pattern(&mut self, pattern: impl Into<String>) -> &mut Self {
        if self.patterns.len() == 1 && self.patterns[0] == MATCH_ALL {
            self.patterns.clear();
        }
        self.patterns.push(pattern.into());
        self
    }

    pub fn set_recurse(&mut self, recurse: bool) -> &mut Self {
        self.recurse = recurse;
        self
    }

    pub fn set_hide_empty_directories(&mut self, hide: bool) -> &mut Self {
        self.hide_empty_directories = hide;
        self
    }

    pub fn set_show_all_in_current_directory(&mut self, show_all: bool) -> &mut Self {
        self.show_all_in_current_directory = show_all;
        self
    }

    /// Limit the number of files handed to handlers. Zero means unlimited.
    pub fn set_max_items(&mut self, max_items: usize) -> &mut Self {
        self.max_items = max_items;
        self
    }

    /// Patterns in insertion order, never empty.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn recurse(&self) -> bool {
        self.recurse
    }

    pub fn hide_empty_directories(&self) -> bool {
        self.hide_empty_directories
    }

    pub fn show_all_in_current_directory(&self) -> bool {
        self.show_all_in_current_directory
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    pub fn file_count(&self) -> usize {
        self.file_count
    }

    pub fn dir_count(&self) -> usize {
        self.dir_count
    }

    pub fn counts(&self) -> SearchCounts {
        SearchCounts {
            files: self.file_count,
            directories: self.dir_count,
        }
    }

    /// True once more files have been counted than the item limit allows.
    pub fn is_done(&self) -> bool {
        self.max_items > 0 && self.file_count > self.max_items
    }

    /// Whether the file counted last should reach the handler.
    pub fn should_deliver_file(&self) -> bool {
        self.show_all_in_current_directory
            || self.max_items == 0
            || self.file_count <= self.max_items
    }

    pub(crate) fn record_directory_visited(&mut self) {
        self.dir_count += 1;
    }

    pub(crate) fn record_file_visited(&mut self) {
        self.file_count += 1;
    }

    /// Zero both counters, keeping the settings.
    pub fn reset(&mut self) {
        self.file_count = 0;
        self.dir_count = 0;
    }
}

impl Default for TraversalPolicy {
    fn default() -> Self {
        Self::new()
    }
}
