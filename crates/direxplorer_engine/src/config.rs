use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use direxplorer_base::error::ErrorKind;
use direxplorer_base::gateway::NamePattern;
use direxplorer_base::{ExplorerError, ExplorerResult, ResultExt};

use crate::TraversalPolicy;

/* 📖 # Why a configuration file next to the command line?

Searches that are run over and over (e.g. "all sources of this project, recursively")
are easier to keep in a `direxplorer.toml` than to retype. The file uses the same
vocabulary as the traversal policy; command line flags are layered on top by the CLI.
*/

/// Contents of a `direxplorer.toml` file.
///
/// ```
/// use direxplorer_engine::parse_config;
///
/// let config = parse_config("patterns = [\"*.rs\"]\nrecurse = true").unwrap();
/// assert_eq!(config.path, ".");
/// assert!(config.recurse);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExplorerConfig {
    /// Directory where the search starts.
    pub path: String,
    /// File name patterns; empty means every file.
    pub patterns: Vec<String>,
    pub recurse: bool,
    pub hide_empty_directories: bool,
    pub show_all_in_current_directory: bool,
    /// Maximum number of files to report, 0 for no limit.
    pub max_items: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            path: ".".to_string(),
            patterns: Vec::new(),
            recurse: false,
            hide_empty_directories: false,
            show_all_in_current_directory: false,
            max_items: 0,
        }
    }
}

impl ExplorerConfig {
    /// Build a fresh policy with zeroed counters from these settings.
    pub fn to_policy(&self) -> TraversalPolicy {
        let mut policy = TraversalPolicy::new();
        policy
            .set_patterns(self.patterns.iter().cloned())
            .set_recurse(self.recurse)
            .set_hide_empty_directories(self.hide_empty_directories)
            .set_show_all_in_current_directory(self.show_all_in_current_directory)
            .set_max_items(self.max_items);
        policy
    }

    /// Check the settings before any directory is touched.
    ///
    /// Every pattern is compiled, so a malformed glob is reported up front instead of
    /// halfway through a search. Several bad patterns are reported together.
    pub fn validate(&self) -> ExplorerResult<()> {
        if self.path.trim().is_empty() {
            return Err(config_error("path must not be empty"));
        }
        if let Some(index) = self.patterns.iter().position(|p| p.trim().is_empty()) {
            return Err(config_error(format!("pattern #{} is empty", index + 1)));
        }
        let mut errors: Vec<ExplorerError> = self
            .patterns
            .iter()
            .filter_map(|pattern| NamePattern::compile(pattern).err())
            .map(|e| *e)
            .collect();
        match errors.len() {
            0 => Ok(()),
            1 => Err(Box::new(errors.remove(0))),
            count => Err(Box::new(ExplorerError::new(ErrorKind::Multiple {
                errors,
                count,
            }))),
        }
    }
}

fn config_error(reason: impl Into<String>) -> Box<ExplorerError> {
    Box::new(ExplorerError::new(ErrorKind::Config {
        reason: reason.into(),
    }))
}

/// Parse configuration from TOML text.
pub fn parse_config(text: &str) -> ExplorerResult<ExplorerConfig> {
    let config: ExplorerConfig = toml::from_str(text).map_err(|e| config_error(e.message()))?;
    config.validate()?;
    Ok(config)
}

/// Read and parse a configuration file.
pub fn load_config(path: &Path) -> ExplorerResult<ExplorerConfig> {
    debug!(path = %path.display(), "loading configuration");
    let text =
        fs::read_to_string(path).map_err(|e| Box::new(ExplorerError::file_error(path, e)))?;
    parse_config(&text).with_context(|| format!("in {}", path.display()))
}

/// Split a comma separated pattern list, trimming blanks and dropping empty items.
///
/// ```
/// use direxplorer_engine::split_patterns;
///
/// assert_eq!(split_patterns(" *.h, *.cpp ,,"), vec!["*.h", "*.cpp"]);
/// ```
pub fn split_patterns(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|pattern| !pattern.is_empty())
        .map(str::to_string)
        .collect()
}
