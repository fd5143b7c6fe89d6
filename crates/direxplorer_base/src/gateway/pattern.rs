use globset::{GlobBuilder, GlobMatcher};

use crate::error::ErrorKind;
use crate::{ExplorerError, ExplorerResult};

/// The pattern that selects every file, used when no pattern was given.
pub const MATCH_ALL: &str = "*.*";

/// A compiled file name pattern.
///
/// `*.*` and `*` select every name, including names without an extension.
/// Anything else is a glob where `*` does not cross `/`.
#[derive(Debug, Clone)]
pub enum NamePattern {
    Everything,
    Glob(GlobMatcher),
}

impl NamePattern {
    pub fn compile(pattern: &str) -> ExplorerResult<Self> {
        if pattern == MATCH_ALL || pattern == "*" {
            return Ok(NamePattern::Everything);
        }
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| {
                Box::new(ExplorerError::new(ErrorKind::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: e.kind().to_string(),
                }))
            })?;
        Ok(NamePattern::Glob(glob.compile_matcher()))
    }

    pub fn is_match(&self, name: &str) -> bool {
        match self {
            NamePattern::Everything => true,
            NamePattern::Glob(matcher) => matcher.is_match(name),
        }
    }
}
