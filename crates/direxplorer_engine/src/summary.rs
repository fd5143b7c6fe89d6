use std::fmt;

use crate::TraversalPolicy;

/// Final report of a search, rendered for humans.
///
/// ```
/// use direxplorer_engine::{Summary, TraversalPolicy};
///
/// let summary = Summary::from_policy(&TraversalPolicy::new());
/// assert_eq!(summary.to_string(), "processed 0 files in 0 directories");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    pub directories: usize,
    pub limit_exceeded: bool,
}

impl Summary {
    pub fn from_policy(policy: &TraversalPolicy) -> Self {
        Self {
            files: policy.file_count(),
            directories: policy.dir_count(),
            limit_exceeded: policy.is_done(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "processed {} files in {} directories",
            self.files, self.directories
        )?;
        if self.limit_exceeded {
            write!(f, "\nstopped because max number of files exceeded")?;
        }
        Ok(())
    }
}
