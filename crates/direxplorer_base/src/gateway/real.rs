use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use walkdir::{DirEntry, WalkDir};

use crate::{ExplorerError, ExplorerResult};

use super::pattern::NamePattern;
use super::traits::FileSystemGateway;

/* 📖 # Why walkdir for a single level listing?

walkdir already handles sorting, error reporting with the offending path and
file type detection without an extra stat call. Limiting it to depth one keeps
the recursion decisions in the traversal engine, where the policy lives.
A symbolic link counts as a file when its target is a regular file. Links to
directories are never listed as subdirectories, so the walk cannot loop.
*/

/// Gateway backed by the real file system.
#[derive(Debug, Default, Clone)]
pub struct RealGateway;

impl RealGateway {
    pub fn new() -> Self {
        Self
    }

    fn children(&self, directory: &Path) -> ExplorerResult<Vec<DirEntry>> {
        WalkDir::new(directory)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .map(|entry| entry.map_err(|e| walk_error(directory, e)))
            .collect()
    }
}

fn walk_error(directory: &Path, error: walkdir::Error) -> Box<ExplorerError> {
    let path = error.path().unwrap_or(directory).to_path_buf();
    debug!(path = %path.display(), error = %error, "failed to list directory");
    let source = error
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("file system loop detected"));
    Box::new(ExplorerError::file_error(path, source))
}

fn is_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn entry_name(entry: &DirEntry) -> String {
    entry.file_name().to_string_lossy().into_owned()
}

impl FileSystemGateway for RealGateway {
    #[instrument(skip(self), fields(path = %path.display()))]
    fn canonicalize(&self, path: &Path) -> ExplorerResult<PathBuf> {
        let canonical = fs::canonicalize(path).map_err(|e| {
            debug!(error = %e, "failed to canonicalize path");
            Box::new(ExplorerError::file_error(path, e))
        })?;
        debug!(canonical = %canonical.display(), "canonicalized path");
        Ok(canonical)
    }

    #[instrument(skip(self), fields(directory = %directory.display()))]
    fn list_files(&self, directory: &Path, pattern: &str) -> ExplorerResult<Vec<String>> {
        let matcher = NamePattern::compile(pattern)?;
        let files: Vec<String> = self
            .children(directory)?
            .iter()
            .filter(|entry| is_file(entry))
            .map(entry_name)
            .filter(|name| matcher.is_match(name))
            .collect();
        debug!(count = files.len(), "listed matching files");
        Ok(files)
    }

    #[instrument(skip(self), fields(directory = %directory.display()))]
    fn list_subdirectories(&self, directory: &Path) -> ExplorerResult<Vec<String>> {
        let directories: Vec<String> = self
            .children(directory)?
            .iter()
            .filter(|entry| entry.file_type().is_dir())
            .map(entry_name)
            .collect();
        debug!(count = directories.len(), "listed subdirectories");
        Ok(directories)
    }
}
