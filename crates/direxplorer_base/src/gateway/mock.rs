use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use relative_path::RelativePath;

use crate::{ExplorerError, ExplorerResult};

use super::pattern::NamePattern;
use super::traits::FileSystemGateway;

/* 📖 # How does MockGateway model a file system?

Every file and directory is stored as a normalized, `/`-separated key relative to a
virtual root, e.g. `r/sub/c.log`. Paths handed out to callers are absolute (`/r/sub`).
BTreeSets keep listings sorted, so traversal order in tests is deterministic.

Adding a file or directory implicitly creates all of its ancestors, which keeps test
setup down to one line per leaf.
*/

/// In-memory gateway for testing.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use direxplorer_base::{FileSystemGateway, MockGateway};
///
/// let mock = MockGateway::new();
/// mock.add_file("/r/a.txt");
/// let files = mock.list_files(Path::new("/r"), "*.txt").unwrap();
/// assert_eq!(files, vec!["a.txt".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct MockGateway {
    tree: Arc<Mutex<MockTree>>,
}

#[derive(Debug)]
struct MockTree {
    directories: BTreeSet<String>,
    files: BTreeSet<String>,
    failing: BTreeSet<String>,
    current_dir: String,
    pseudo_entries: bool,
}

impl MockTree {
    fn key(&self, path: &Path) -> String {
        let raw = path.to_string_lossy().replace('\\', "/");
        let absolute = if raw.starts_with('/') {
            raw
        } else {
            format!("{}/{}", self.current_dir, raw)
        };
        let normalized = RelativePath::new(absolute.trim_start_matches('/')).normalize();
        // `..` at the root stays at the root
        normalized
            .as_str()
            .split('/')
            .skip_while(|segment| *segment == "..")
            .collect::<Vec<_>>()
            .join("/")
    }

    fn insert_directory(&mut self, key: &str) {
        let mut current = Some(key);
        while let Some(dir) = current {
            if !self.directories.insert(dir.to_owned()) {
                break;
            }
            current = split(dir).map(|(parent, _)| parent);
        }
    }

    fn check_listable(&self, key: &str) -> ExplorerResult<()> {
        if self.failing.contains(key) {
            return Err(Box::new(ExplorerError::file_error(
                to_path(key),
                io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
            )));
        }
        if !self.directories.contains(key) {
            return Err(not_found(key));
        }
        Ok(())
    }
}

/// Splits a key into its parent key and its final name. The root has neither.
fn split(key: &str) -> Option<(&str, &str)> {
    if key.is_empty() {
        return None;
    }
    Some(key.rsplit_once('/').unwrap_or(("", key)))
}

fn to_path(key: &str) -> PathBuf {
    PathBuf::from(format!("/{}", key))
}

fn not_found(key: &str) -> Box<ExplorerError> {
    Box::new(ExplorerError::file_error(
        to_path(key),
        io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
    ))
}

impl MockGateway {
    /// Create a gateway holding only the root directory `/`.
    pub fn new() -> Self {
        let mut directories = BTreeSet::new();
        directories.insert(String::new());
        Self {
            tree: Arc::new(Mutex::new(MockTree {
                directories,
                files: BTreeSet::new(),
                failing: BTreeSet::new(),
                current_dir: String::new(),
                pseudo_entries: true,
            })),
        }
    }

    fn tree(&self) -> MutexGuard<'_, MockTree> {
        self.tree.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a directory and all of its ancestors.
    pub fn add_directory(&self, path: impl AsRef<Path>) {
        let mut tree = self.tree();
        let key = tree.key(path.as_ref());
        tree.insert_directory(&key);
    }

    /// Add a file; its parent directories are created as needed.
    pub fn add_file(&self, path: impl AsRef<Path>) {
        let mut tree = self.tree();
        let key = tree.key(path.as_ref());
        if let Some((parent, _)) = split(&key) {
            let parent = parent.to_owned();
            tree.insert_directory(&parent);
        }
        tree.files.insert(key);
    }

    /// Make every listing of `directory` fail with a permission error.
    pub fn fail_listing(&self, directory: impl AsRef<Path>) {
        let mut tree = self.tree();
        let key = tree.key(directory.as_ref());
        tree.failing.insert(key);
    }

    /// Set the directory relative paths are resolved against.
    pub fn set_current_dir(&self, directory: impl AsRef<Path>) {
        let mut tree = self.tree();
        let key = tree.key(directory.as_ref());
        tree.current_dir = key;
    }

    /// Control whether subdirectory listings start with `.` and `..`.
    pub fn set_pseudo_entries(&self, enabled: bool) {
        self.tree().pseudo_entries = enabled;
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemGateway for MockGateway {
    fn canonicalize(&self, path: &Path) -> ExplorerResult<PathBuf> {
        let tree = self.tree();
        let key = tree.key(path);
        if tree.directories.contains(&key) || tree.files.contains(&key) {
            Ok(to_path(&key))
        } else {
            Err(not_found(&key))
        }
    }

    fn list_files(&self, directory: &Path, pattern: &str) -> ExplorerResult<Vec<String>> {
        let matcher = NamePattern::compile(pattern)?;
        let tree = self.tree();
        let key = tree.key(directory);
        tree.check_listable(&key)?;
        Ok(tree
            .files
            .iter()
            .filter_map(|file| split(file))
            .filter(|(parent, name)| *parent == key && matcher.is_match(name))
            .map(|(_, name)| name.to_owned())
            .collect())
    }

    fn list_subdirectories(&self, directory: &Path) -> ExplorerResult<Vec<String>> {
        let tree = self.tree();
        let key = tree.key(directory);
        tree.check_listable(&key)?;
        let mut names = Vec::new();
        if tree.pseudo_entries {
            names.push(".".to_owned());
            names.push("..".to_owned());
        }
        names.extend(
            tree.directories
                .iter()
                .filter_map(|dir| split(dir))
                .filter(|(parent, _)| *parent == key)
                .map(|(_, name)| name.to_owned()),
        );
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_file_creates_parents() {
        let mock = MockGateway::new();
        mock.add_file("/r/sub/c.log");

        assert_eq!(
            mock.canonicalize(Path::new("/r/sub")).unwrap(),
            PathBuf::from("/r/sub")
        );
        assert_eq!(
            mock.list_subdirectories(Path::new("/r")).unwrap(),
            vec![".", "..", "sub"]
        );
    }

    #[test]
    fn test_canonicalize_resolves_relative_and_dot_segments() {
        let mock = MockGateway::new();
        mock.add_directory("/r/sub");
        mock.set_current_dir("/r");

        assert_eq!(
            mock.canonicalize(Path::new("sub/../sub/.")).unwrap(),
            PathBuf::from("/r/sub")
        );
        assert_eq!(
            mock.canonicalize(Path::new(".")).unwrap(),
            PathBuf::from("/r")
        );
    }

    #[test]
    fn test_parent_of_root_is_root() {
        let mock = MockGateway::new();
        mock.add_directory("/r");

        assert_eq!(mock.canonicalize(Path::new("/..")).unwrap(), PathBuf::from("/"));
        assert_eq!(
            mock.canonicalize(Path::new("/r/../../r")).unwrap(),
            PathBuf::from("/r")
        );
        mock.set_current_dir("/r");
        assert_eq!(
            mock.canonicalize(Path::new("../../..")).unwrap(),
            PathBuf::from("/")
        );
    }

    #[test]
    fn test_canonicalize_missing_path() {
        let mock = MockGateway::new();
        assert!(mock.canonicalize(Path::new("/nowhere")).is_err());
    }

    #[test]
    fn test_list_files_only_direct_children() {
        let mock = MockGateway::new();
        mock.add_file("/r/b.txt");
        mock.add_file("/r/a.txt");
        mock.add_file("/r/sub/c.txt");

        assert_eq!(
            mock.list_files(Path::new("/r"), "*.txt").unwrap(),
            vec!["a.txt", "b.txt"]
        );
    }

    #[test]
    fn test_list_root_directory() {
        let mock = MockGateway::new();
        mock.add_file("/top.txt");
        mock.add_directory("/r");

        assert_eq!(
            mock.list_files(Path::new("/"), "*.*").unwrap(),
            vec!["top.txt"]
        );
        assert_eq!(
            mock.list_subdirectories(Path::new("/")).unwrap(),
            vec![".", "..", "r"]
        );
    }

    #[test]
    fn test_pseudo_entries_can_be_disabled() {
        let mock = MockGateway::new();
        mock.add_directory("/r/sub");
        mock.set_pseudo_entries(false);

        assert_eq!(
            mock.list_subdirectories(Path::new("/r")).unwrap(),
            vec!["sub"]
        );
    }

    #[test]
    fn test_failing_listing() {
        let mock = MockGateway::new();
        mock.add_file("/r/a.txt");
        mock.fail_listing("/r");

        let err = mock.list_files(Path::new("/r"), "*.*").unwrap_err();
        assert_eq!(err.to_string(), "File error at /r: access denied");
        assert!(mock.list_subdirectories(Path::new("/r")).is_err());
    }

    #[test]
    fn test_clones_share_the_tree() {
        let mock = MockGateway::new();
        let clone = mock.clone();
        clone.add_file("/r/a.txt");

        assert_eq!(
            mock.list_files(Path::new("/r"), "*.*").unwrap(),
            vec!["a.txt"]
        );
    }
}
