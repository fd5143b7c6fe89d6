use std::path::Path;

use tracing::{debug, instrument, trace};

use direxplorer_base::{ExplorerResult, GatewayHandle, ResultExt};

use crate::{ExplorerHandler, Summary, TraversalPolicy};

/* 📖 # How does the traversal work?

The engine performs a pre-order, depth-first walk. For every directory it:

1. stops if the item limit has already been exceeded
2. resolves the directory to its canonical path
3. reports the directory, either immediately or, when empty directories are hidden,
   just before its first matching file
4. counts every file matching each pattern, handing it to the handler only while the
   limit allows (or always, when all files of the current directory are shown)
5. checks the limit again before looking at subdirectories
6. descends into subdirectories when recursing, or reports them without looking inside

Files beyond the limit are still counted, which is what makes the limit observable
in the summary.
*/

/// Number of files and directories processed so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchCounts {
    pub files: usize,
    pub directories: usize,
}

/// Depth-first directory explorer.
///
/// The engine holds no per-search state: settings and counters live in the
/// [`TraversalPolicy`], and the handler is borrowed for the duration of one search.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use direxplorer_base::{GatewayHandle, MockGateway};
/// use direxplorer_engine::{FnHandler, TraversalEngine, TraversalPolicy};
///
/// let mock = MockGateway::new();
/// mock.add_file("/r/a.txt");
/// let engine = TraversalEngine::new(GatewayHandle::new(mock));
///
/// let mut policy = TraversalPolicy::new();
/// let mut handler = FnHandler::new(|_dir: &Path| Ok(()), |_file: &Path| Ok(()));
/// let counts = engine.search(&mut policy, &mut handler, Path::new("/r")).unwrap();
/// assert_eq!((counts.files, counts.directories), (1, 1));
/// ```
#[derive(Debug, Clone)]
pub struct TraversalEngine {
    gateway: GatewayHandle,
}

impl TraversalEngine {
    pub fn new(gateway: GatewayHandle) -> Self {
        Self { gateway }
    }

    /// Explore the tree rooted at `root`, returning the policy's counters afterwards.
    ///
    /// Gateway and handler errors abort the whole search. The counters keep whatever
    /// was processed before the failure.
    pub fn search(
        &self,
        policy: &mut TraversalPolicy,
        handler: &mut dyn ExplorerHandler,
        root: &Path,
    ) -> ExplorerResult<SearchCounts> {
        debug!(
            root = %root.display(),
            patterns = ?policy.patterns(),
            recurse = policy.recurse(),
            hide_empty = policy.hide_empty_directories(),
            show_all = policy.show_all_in_current_directory(),
            max_items = policy.max_items(),
            "starting search"
        );
        self.find(policy, handler, root)?;
        let counts = policy.counts();
        debug!(files = counts.files, directories = counts.directories, "search finished");
        Ok(counts)
    }

    /// Summary of everything the policy has counted.
    pub fn show_summary(&self, policy: &TraversalPolicy) -> Summary {
        Summary::from_policy(policy)
    }

    #[instrument(level = "debug", skip(self, policy, handler), fields(path = %path.display()))]
    fn find(
        &self,
        policy: &mut TraversalPolicy,
        handler: &mut dyn ExplorerHandler,
        path: &Path,
    ) -> ExplorerResult<()> {
        if policy.is_done() {
            debug!("item limit exceeded, not entering directory");
            return Ok(());
        }

        let directory = self.gateway.canonicalize(path)?;
        let mut reported = false;
        if !policy.hide_empty_directories() {
            Self::notify_directory(policy, handler, &directory)?;
            reported = true;
        }

        let patterns = policy.patterns().to_vec();
        for pattern in &patterns {
            let files = self
                .gateway
                .list_files(&directory, pattern)
                .with_context(|| format!("listing files in {}", directory.display()))?;
            if !reported && !files.is_empty() {
                Self::notify_directory(policy, handler, &directory)?;
                reported = true;
            }
            for name in files {
                let file = directory.join(&name);
                policy.record_file_visited();
                if policy.should_deliver_file() {
                    handler
                        .on_file(&file)
                        .with_context(|| format!("handling file {}", file.display()))?;
                } else {
                    trace!(file = %file.display(), "over item limit, counted only");
                }
            }
        }

        if policy.is_done() {
            debug!(files = policy.file_count(), "item limit exceeded, not descending");
            return Ok(());
        }

        let subdirectories = self
            .gateway
            .list_subdirectories(&directory)
            .with_context(|| format!("listing subdirectories of {}", directory.display()))?;
        for name in subdirectories {
            if name == "." || name == ".." {
                continue;
            }
            let subdirectory = directory.join(&name);
            if policy.recurse() {
                self.find(policy, handler, &subdirectory)?;
            } else {
                Self::notify_directory(policy, handler, &subdirectory)?;
            }
        }
        Ok(())
    }

    fn notify_directory(
        policy: &mut TraversalPolicy,
        handler: &mut dyn ExplorerHandler,
        directory: &Path,
    ) -> ExplorerResult<()> {
        policy.record_directory_visited();
        handler
            .on_directory(directory)
            .with_context(|| format!("handling directory {}", directory.display()))
    }
}
