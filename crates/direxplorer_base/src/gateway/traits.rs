use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::ExplorerResult;

/* 📖 # Why is the gateway a trait instead of a struct?

The traversal engine needs a file system, but tests should not depend on the layout of
the machine they run on. With a trait the engine can be driven by MockGateway in unit
tests and by RealGateway in the binary, without any code in the engine knowing which.
*/

/// File system operations the traversal engine relies on.
///
/// Pattern syntax belongs to the implementation: the engine hands patterns through
/// unchanged. Both provided gateways use glob syntax matched against the bare file name.
pub trait FileSystemGateway: std::fmt::Debug + Send + Sync + 'static {
    /// Resolve `path` to its canonical, absolute form.
    ///
    /// Fails if the path does not exist.
    fn canonicalize(&self, path: &Path) -> ExplorerResult<PathBuf>;

    /// Names of the files directly inside `directory` whose name matches `pattern`.
    fn list_files(&self, directory: &Path, pattern: &str) -> ExplorerResult<Vec<String>>;

    /// Names of the immediate subdirectories of `directory`.
    ///
    /// Implementations may report the `.` and `..` pseudo-entries; callers skip them.
    fn list_subdirectories(&self, directory: &Path) -> ExplorerResult<Vec<String>>;
}

/// Handle to a gateway implementation, enabling shared ownership.
///
/// Internally wraps `Arc<dyn FileSystemGateway>` for cheap cloning.
///
/// # Examples
///
/// ```
/// use direxplorer_base::{GatewayHandle, MockGateway};
///
/// let gateway = GatewayHandle::new(MockGateway::new());
/// let shared = gateway.clone();
/// ```
#[derive(Debug, Clone)]
pub struct GatewayHandle(Arc<dyn FileSystemGateway>);

impl GatewayHandle {
    pub fn new(gateway: impl FileSystemGateway) -> Self {
        Self(Arc::new(gateway))
    }
}

impl std::ops::Deref for GatewayHandle {
    type Target = dyn FileSystemGateway;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
