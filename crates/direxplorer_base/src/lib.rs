/* 📖 # Why have direxplorer_base as a separate library?
direxplorer_base provides the error handling, logging setup and the file system
gateway used across all crates. The traversal engine only ever talks to the gateway
trait, so it can be exercised against the in-memory gateway without touching disk.
*/

pub mod error;
mod error_tests;
pub mod gateway;
pub mod tracing;

// Re-export commonly used types for convenience
pub use error::{ErrorKind, ExplorerError, ExplorerResult, ResultExt};
pub use gateway::{FileSystemGateway, GatewayHandle, MockGateway, RealGateway};
