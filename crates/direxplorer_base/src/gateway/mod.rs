/* 📖 # What is the file system gateway?

The gateway is the only place where the explorer touches the file system. It answers
three questions: what is the canonical form of a path, which files in a directory match
a pattern, and which subdirectories does a directory have.

- RealGateway answers them from disk using walkdir and globset
- MockGateway answers them from an in-memory tree, so traversal tests are deterministic

The traversal engine depends on the FileSystemGateway trait only.
*/

pub mod mock;
mod pattern;
pub mod real;
mod traits;

pub use mock::MockGateway;
pub use pattern::{MATCH_ALL, NamePattern};
pub use real::RealGateway;
pub use traits::{FileSystemGateway, GatewayHandle};
