/* 📖 # What lives in direxplorer_engine?

The traversal itself and everything a caller configures it with:

- policy.rs: settings and counters, including the item limit rule
- handler.rs: the handler trait with its subscriber-list and closure variants
- engine.rs: the depth-first walk over a FileSystemGateway
- summary.rs / display.rs: human readable output
- config.rs: the `direxplorer.toml` file
*/

pub mod config;
pub mod display;
pub mod engine;
pub mod handler;
pub mod policy;
pub mod summary;

pub use config::{ExplorerConfig, load_config, parse_config, split_patterns};
pub use display::DisplayHandler;
pub use engine::{SearchCounts, TraversalEngine};
pub use handler::{ExplorerHandler, FnHandler, HandlerList};
pub use policy::TraversalPolicy;
pub use summary::Summary;
