use crate::error::{ExplorerError, ExplorerResult};
pub use tracing::instrument;
pub use tracing::{debug, error, info, trace, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `default_directive` when set. Log lines go to stderr so
/// that the directory listing on stdout stays clean.
pub fn init_tracing(default_directive: &str) -> ExplorerResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|e| {
            Box::new(ExplorerError::message(format!(
                "Invalid log filter '{}': {}",
                default_directive, e
            )))
        })?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|e| {
            Box::new(ExplorerError::message(format!(
                "Failed to install tracing subscriber: {}",
                e
            )))
        })
}
