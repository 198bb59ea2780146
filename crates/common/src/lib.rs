//! Shared building blocks: environment selection, date canonicalization and
//! logging setup.

mod dates;
mod environment;

pub use dates::{canonicalize_date, is_canonical_date, DateInput};
pub use environment::{FlowEnvironment, ParseEnvironmentError, ENVIRONMENT_VAR};

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once is harmless; later calls are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
