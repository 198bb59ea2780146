//! Per-call timeout and cancellation.

use std::time::Duration;
use tokio::sync::watch;

/// Options applied to a single request.
///
/// `cancel` follows the shutdown-channel convention: the call is abandoned
/// as soon as `true` is observed on the channel. A dropped sender never
/// cancels.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    /// Overrides the client-wide timeout for this call.
    pub timeout: Option<Duration>,
    /// Cancellation signal.
    pub cancel: Option<watch::Receiver<bool>>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the call with a timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Cancel the call when `true` is sent on the channel.
    pub fn with_cancel(mut self, cancel: watch::Receiver<bool>) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

/// Resolve once the cancel flag is set. Pends forever if the sender is gone.
pub(crate) async fn cancelled(cancel: &mut watch::Receiver<bool>) {
    if cancel.wait_for(|flag| *flag).await.is_err() {
        std::future::pending::<()>().await;
    }
}
