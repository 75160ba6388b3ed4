use crate::domain::ports::FailureSink;
use crate::utils::error::EmbedError;

/// Routes deferred failures to the log, the library's stand-in for the
/// page's global error handling.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl FailureSink for TracingSink {
    fn report(&self, failure: EmbedError) {
        tracing::error!("❌ {}", failure);
    }
}
