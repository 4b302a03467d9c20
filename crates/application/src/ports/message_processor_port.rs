//! Processing collaborator port
//!
//! The processor turns a validated inbound message into a reply outcome.
//! It may call out to document analysis, storage, or AI services; none of
//! that is visible here.

use async_trait::async_trait;
use domain::{InboundMessage, ProcessingResult};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessageProcessorPort: Send + Sync {
    /// Process one inbound message
    ///
    /// An `Err` means the processor itself failed; a processed-but-rejected
    /// message is an `Ok` with `success: false`.
    async fn process(&self, message: &InboundMessage) -> Result<ProcessingResult, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn MessageProcessorPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn MessageProcessorPort>();
    }
}
