use crate::domain::card::Post;
use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, derive(Clone))]
#[derive(Debug, Error)]
#[error("An error occurred while publishing to the channel")]
pub struct PublishError(String);

impl PublishError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BroadcastOutcome {
    Delivered,
    /// No channel is configured, so there was nothing to do.
    Skipped,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Broadcaster {
    async fn publish(&self, post: Post) -> Result<BroadcastOutcome, PublishError>;
}
