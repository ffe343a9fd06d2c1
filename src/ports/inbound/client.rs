use crate::domain::card::Post;
use crate::domain::game::Game;
use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, derive(Clone))]
#[derive(Debug, Error)]
#[error("An error occurred while talking to the chat")]
pub struct ChatInteractionError(String);

impl ChatInteractionError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

/// Platform handle of a previously sent message, for editing in place.
pub type NoticeId = i32;

/// One user's side of the conversation: who they are and how to talk back
/// to them in their chat.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChatInteraction {
    fn user_id(&self) -> u64;
    /// Display handle for attribution lines, `@username` when one exists.
    fn submitter(&self) -> String;
    async fn reply(&self, message: String) -> Result<(), ChatInteractionError>;
    /// Sends a holding message that can later be rewritten with `edit`.
    async fn notify(&self, message: String) -> Result<NoticeId, ChatInteractionError>;
    async fn edit(&self, notice: NoticeId, message: String) -> Result<(), ChatInteractionError>;
    /// Shows `message` with a game picker attached.
    async fn present_games(
        &self,
        message: String,
        games: Vec<Game>,
    ) -> Result<(), ChatInteractionError>;
    /// Sends the finished post back to the submitter.
    async fn deliver(&self, post: Post) -> Result<(), ChatInteractionError>;
}

#[async_trait]
pub trait Client {
    async fn run(&mut self);
}
