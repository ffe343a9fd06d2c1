pub mod cancel;
pub mod describe;
pub mod help;
pub mod lookup;
pub mod route;
pub mod select_game;
pub mod start;

use crate::ports::inbound::client::{ChatInteraction, NoticeId};

/// Rewrites the progress message when there is one, otherwise sends a fresh
/// reply. Falls back to a fresh reply when the edit is refused.
pub(crate) async fn respond<I: ChatInteraction>(
    interaction: &I,
    notice: Option<NoticeId>,
    message: String,
) {
    if let Some(id) = notice {
        match interaction.edit(id, message.clone()).await {
            Ok(()) => return,
            Err(why) => log::warn!("couldn't edit progress message: {why:?}"),
        }
    }

    if let Err(why) = interaction.reply(message).await {
        log::error!("couldn't send reply: {why:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::inbound::client::{ChatInteractionError, MockChatInteraction};
    use mockall::predicate::*;

    #[tokio::test]
    async fn test_respond_edits_when_a_notice_exists() {
        let mut interaction = MockChatInteraction::new();
        interaction
            .expect_edit()
            .times(1)
            .with(eq(7), eq(String::from("done")))
            .returning(|_, _| Ok(()));

        respond(&interaction, Some(7), String::from("done")).await;
    }

    #[tokio::test]
    async fn test_respond_replies_without_a_notice() {
        let mut interaction = MockChatInteraction::new();
        interaction
            .expect_reply()
            .times(1)
            .with(eq(String::from("done")))
            .returning(|_| Ok(()));

        respond(&interaction, None, String::from("done")).await;
    }

    #[tokio::test]
    async fn test_respond_falls_back_to_reply_when_edit_fails() {
        let mut interaction = MockChatInteraction::new();
        interaction
            .expect_edit()
            .times(1)
            .returning(|_, _| Err(ChatInteractionError::new(String::from("too old"))));
        interaction
            .expect_reply()
            .times(1)
            .with(eq(String::from("done")))
            .returning(|_| Ok(()));

        respond(&interaction, Some(7), String::from("done")).await;
    }
}
