use crate::ports::inbound::client::ChatInteraction;

pub const HELP_TEXT: &str = "📖 How this works:\n\n1. /start and pick a game\n2. Send the player tag, like #2GPQY9RJL\n3. Send a one-line description for the post\n\nI fetch the stats, build the card and post it to the channel. /cancel drops the current lookup.";

pub async fn run<I: ChatInteraction>(interaction: &I, text: &str) {
    if let Err(why) = interaction.reply(text.into()).await {
        log::error!("couldn't send help message: {why:?}");
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::inbound::client::{ChatInteractionError, MockChatInteraction};
    use mockall::predicate::*;

    #[tokio::test]
    async fn test_help_replies_with_the_given_text() {
        let mut interaction = MockChatInteraction::new();
        interaction
            .expect_reply()
            .times(1)
            .with(eq(String::from(HELP_TEXT)))
            .returning(|_| Ok(()));

        run(&interaction, HELP_TEXT).await;
    }

    #[tokio::test]
    async fn test_help_survives_a_failed_reply() {
        let mut interaction = MockChatInteraction::new();
        interaction
            .expect_reply()
            .times(1)
            .returning(|_| Err(ChatInteractionError::new(String::from("network down"))));

        run(&interaction, HELP_TEXT).await;
    }
}
