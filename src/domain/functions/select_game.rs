use crate::domain::app::App;
use crate::domain::game::Game;
use crate::domain::session::SessionState;
use crate::ports::inbound::client::ChatInteraction;
use crate::ports::outbound::assets::AssetSource;
use crate::ports::outbound::publisher::Broadcaster;
use crate::ports::outbound::stats::StatsGateway;

impl<SG, AS, B> App<SG, AS, B>
where
    SG: StatsGateway + Send + Sync,
    AS: AssetSource + Send + Sync,
    B: Broadcaster + Send + Sync,
{
    /// A press on one of the game picker buttons. The payload is the game
    /// id; stale buttons from old menus can carry anything.
    pub async fn select_game_command<I: ChatInteraction>(&self, interaction: &I, game_id: &str) {
        let Some(game) = Game::from_id(game_id).filter(|game| self.game_enabled(*game)) else {
            if let Err(why) = interaction
                .reply(String::from("That game isn't available here."))
                .await
            {
                log::error!("couldn't send unknown game message: {why:?}");
            }
            return;
        };

        let session = self.sessions.entry(interaction.user_id()).await;
        let mut session = session.lock().await;

        let message = match session.state {
            SessionState::Idle | SessionState::AwaitingGame => {
                session.state = SessionState::AwaitingTag { game };
                format!("🎮 {game} it is. Now send the player tag (like #2GPQY9RJL).")
            }
            // The game is fixed once chosen; switching means starting over.
            SessionState::AwaitingTag { .. } | SessionState::AwaitingDescription { .. } => {
                String::from("A lookup is already in progress. /cancel it first to switch games.")
            }
        };

        if let Err(why) = interaction.reply(message).await {
            log::error!("couldn't send game selection message: {why:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::inbound::client::MockChatInteraction;
    use crate::ports::outbound::assets::MockAssetSource;
    use crate::ports::outbound::publisher::MockBroadcaster;
    use crate::ports::outbound::stats::MockStatsGateway;

    fn test_app() -> App<MockStatsGateway, MockAssetSource, MockBroadcaster> {
        App::new(
            MockStatsGateway::new(),
            MockAssetSource::new(),
            MockBroadcaster::new(),
            vec![Game::BrawlStars, Game::ClashRoyale],
            vec![],
        )
    }

    #[tokio::test]
    async fn test_selecting_a_game_moves_to_awaiting_tag() {
        let app = test_app();
        app.sessions.entry(7).await.lock().await.state = SessionState::AwaitingGame;

        let mut interaction = MockChatInteraction::new();
        interaction.expect_user_id().return_const(7u64);
        interaction
            .expect_reply()
            .times(1)
            .withf(|message: &String| message.contains("Brawl Stars"))
            .returning(|_| Ok(()));

        app.select_game_command(&interaction, "brawlstars").await;

        assert_eq!(
            app.sessions.entry(7).await.lock().await.state,
            SessionState::AwaitingTag {
                game: Game::BrawlStars
            }
        );
    }

    #[tokio::test]
    async fn test_selecting_from_idle_also_works() {
        let app = test_app();

        let mut interaction = MockChatInteraction::new();
        interaction.expect_user_id().return_const(7u64);
        interaction.expect_reply().times(1).returning(|_| Ok(()));

        app.select_game_command(&interaction, "clashroyale").await;

        assert_eq!(
            app.sessions.entry(7).await.lock().await.state,
            SessionState::AwaitingTag {
                game: Game::ClashRoyale
            }
        );
    }

    #[tokio::test]
    async fn test_unknown_game_id_changes_nothing() {
        let app = test_app();
        app.sessions.entry(7).await.lock().await.state = SessionState::AwaitingGame;

        let mut interaction = MockChatInteraction::new();
        interaction
            .expect_reply()
            .times(1)
            .withf(|message: &String| message.contains("isn't available"))
            .returning(|_| Ok(()));

        app.select_game_command(&interaction, "fortnite").await;

        assert_eq!(
            app.sessions.entry(7).await.lock().await.state,
            SessionState::AwaitingGame
        );
    }

    #[tokio::test]
    async fn test_disabled_game_is_rejected() {
        let app = test_app();

        let mut interaction = MockChatInteraction::new();
        interaction
            .expect_reply()
            .times(1)
            .withf(|message: &String| message.contains("isn't available"))
            .returning(|_| Ok(()));

        app.select_game_command(&interaction, "clashofclans").await;

        assert!(app.sessions.entry(7).await.lock().await.is_idle());
    }

    #[tokio::test]
    async fn test_game_cannot_change_mid_lookup() {
        let app = test_app();
        app.sessions.entry(7).await.lock().await.state = SessionState::AwaitingTag {
            game: Game::BrawlStars,
        };

        let mut interaction = MockChatInteraction::new();
        interaction.expect_user_id().return_const(7u64);
        interaction
            .expect_reply()
            .times(1)
            .withf(|message: &String| message.contains("/cancel"))
            .returning(|_| Ok(()));

        app.select_game_command(&interaction, "clashroyale").await;

        assert_eq!(
            app.sessions.entry(7).await.lock().await.state,
            SessionState::AwaitingTag {
                game: Game::BrawlStars
            }
        );
    }
}
