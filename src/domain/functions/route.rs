use crate::domain::app::App;
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
    /// Routes a plain message by where the sender's session stands. The
    /// session entry stays locked for the whole step, so two messages from
    /// one user can never interleave.
    pub async fn handle_text<I: ChatInteraction>(&self, interaction: &I, text: &str) {
        let session = self.sessions.entry(interaction.user_id()).await;
        let mut session = session.lock().await;

        match std::mem::take(&mut session.state) {
            SessionState::Idle => {
                if let Some(game) = self.single_game() {
                    self.run_lookup(interaction, &mut session, game, text).await;
                } else {
                    session.state = SessionState::AwaitingGame;
                    self.prompt_for_game(interaction).await;
                }
            }
            SessionState::AwaitingGame => {
                session.state = SessionState::AwaitingGame;
                self.prompt_for_game(interaction).await;
            }
            SessionState::AwaitingTag { game } => {
                self.run_lookup(interaction, &mut session, game, text).await;
            }
            SessionState::AwaitingDescription {
                game,
                tag,
                stats,
                asset,
            } => {
                self.run_describe(interaction, &mut session, game, tag, stats, asset, text)
                    .await;
            }
        }
    }

    async fn prompt_for_game<I: ChatInteraction>(&self, interaction: &I) {
        let message = String::from("🎮 Pick a game with the buttons first:");
        if let Err(why) = interaction
            .present_games(message, self.games().to_vec())
            .await
        {
            log::error!("couldn't send game picker: {why:?}");
        }
    }
}
