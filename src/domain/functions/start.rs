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
    /// `/start` throws away whatever was in flight and begins a new post.
    pub async fn start_command<I: ChatInteraction>(&self, interaction: &I) {
        let session = self.sessions.entry(interaction.user_id()).await;
        let mut session = session.lock().await;
        session.reset();

        if let Some(game) = self.single_game() {
            session.state = SessionState::AwaitingTag { game };

            let message = format!(
                "👋 Hi! I turn player tags into stat cards.\n\nSend a {game} player tag like #2GPQY9RJL to get started."
            );
            if let Err(why) = interaction.reply(message).await {
                log::error!("couldn't send start message: {why:?}");
            }
        } else {
            session.state = SessionState::AwaitingGame;

            let message = String::from(
                "👋 Hi! I turn player tags into stat cards.\n\n🎮 Which game is your player in?",
            );
            if let Err(why) = interaction
                .present_games(message, self.games().to_vec())
                .await
            {
                log::error!("couldn't send game picker: {why:?}");
            }
        }
    }
}
