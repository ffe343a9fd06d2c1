use crate::domain::app::App;
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
    /// `/cancel` drops the lookup in flight. Cancelling with nothing in
    /// flight is fine and says so.
    pub async fn cancel_command<I: ChatInteraction>(&self, interaction: &I) {
        let session = self.sessions.entry(interaction.user_id()).await;
        let mut session = session.lock().await;

        let message = if session.is_idle() {
            String::from("Nothing to cancel. Send /start to begin a post.")
        } else {
            session.reset();
            String::from("❌ Cancelled. Send /start when you want to try again.")
        };

        if let Err(why) = interaction.reply(message).await {
            log::error!("couldn't send cancel message: {why:?}");
        }
    }
}
