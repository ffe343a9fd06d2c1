use crate::domain::app::App;
use crate::domain::card::{CardAsset, Post};
use crate::domain::format;
use crate::domain::game::{Game, Presentation};
use crate::domain::render;
use crate::domain::session::{Session, SessionState};
use crate::domain::stats::PlayerStats;
use crate::domain::tag::PlayerTag;
use crate::ports::inbound::client::ChatInteraction;
use crate::ports::outbound::assets::AssetSource;
use crate::ports::outbound::publisher::{BroadcastOutcome, Broadcaster};
use crate::ports::outbound::stats::StatsGateway;

impl<SG, AS, B> App<SG, AS, B>
where
    SG: StatsGateway + Send + Sync,
    AS: AssetSource + Send + Sync,
    B: Broadcaster + Send + Sync,
{
    /// The final step: attach the description, send the post to the
    /// submitter and broadcast it. The submitter's copy and the broadcast
    /// are independent; one failing never takes the other with it.
    #[allow(clippy::too_many_arguments)]
    pub(crate) async fn run_describe<I: ChatInteraction>(
        &self,
        interaction: &I,
        session: &mut Session,
        game: Game,
        tag: PlayerTag,
        stats: PlayerStats,
        asset: Option<CardAsset>,
        input: &str,
    ) {
        let description = input.trim();
        if description.is_empty() {
            session.state = SessionState::AwaitingDescription {
                game,
                tag,
                stats,
                asset,
            };
            let message =
                String::from("The description can't be empty. Send a line of text, or /cancel.");
            if let Err(why) = interaction.reply(message).await {
                log::error!("couldn't send empty description message: {why:?}");
            }
            return;
        }

        let submitter = interaction.submitter();
        let post = match self.presentation(game) {
            Presentation::Card => {
                let asset = asset
                    .unwrap_or_else(|| CardAsset::rendered(render::render_card(&stats, &tag)));
                Post::Photo {
                    caption: format::caption(&stats, &tag, description, &submitter),
                    file_name: format::photo_file_name(&tag),
                    asset,
                }
            }
            Presentation::Text => Post::Text {
                body: format::text_post(&stats, &tag, description, &submitter),
            },
        };

        if let Err(why) = interaction.deliver(post.clone()).await {
            log::error!("couldn't deliver the post to the submitter: {why:?}");
        }

        match self.broadcaster.publish(post).await {
            Ok(BroadcastOutcome::Delivered) => {
                if let Err(why) = interaction
                    .reply(String::from("✅ Posted to the channel!"))
                    .await
                {
                    log::error!("couldn't send broadcast confirmation: {why:?}");
                }
            }
            Ok(BroadcastOutcome::Skipped) => {}
            Err(why) => {
                log::warn!("broadcast failed: {why:?}");
                if let Err(why) = interaction
                    .reply(String::from("⚠️ Couldn't post to the channel this time."))
                    .await
                {
                    log::error!("couldn't send broadcast warning: {why:?}");
                }
            }
        }

        session.reset();
    }
}
