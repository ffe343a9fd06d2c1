use crate::domain::app::App;
use crate::domain::card::CardAsset;
use crate::domain::format;
use crate::domain::functions::respond;
use crate::domain::game::{Game, Presentation};
use crate::domain::render;
use crate::domain::session::{Session, SessionState};
use crate::domain::stats::PlayerStats;
use crate::domain::tag::PlayerTag;
use crate::ports::inbound::client::ChatInteraction;
use crate::ports::outbound::assets::AssetSource;
use crate::ports::outbound::publisher::Broadcaster;
use crate::ports::outbound::stats::{StatsError, StatsGateway};

impl<SG, AS, B> App<SG, AS, B>
where
    SG: StatsGateway + Send + Sync,
    AS: AssetSource + Send + Sync,
    B: Broadcaster + Send + Sync,
{
    /// The tag step: validate the input, fetch the profile, settle on a card
    /// image, then ask for the description. On recoverable failures the
    /// session stays on this step so the user can just send another tag.
    pub(crate) async fn run_lookup<I: ChatInteraction>(
        &self,
        interaction: &I,
        session: &mut Session,
        game: Game,
        input: &str,
    ) {
        let Some(tag) = PlayerTag::parse(input) else {
            session.state = SessionState::AwaitingTag { game };
            let message = String::from(
                "That doesn't look like a player tag. Tags are 3 to 15 characters from 0289PYLQGRJCUV, like #2GPQY9RJL.",
            );
            if let Err(why) = interaction.reply(message).await {
                log::error!("couldn't send invalid tag message: {why:?}");
            }
            return;
        };

        let notice = match interaction.notify(format!("⏳ Looking up {tag}...")).await {
            Ok(id) => Some(id),
            Err(why) => {
                log::warn!("couldn't send progress message: {why:?}");
                None
            }
        };

        match self.stats.fetch_player(game, tag.clone()).await {
            Ok(stats) => {
                let asset = match self.presentation(game) {
                    Presentation::Card => Some(self.card_asset(game, &tag, &stats).await),
                    Presentation::Text => None,
                };

                let message = format!(
                    "✅ Found {name} with {trophies} trophies!\n\n📝 Now send a short description for the post, or /cancel.",
                    name = format::display_name(&stats),
                    trophies = format::group_thousands(u64::from(stats.trophies())),
                );
                session.state = SessionState::AwaitingDescription {
                    game,
                    tag,
                    stats,
                    asset,
                };
                respond(interaction, notice, message).await;
            }
            Err(StatsError::NotFound) => {
                session.state = SessionState::AwaitingTag { game };
                let message =
                    format!("❌ No {game} player goes by {tag}. Check the tag and send it again.");
                respond(interaction, notice, message).await;
            }
            Err(StatsError::Unauthorized) => {
                // Nothing the user sends can fix a bad token, so start over.
                session.reset();
                log::error!("stats api rejected our credentials for {game}");
                let message = String::from(
                    "🔒 The stats service turned us away. The operator has to sort this out; please try again later.",
                );
                respond(interaction, notice, message).await;
            }
            Err(why) => {
                session.state = SessionState::AwaitingTag { game };
                log::warn!("stats lookup for {tag} failed: {why:?}");
                let message = String::from(
                    "⚠️ The stats service is having a moment. Send the tag again in a little while.",
                );
                respond(interaction, notice, message).await;
            }
        }
    }

    async fn card_asset(&self, game: Game, tag: &PlayerTag, stats: &PlayerStats) -> CardAsset {
        match self.assets.resolve(game, tag.clone()).await {
            Some(asset) => {
                log::info!("card for {tag} served by {}", asset.origin);
                asset
            }
            None => {
                log::info!("no provider had a card for {tag}, rendering one");
                CardAsset::rendered(render::render_card(stats, tag))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::AssetOrigin;
    use crate::domain::stats::BrawlStats;
    use crate::ports::inbound::client::MockChatInteraction;
    use crate::ports::outbound::assets::MockAssetSource;
    use crate::ports::outbound::publisher::MockBroadcaster;
    use crate::ports::outbound::stats::MockStatsGateway;

    fn test_app(
        stats: MockStatsGateway,
        assets: MockAssetSource,
    ) -> App<MockStatsGateway, MockAssetSource, MockBroadcaster> {
        App::new(
            stats,
            assets,
            MockBroadcaster::new(),
            vec![Game::BrawlStars, Game::ClashOfClans],
            vec![Game::ClashOfClans],
        )
    }

    fn awaiting_tag(game: Game) -> Session {
        Session {
            state: SessionState::AwaitingTag { game },
        }
    }

    fn hydra() -> PlayerStats {
        PlayerStats::BrawlStars(BrawlStats {
            name: String::from("Hydra"),
            trophies: 31000,
            ..BrawlStats::default()
        })
    }

    #[tokio::test]
    async fn test_bad_tag_never_reaches_the_stats_api() {
        let app = test_app(MockStatsGateway::new(), MockAssetSource::new());
        let mut session = awaiting_tag(Game::BrawlStars);

        let mut interaction = MockChatInteraction::new();
        interaction
            .expect_reply()
            .times(1)
            .withf(|message: &String| message.contains("doesn't look like a player tag"))
            .returning(|_| Ok(()));

        app.run_lookup(&interaction, &mut session, Game::BrawlStars, "not-a-tag")
            .await;

        assert_eq!(
            session.state,
            SessionState::AwaitingTag {
                game: Game::BrawlStars
            }
        );
    }

    #[tokio::test]
    async fn test_unknown_player_keeps_the_tag_step() {
        let mut stats = MockStatsGateway::new();
        stats
            .expect_fetch_player()
            .times(1)
            .returning(|_, _| Err(StatsError::NotFound));

        let app = test_app(stats, MockAssetSource::new());
        let mut session = awaiting_tag(Game::BrawlStars);

        let mut interaction = MockChatInteraction::new();
        interaction.expect_notify().times(1).returning(|_| Ok(11));
        interaction
            .expect_edit()
            .times(1)
            .withf(|notice, message| *notice == 11 && message.contains("❌ No Brawl Stars player"))
            .returning(|_, _| Ok(()));

        app.run_lookup(&interaction, &mut session, Game::BrawlStars, "#2GPQY9RJL")
            .await;

        assert_eq!(
            session.state,
            SessionState::AwaitingTag {
                game: Game::BrawlStars
            }
        );
    }

    #[tokio::test]
    async fn test_rejected_credentials_reset_the_session() {
        let mut stats = MockStatsGateway::new();
        stats
            .expect_fetch_player()
            .times(1)
            .returning(|_, _| Err(StatsError::Unauthorized));

        let app = test_app(stats, MockAssetSource::new());
        let mut session = awaiting_tag(Game::BrawlStars);

        let mut interaction = MockChatInteraction::new();
        interaction.expect_notify().times(1).returning(|_| Ok(11));
        interaction
            .expect_edit()
            .times(1)
            .withf(|_, message: &String| message.contains("🔒"))
            .returning(|_, _| Ok(()));

        app.run_lookup(&interaction, &mut session, Game::BrawlStars, "#2GPQY9RJL")
            .await;

        assert!(session.is_idle());
    }

    #[tokio::test]
    async fn test_transient_failure_lets_the_user_retry() {
        let mut stats = MockStatsGateway::new();
        stats
            .expect_fetch_player()
            .times(1)
            .returning(|_, _| Err(StatsError::Transport(String::from("timed out"))));

        let app = test_app(stats, MockAssetSource::new());
        let mut session = awaiting_tag(Game::BrawlStars);

        let mut interaction = MockChatInteraction::new();
        interaction.expect_notify().times(1).returning(|_| Ok(11));
        interaction
            .expect_edit()
            .times(1)
            .withf(|_, message: &String| message.contains("⚠️"))
            .returning(|_, _| Ok(()));

        app.run_lookup(&interaction, &mut session, Game::BrawlStars, "#2GPQY9RJL")
            .await;

        assert_eq!(
            session.state,
            SessionState::AwaitingTag {
                game: Game::BrawlStars
            }
        );
    }

    #[tokio::test]
    async fn test_found_player_with_provider_card() {
        let mut stats = MockStatsGateway::new();
        stats
            .expect_fetch_player()
            .times(1)
            .withf(|game, tag| *game == Game::BrawlStars && tag.as_str() == "#2GPQY9RJL")
            .returning(|_, _| Ok(hydra()));

        let mut assets = MockAssetSource::new();
        assets
            .expect_resolve()
            .times(1)
            .withf(|game, tag| *game == Game::BrawlStars && tag.as_str() == "#2GPQY9RJL")
            .returning(|_, _| {
                Some(CardAsset::fetched(
                    vec![1, 2, 3],
                    String::from("image/png"),
                    String::from("https://sltbot.com/api/image/2GPQY9RJL"),
                ))
            });

        let app = test_app(stats, assets);
        let mut session = awaiting_tag(Game::BrawlStars);

        let mut interaction = MockChatInteraction::new();
        interaction.expect_notify().times(1).returning(|_| Ok(11));
        interaction
            .expect_edit()
            .times(1)
            .withf(|_, message: &String| message.contains("✅ Found Hydra with 31,000 trophies"))
            .returning(|_, _| Ok(()));

        // Input is scruffy on purpose; the canonical tag must reach the api.
        app.run_lookup(&interaction, &mut session, Game::BrawlStars, " 2gpqy9rjl ")
            .await;

        let SessionState::AwaitingDescription { asset, .. } = session.state else {
            panic!("Wrong state");
        };
        assert_eq!(
            asset.unwrap().origin,
            AssetOrigin::Provider(String::from("https://sltbot.com/api/image/2GPQY9RJL"))
        );
    }

    #[tokio::test]
    async fn test_found_player_without_provider_renders_a_card() {
        let mut stats = MockStatsGateway::new();
        stats
            .expect_fetch_player()
            .times(1)
            .returning(|_, _| Ok(hydra()));

        let mut assets = MockAssetSource::new();
        assets.expect_resolve().times(1).returning(|_, _| None);

        let app = test_app(stats, assets);
        let mut session = awaiting_tag(Game::BrawlStars);

        let mut interaction = MockChatInteraction::new();
        interaction.expect_notify().times(1).returning(|_| Ok(11));
        interaction.expect_edit().times(1).returning(|_, _| Ok(()));

        app.run_lookup(&interaction, &mut session, Game::BrawlStars, "#2GPQY9RJL")
            .await;

        let SessionState::AwaitingDescription { asset, .. } = session.state else {
            panic!("Wrong state");
        };
        let asset = asset.unwrap();
        assert_eq!(asset.origin, AssetOrigin::Rendered);
        assert!(!asset.bytes.is_empty());
    }

    #[tokio::test]
    async fn test_text_games_skip_the_asset_lookup() {
        let mut stats = MockStatsGateway::new();
        stats.expect_fetch_player().times(1).returning(|_, _| {
            Ok(PlayerStats::ClashOfClans(
                crate::domain::stats::ClashStats::default(),
            ))
        });

        // No expectation on resolve: touching it would fail the test.
        let app = test_app(stats, MockAssetSource::new());
        let mut session = awaiting_tag(Game::ClashOfClans);

        let mut interaction = MockChatInteraction::new();
        interaction.expect_notify().times(1).returning(|_| Ok(11));
        interaction.expect_edit().times(1).returning(|_, _| Ok(()));

        app.run_lookup(&interaction, &mut session, Game::ClashOfClans, "#2PP")
            .await;

        let SessionState::AwaitingDescription { asset, .. } = session.state else {
            panic!("Wrong state");
        };
        assert_eq!(asset, None);
    }

    #[tokio::test]
    async fn test_failed_progress_message_falls_back_to_replies() {
        let mut stats = MockStatsGateway::new();
        stats
            .expect_fetch_player()
            .times(1)
            .returning(|_, _| Err(StatsError::NotFound));

        let app = test_app(stats, MockAssetSource::new());
        let mut session = awaiting_tag(Game::BrawlStars);

        let mut interaction = MockChatInteraction::new();
        interaction
            .expect_notify()
            .times(1)
            .returning(|_| Err(crate::ports::inbound::client::ChatInteractionError::new(
                String::from("flood limit"),
            )));
        interaction.expect_reply().times(1).returning(|_| Ok(()));

        app.run_lookup(&interaction, &mut session, Game::BrawlStars, "#2GPQY9RJL")
            .await;
    }
}
