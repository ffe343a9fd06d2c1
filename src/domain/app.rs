use crate::domain::game::{Game, Presentation};
use crate::domain::session::SessionStore;
use crate::ports::outbound::assets::AssetSource;
use crate::ports::outbound::publisher::Broadcaster;
use crate::ports::outbound::stats::StatsGateway;

pub struct App<SG, AS, B> {
    pub stats: SG,
    pub assets: AS,
    pub broadcaster: B,
    pub sessions: SessionStore,
    games: Vec<Game>,
    text_games: Vec<Game>,
}

impl<SG, AS, B> App<SG, AS, B>
where
    SG: StatsGateway + Send + Sync,
    AS: AssetSource + Send + Sync,
    B: Broadcaster + Send + Sync,
{
    pub fn new(
        stats: SG,
        assets: AS,
        broadcaster: B,
        games: Vec<Game>,
        text_games: Vec<Game>,
    ) -> Self {
        Self {
            stats,
            assets,
            broadcaster,
            sessions: SessionStore::new(),
            games,
            text_games,
        }
    }

    #[must_use]
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// With exactly one game enabled the picker is skipped and every idle
    /// message is read as a tag for that game.
    #[must_use]
    pub fn single_game(&self) -> Option<Game> {
        match self.games[..] {
            [only] => Some(only),
            _ => None,
        }
    }

    #[must_use]
    pub fn game_enabled(&self, game: Game) -> bool {
        self.games.contains(&game)
    }

    #[must_use]
    pub fn presentation(&self, game: Game) -> Presentation {
        if self.text_games.contains(&game) {
            Presentation::Text
        } else {
            Presentation::Card
        }
    }
}
