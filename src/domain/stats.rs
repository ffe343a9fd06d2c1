use crate::domain::game::Game;
use serde::Deserialize;

/// A named group a player belongs to (club, clan or arena). The APIs send
/// richer objects; only the name is ever shown.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Affiliation {
    pub name: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Brawler {
    pub name: String,
    pub power: u32,
    pub rank: u32,
    pub trophies: u32,
    pub highest_trophies: u32,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrawlStats {
    pub name: String,
    pub tag: String,
    pub trophies: u32,
    pub highest_trophies: u32,
    pub exp_level: u32,
    #[serde(rename = "3vs3Victories")]
    pub team_victories: u32,
    pub solo_victories: u32,
    pub duo_victories: u32,
    pub club: Option<Affiliation>,
    pub brawlers: Vec<Brawler>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoyaleCard {
    pub name: String,
    pub level: u32,
    pub max_level: u32,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoyaleStats {
    pub name: String,
    pub tag: String,
    pub trophies: u32,
    pub best_trophies: u32,
    pub exp_level: u32,
    pub wins: u32,
    pub losses: u32,
    pub battle_count: u32,
    pub arena: Option<Affiliation>,
    pub clan: Option<Affiliation>,
    pub cards: Vec<RoyaleCard>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hero {
    pub name: String,
    pub level: u32,
    pub max_level: u32,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClashStats {
    pub name: String,
    pub tag: String,
    pub town_hall_level: u32,
    pub builder_hall_level: u32,
    pub exp_level: u32,
    pub trophies: u32,
    pub best_trophies: u32,
    pub war_stars: u32,
    pub attack_wins: u32,
    pub defense_wins: u32,
    pub clan: Option<Affiliation>,
    pub heroes: Vec<Hero>,
}

/// A decoded player profile, tagged with the game it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerStats {
    BrawlStars(BrawlStats),
    ClashRoyale(RoyaleStats),
    ClashOfClans(ClashStats),
}

impl PlayerStats {
    /// Decodes a stats API response body for the given game. Fields the API
    /// left out fall back to zero or empty rather than failing the decode.
    pub fn decode(game: Game, body: &[u8]) -> Result<Self, serde_json::Error> {
        Ok(match game {
            Game::BrawlStars => Self::BrawlStars(serde_json::from_slice(body)?),
            Game::ClashRoyale => Self::ClashRoyale(serde_json::from_slice(body)?),
            Game::ClashOfClans => Self::ClashOfClans(serde_json::from_slice(body)?),
        })
    }

    #[must_use]
    pub fn game(&self) -> Game {
        match self {
            Self::BrawlStars(_) => Game::BrawlStars,
            Self::ClashRoyale(_) => Game::ClashRoyale,
            Self::ClashOfClans(_) => Game::ClashOfClans,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::BrawlStars(stats) => &stats.name,
            Self::ClashRoyale(stats) => &stats.name,
            Self::ClashOfClans(stats) => &stats.name,
        }
    }

    #[must_use]
    pub fn trophies(&self) -> u32 {
        match self {
            Self::BrawlStars(stats) => stats.trophies,
            Self::ClashRoyale(stats) => stats.trophies,
            Self::ClashOfClans(stats) => stats.trophies,
        }
    }

    #[must_use]
    pub fn best_trophies(&self) -> u32 {
        match self {
            Self::BrawlStars(stats) => stats.highest_trophies,
            Self::ClashRoyale(stats) => stats.best_trophies,
            Self::ClashOfClans(stats) => stats.best_trophies,
        }
    }
}
