use crate::domain::game::Game;
use crate::domain::stats::PlayerStats;
use crate::domain::tag::PlayerTag;
use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, derive(Clone))]
#[derive(Debug, Error)]
pub enum StatsError {
    /// No player carries this tag. The caller should ask for another tag.
    #[error("player not found")]
    NotFound,
    /// The API rejected our token. Only the operator can fix this.
    #[error("stats api rejected our credentials")]
    Unauthorized,
    #[error("stats api answered with status {0}")]
    Upstream(u16),
    #[error("could not reach the stats api: {0}")]
    Transport(String),
    #[error("could not decode the stats payload: {0}")]
    Decode(String),
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait StatsGateway {
    async fn fetch_player(&self, game: Game, tag: PlayerTag) -> Result<PlayerStats, StatsError>;
}
