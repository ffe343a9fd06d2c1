use crate::domain::card::CardAsset;
use crate::domain::game::Game;
use crate::domain::tag::PlayerTag;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Looks for a ready-made card image. `None` means no provider could serve
/// one; that is an ordinary outcome, not an error, and callers fall back to
/// the built-in renderer.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AssetSource {
    async fn resolve(&self, game: Game, tag: PlayerTag) -> Option<CardAsset>;
}
