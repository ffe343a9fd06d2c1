use std::fmt::{self, Display, Formatter};

/// Every game the bot can look players up in.
pub const ALL_GAMES: [Game; 3] = [Game::BrawlStars, Game::ClashRoyale, Game::ClashOfClans];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Game {
    BrawlStars,
    ClashRoyale,
    ClashOfClans,
}

impl Game {
    /// Stable identifier used in config values and callback payloads.
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            Self::BrawlStars => "brawlstars",
            Self::ClashRoyale => "clashroyale",
            Self::ClashOfClans => "clashofclans",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "brawlstars" => Some(Self::BrawlStars),
            "clashroyale" => Some(Self::ClashRoyale),
            "clashofclans" => Some(Self::ClashOfClans),
            _ => None,
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::BrawlStars => "Brawl Stars",
            Self::ClashRoyale => "Clash Royale",
            Self::ClashOfClans => "Clash of Clans",
        }
    }

    #[must_use]
    pub fn token_env(&self) -> &'static str {
        match self {
            Self::BrawlStars => "BRAWL_STARS_TOKEN",
            Self::ClashRoyale => "CLASH_ROYALE_TOKEN",
            Self::ClashOfClans => "CLASH_OF_CLANS_TOKEN",
        }
    }

    #[must_use]
    pub fn api_base_env(&self) -> &'static str {
        match self {
            Self::BrawlStars => "BRAWL_STARS_API_BASE",
            Self::ClashRoyale => "CLASH_ROYALE_API_BASE",
            Self::ClashOfClans => "CLASH_OF_CLANS_API_BASE",
        }
    }

    #[must_use]
    pub fn default_api_base(&self) -> &'static str {
        match self {
            Self::BrawlStars => "https://bsproxy.royaleapi.dev/v1",
            Self::ClashRoyale => "https://api.clashroyale.com/v1",
            Self::ClashOfClans => "https://api.clashofclans.com/v1",
        }
    }

    /// Community card providers tried in order before falling back to the
    /// built-in renderer. `{tag}` is replaced with the bare tag.
    #[must_use]
    pub fn provider_templates(&self) -> &'static [&'static str] {
        match self {
            Self::BrawlStars => &[
                "https://sltbot.com/api/image/{tag}",
                "https://sltbot.com/api/player/{tag}/image",
                "https://sltbot.com/api/rank/{tag}",
                "https://brawltracker.com/api/image/rank/{tag}",
                "https://brawlbot.xyz/api/image/rank/{tag}",
                "https://brawlbot.xyz/api/player/{tag}/image",
            ],
            Self::ClashRoyale | Self::ClashOfClans => &[],
        }
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// How a finished lookup is turned into a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Card,
    Text,
}
