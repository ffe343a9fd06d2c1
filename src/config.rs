use std::collections::HashMap;
use std::env;

use thiserror::Error;

use crate::domain::game::{Game, ALL_GAMES};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} wasn't in the environment")]
    MissingVar(&'static str),
    #[error("{0:?} isn't a game this bot knows")]
    UnknownGame(String),
    #[error("STATCARD_GAMES names no games")]
    NoGames,
}

/// Where one game's player API lives and how to authenticate against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameApi {
    pub base: String,
    pub token: String,
}

/// Everything the bot needs from the environment, gathered up front so a
/// missing variable fails the start instead of the first lookup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub channel: Option<String>,
    pub games: Vec<Game>,
    pub text_games: Vec<Game>,
    pub apis: HashMap<Game, GameApi>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bot_token = required(&lookup, "TELOXIDE_TOKEN")?;
        let channel = non_empty(lookup("CHANNEL_ID"));

        let games = match lookup("STATCARD_GAMES") {
            Some(listed) => parse_games(&listed)?,
            None => ALL_GAMES.to_vec(),
        };
        if games.is_empty() {
            return Err(ConfigError::NoGames);
        }

        // Unset means the usual text-only game; set-but-empty switches the
        // text presentation off entirely.
        let text_games = match lookup("STATCARD_TEXT_GAMES") {
            Some(listed) => parse_games(&listed)?,
            None => vec![Game::ClashOfClans],
        };

        let mut apis = HashMap::new();
        for game in &games {
            let token = required(&lookup, game.token_env())?;
            let base = non_empty(lookup(game.api_base_env()))
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| game.default_api_base().to_string());
            apis.insert(*game, GameApi { base, token });
        }

        Ok(Self {
            bot_token,
            channel,
            games,
            text_games,
            apis,
        })
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    non_empty(lookup(name)).ok_or(ConfigError::MissingVar(name))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_games(listed: &str) -> Result<Vec<Game>, ConfigError> {
    let mut games = Vec::new();
    for id in listed.split(',') {
        let id = id.trim();
        if id.is_empty() {
            continue;
        }

        let game = Game::from_id(&id.to_lowercase())
            .ok_or_else(|| ConfigError::UnknownGame(id.to_string()))?;
        if !games.contains(&game) {
            games.push(game);
        }
    }

    Ok(games)
}
