use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tokio::time::Instant;

use crate::config::GameApi;
use crate::domain::game::Game;
use crate::domain::stats::PlayerStats;
use crate::domain::tag::PlayerTag;
use crate::ports::outbound::stats::{StatsError, StatsGateway};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Talks to the official player APIs, one host per game.
pub struct SupercellStats {
    client: reqwest::Client,
    apis: HashMap<Game, GameApi>,
}

impl SupercellStats {
    #[must_use]
    pub fn new(apis: HashMap<Game, GameApi>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed HTTP Client build");

        Self { client, apis }
    }
}

fn player_url(base: &str, tag: &PlayerTag) -> String {
    format!("{base}/players/{}", tag.encoded())
}

fn classify_failure(status: StatusCode) -> StatsError {
    match status {
        StatusCode::NOT_FOUND => StatsError::NotFound,
        // Only a 403 means our token is bad; these APIs reserve 401 for
        // transient auth hiccups, so it stays retryable.
        StatusCode::FORBIDDEN => StatsError::Unauthorized,
        status => StatsError::Upstream(status.as_u16()),
    }
}

#[async_trait]
impl StatsGateway for SupercellStats {
    async fn fetch_player(&self, game: Game, tag: PlayerTag) -> Result<PlayerStats, StatsError> {
        let Some(api) = self.apis.get(&game) else {
            return Err(StatsError::Transport(format!("no api configured for {game}")));
        };

        let url = player_url(&api.base, &tag);
        let start = Instant::now();
        let response = self
            .client
            .get(&url)
            .bearer_auth(&api.token)
            .send()
            .await
            .map_err(|why| StatsError::Transport(why.to_string()))?;

        let status = response.status();
        log::info!(
            "{game} stats api answered {status} for {tag} in {}ms",
            start.elapsed().as_millis()
        );

        if status != StatusCode::OK {
            return Err(classify_failure(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|why| StatsError::Transport(why.to_string()))?;

        PlayerStats::decode(game, &body).map_err(|why| StatsError::Decode(why.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_url_percent_encodes_the_hash() {
        let tag = PlayerTag::parse("#2GPQY9RJL").unwrap();

        assert_eq!(
            player_url("https://api.clashroyale.com/v1", &tag),
            "https://api.clashroyale.com/v1/players/%232GPQY9RJL"
        );
    }

    #[test]
    fn test_player_url_keeps_the_proxy_path() {
        let tag = PlayerTag::parse("#PYL").unwrap();

        assert_eq!(
            player_url("https://bsproxy.royaleapi.dev/v1", &tag),
            "https://bsproxy.royaleapi.dev/v1/players/%23PYL"
        );
    }

    #[test]
    fn test_missing_player_is_not_found() {
        assert!(matches!(
            classify_failure(StatusCode::NOT_FOUND),
            StatsError::NotFound
        ));
    }

    #[test]
    fn test_rejected_credentials_are_unauthorized() {
        assert!(matches!(
            classify_failure(StatusCode::FORBIDDEN),
            StatsError::Unauthorized
        ));
    }

    #[test]
    fn test_a_401_stays_retryable() {
        assert!(matches!(
            classify_failure(StatusCode::UNAUTHORIZED),
            StatsError::Upstream(401)
        ));
    }

    #[test]
    fn test_other_statuses_keep_their_code() {
        assert!(matches!(
            classify_failure(StatusCode::SERVICE_UNAVAILABLE),
            StatsError::Upstream(503)
        ));
        assert!(matches!(
            classify_failure(StatusCode::TOO_MANY_REQUESTS),
            StatsError::Upstream(429)
        ));
    }
}
