use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use tokio::time::Instant;

use crate::domain::card::CardAsset;
use crate::domain::game::Game;
use crate::domain::tag::PlayerTag;
use crate::ports::outbound::assets::AssetSource;

const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(15);

/// Tries the community card providers in order and keeps the first real image.
pub struct ProviderChain {
    client: reqwest::Client,
}

impl ProviderChain {
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(ATTEMPT_TIMEOUT)
            .build()
            .expect("Failed HTTP Client build");

        Self { client }
    }
}

impl Default for ProviderChain {
    fn default() -> Self {
        Self::new()
    }
}

fn provider_url(template: &str, tag: &PlayerTag) -> String {
    template.replace("{tag}", tag.bare())
}

/// One provider's answer, reduced to what classification needs.
struct ProviderResponse {
    status: StatusCode,
    content_type: Option<String>,
    body: Vec<u8>,
}

async fn http_fetch(client: &reqwest::Client, url: String) -> Result<ProviderResponse, String> {
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|why| why.to_string())?;

    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = response
        .bytes()
        .await
        .map_err(|why| why.to_string())?
        .to_vec();

    Ok(ProviderResponse {
        status,
        content_type,
        body,
    })
}

/// Walks the game's providers in order and keeps the first answer that is a
/// real image. Transport failures and junk answers are logged and skipped;
/// running out of providers is an ordinary `None`.
async fn first_asset<F, Fut>(fetch: F, game: Game, tag: &PlayerTag) -> Option<CardAsset>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<ProviderResponse, String>>,
{
    for template in game.provider_templates() {
        let url = provider_url(template, tag);
        let start = Instant::now();

        let response = match fetch(url.clone()).await {
            Ok(response) => response,
            Err(why) => {
                log::warn!("couldn't fetch from {url}: {why}");
                continue;
            }
        };

        if let Some(asset) = asset_from_response(
            &url,
            response.status,
            response.content_type.as_deref(),
            response.body,
        ) {
            log::info!(
                "{url} served a card for {tag} in {}ms",
                start.elapsed().as_millis()
            );
            return Some(asset);
        }
    }

    None
}

fn sniff_content_type(body: &[u8]) -> Option<&'static str> {
    if body.starts_with(b"\x89PNG") {
        Some("image/png")
    } else if body.starts_with(&[0xFF, 0xD8]) {
        Some("image/jpeg")
    } else if body.starts_with(b"RIFF") {
        Some("image/webp")
    } else {
        None
    }
}

fn looks_like_image(content_type: Option<&str>, body: &[u8]) -> bool {
    if content_type.is_some_and(|header| header.contains("image")) {
        return true;
    }

    sniff_content_type(body).is_some()
}

/// Providers answer 200 with an HTML error page often enough that the status
/// alone can't be trusted.
fn asset_from_response(
    url: &str,
    status: StatusCode,
    content_type: Option<&str>,
    body: Vec<u8>,
) -> Option<CardAsset> {
    if status != StatusCode::OK {
        log::info!("{url} answered {status}, moving on");
        return None;
    }

    if !looks_like_image(content_type, &body) {
        log::info!("{url} served something that isn't an image, moving on");
        return None;
    }

    let content_type = match content_type {
        Some(header) if header.contains("image") => header.to_string(),
        _ => sniff_content_type(&body).unwrap_or("image/png").to_string(),
    };

    Some(CardAsset::fetched(body, content_type, url.to_string()))
}

#[async_trait]
impl AssetSource for ProviderChain {
    async fn resolve(&self, game: Game, tag: PlayerTag) -> Option<CardAsset> {
        first_asset(|url| http_fetch(&self.client, url), game, &tag).await
    }
}
