use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{InputFile, Recipient};
use tokio::time::Instant;

use crate::domain::card::Post;
use crate::ports::outbound::publisher::{BroadcastOutcome, Broadcaster, PublishError};

/// Posts finished cards to the configured channel. Without a channel every
/// publish is a quiet no-op.
pub struct TelegramBroadcaster {
    bot: Bot,
    target: Option<Recipient>,
}

impl TelegramBroadcaster {
    #[must_use]
    pub fn new(bot: Bot, channel: Option<String>) -> Self {
        let target = channel.as_deref().and_then(parse_target);

        Self { bot, target }
    }
}

fn parse_target(channel: &str) -> Option<Recipient> {
    let channel = channel.trim();
    if channel.is_empty() {
        return None;
    }

    if channel.starts_with('@') {
        return Some(Recipient::ChannelUsername(channel.to_string()));
    }

    match channel.parse::<i64>() {
        Ok(id) => Some(Recipient::Id(ChatId(id))),
        Err(_) => {
            log::error!(
                "{channel:?} is neither an @username nor a chat id, channel posts stay off"
            );
            None
        }
    }
}

#[async_trait]
impl Broadcaster for TelegramBroadcaster {
    async fn publish(&self, post: Post) -> Result<BroadcastOutcome, PublishError> {
        let Some(target) = self.target.clone() else {
            return Ok(BroadcastOutcome::Skipped);
        };

        let start = Instant::now();
        match post {
            Post::Photo {
                asset,
                caption,
                file_name,
            } => {
                let photo = InputFile::memory(asset.bytes).file_name(file_name);
                self.bot
                    .send_photo(target, photo)
                    .caption(caption)
                    .await
                    .map_err(|why| PublishError::new(why.to_string()))?;
            }
            Post::Text { body } => {
                self.bot
                    .send_message(target, body)
                    .await
                    .map_err(|why| PublishError::new(why.to_string()))?;
            }
        }

        log::info!(
            "Telegram took {}ms to post to the channel",
            start.elapsed().as_millis()
        );

        Ok(BroadcastOutcome::Delivered)
    }
}
