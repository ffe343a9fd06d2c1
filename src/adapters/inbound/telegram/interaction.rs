use crate::adapters::inbound::telegram::GAME_CALLBACK;
use crate::domain::card::Post;
use crate::domain::game::Game;
use crate::ports::inbound::client::{ChatInteraction, ChatInteractionError, NoticeId};
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, InputFile, MessageId, User};
use tokio::time::Instant;

pub struct TelegramInteraction {
    bot: Bot,
    chat: ChatId,
    user: User,
}

impl TelegramInteraction {
    pub fn new(bot: Bot, chat: ChatId, user: User) -> Self {
        Self { bot, chat, user }
    }
}

#[async_trait]
impl ChatInteraction for TelegramInteraction {
    fn user_id(&self) -> u64 {
        self.user.id.0
    }

    fn submitter(&self) -> String {
        if let Some(username) = &self.user.username {
            return format!("@{username}");
        }

        let mut name = self.user.first_name.clone();
        if let Some(last_name) = &self.user.last_name {
            name.push(' ');
            name.push_str(last_name);
        }

        let name = name.trim();
        if name.is_empty() {
            format!("id:{}", self.user.id)
        } else {
            name.to_string()
        }
    }

    async fn reply(&self, message: String) -> Result<(), ChatInteractionError> {
        self.bot
            .send_message(self.chat, message)
            .await
            .map_err(|why| ChatInteractionError::new(why.to_string()))?;

        Ok(())
    }

    async fn notify(&self, message: String) -> Result<NoticeId, ChatInteractionError> {
        let sent = self
            .bot
            .send_message(self.chat, message)
            .await
            .map_err(|why| ChatInteractionError::new(why.to_string()))?;

        Ok(sent.id.0)
    }

    async fn edit(&self, notice: NoticeId, message: String) -> Result<(), ChatInteractionError> {
        self.bot
            .edit_message_text(self.chat, MessageId(notice), message)
            .await
            .map_err(|why| ChatInteractionError::new(why.to_string()))?;

        Ok(())
    }

    async fn present_games(
        &self,
        message: String,
        games: Vec<Game>,
    ) -> Result<(), ChatInteractionError> {
        let rows: Vec<Vec<InlineKeyboardButton>> = games
            .iter()
            .map(|game| {
                vec![InlineKeyboardButton::callback(
                    game.title(),
                    format!("{GAME_CALLBACK}{}", game.id()),
                )]
            })
            .collect();

        self.bot
            .send_message(self.chat, message)
            .reply_markup(InlineKeyboardMarkup::new(rows))
            .await
            .map_err(|why| ChatInteractionError::new(why.to_string()))?;

        Ok(())
    }

    async fn deliver(&self, post: Post) -> Result<(), ChatInteractionError> {
        let start = Instant::now();

        match post {
            Post::Photo {
                asset,
                caption,
                file_name,
            } => {
                let photo = InputFile::memory(asset.bytes).file_name(file_name);
                self.bot
                    .send_photo(self.chat, photo)
                    .caption(caption)
                    .await
                    .map_err(|why| ChatInteractionError::new(why.to_string()))?;
            }
            Post::Text { body } => {
                self.bot
                    .send_message(self.chat, body)
                    .await
                    .map_err(|why| ChatInteractionError::new(why.to_string()))?;
            }
        }

        log::info!(
            "Telegram took {}ms to deliver the post to {}",
            start.elapsed().as_millis(),
            self.chat,
        );

        Ok(())
    }
}
