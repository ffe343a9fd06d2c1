mod interaction;

use crate::adapters::inbound::telegram::interaction::TelegramInteraction;
use crate::domain::app::App;
use crate::domain::functions;
use crate::domain::functions::help::HELP_TEXT;
use crate::ports::inbound::client::Client;
use crate::ports::outbound::assets::AssetSource;
use crate::ports::outbound::publisher::Broadcaster;
use crate::ports::outbound::stats::StatsGateway;
use async_trait::async_trait;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

/// Callback payloads from the game picker are `game:` plus the game id.
pub(crate) const GAME_CALLBACK: &str = "game:";

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
enum Command {
    #[command(description = "start a new stats post")]
    Start,
    #[command(description = "how the bot works")]
    Help,
    #[command(description = "drop the current lookup")]
    Cancel,
}

pub struct Telegram<SG, AS, B> {
    bot: Bot,
    app: Arc<App<SG, AS, B>>,
}

impl<SG, AS, B> Telegram<SG, AS, B>
where
    SG: StatsGateway + Send + Sync + 'static,
    AS: AssetSource + Send + Sync + 'static,
    B: Broadcaster + Send + Sync + 'static,
{
    pub fn new(bot: Bot, app: App<SG, AS, B>) -> Self {
        Self {
            bot,
            app: Arc::new(app),
        }
    }
}

#[async_trait]
impl<SG, AS, B> Client for Telegram<SG, AS, B>
where
    SG: StatsGateway + Send + Sync + 'static,
    AS: AssetSource + Send + Sync + 'static,
    B: Broadcaster + Send + Sync + 'static,
{
    async fn run(&mut self) {
        let handler = dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(command_handler::<SG, AS, B>),
            )
            .branch(Update::filter_message().endpoint(message_handler::<SG, AS, B>))
            .branch(Update::filter_callback_query().endpoint(callback_handler::<SG, AS, B>));

        log::info!("Bot ready!");

        Dispatcher::builder(self.bot.clone(), handler)
            .dependencies(dptree::deps![Arc::clone(&self.app)])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    }
}

async fn command_handler<SG, AS, B>(
    bot: Bot,
    msg: Message,
    command: Command,
    app: Arc<App<SG, AS, B>>,
) -> ResponseResult<()>
where
    SG: StatsGateway + Send + Sync + 'static,
    AS: AssetSource + Send + Sync + 'static,
    B: Broadcaster + Send + Sync + 'static,
{
    let Some(user) = msg.from() else {
        return Ok(());
    };
    if user.is_bot {
        return Ok(());
    }

    log::info!("Received command from {}", msg.chat.id);

    let interaction = TelegramInteraction::new(bot, msg.chat.id, user.clone());
    match command {
        Command::Start => app.start_command(&interaction).await,
        Command::Help => functions::help::run(&interaction, HELP_TEXT).await,
        Command::Cancel => app.cancel_command(&interaction).await,
    }

    Ok(())
}

async fn message_handler<SG, AS, B>(
    bot: Bot,
    msg: Message,
    app: Arc<App<SG, AS, B>>,
) -> ResponseResult<()>
where
    SG: StatsGateway + Send + Sync + 'static,
    AS: AssetSource + Send + Sync + 'static,
    B: Broadcaster + Send + Sync + 'static,
{
    let Some(user) = msg.from() else {
        return Ok(());
    };
    if user.is_bot {
        return Ok(());
    }
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let interaction = TelegramInteraction::new(bot, msg.chat.id, user.clone());
    app.handle_text(&interaction, text).await;

    Ok(())
}

async fn callback_handler<SG, AS, B>(
    bot: Bot,
    query: CallbackQuery,
    app: Arc<App<SG, AS, B>>,
) -> ResponseResult<()>
where
    SG: StatsGateway + Send + Sync + 'static,
    AS: AssetSource + Send + Sync + 'static,
    B: Broadcaster + Send + Sync + 'static,
{
    // Stop the button spinner straight away, whatever the payload holds.
    if let Err(why) = bot.answer_callback_query(query.id.clone()).await {
        log::warn!("couldn't acknowledge button press: {why:?}");
    }

    let Some(data) = query.data else {
        return Ok(());
    };
    let Some(game_id) = data.strip_prefix(GAME_CALLBACK) else {
        return Ok(());
    };
    let Some(message) = query.message else {
        return Ok(());
    };

    log::info!("Received game choice from {}", message.chat.id);

    let interaction = TelegramInteraction::new(bot, message.chat.id, query.from);
    app.select_game_command(&interaction, game_id).await;

    Ok(())
}
