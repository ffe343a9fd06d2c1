use dotenv::dotenv;
use teloxide::Bot;

use statcard::adapters::inbound::create_client;
use statcard::adapters::outbound::assets::ProviderChain;
use statcard::adapters::outbound::publisher::TelegramBroadcaster;
use statcard::adapters::outbound::stats::SupercellStats;
use statcard::config::Config;
use statcard::domain::app::App;
use statcard::ports::inbound::client::Client;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().unwrap_or_else(|why| {
        log::error!("{why}");
        std::process::exit(1);
    });

    log::info!(
        "Serving: {}",
        config
            .games
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let bot = Bot::new(&config.bot_token);

    let app = App::new(
        SupercellStats::new(config.apis),
        ProviderChain::new(),
        TelegramBroadcaster::new(bot.clone(), config.channel),
        config.games,
        config.text_games,
    );

    let mut client = create_client(bot, app);
    client.run().await;
}
