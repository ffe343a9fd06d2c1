pub mod telegram;

use crate::adapters::inbound::telegram::Telegram;
use crate::domain::app::App;
use crate::ports::inbound::client::Client;
use crate::ports::outbound::assets::AssetSource;
use crate::ports::outbound::publisher::Broadcaster;
use crate::ports::outbound::stats::StatsGateway;
use teloxide::Bot;

pub fn create_client<SG, AS, B>(bot: Bot, app: App<SG, AS, B>) -> impl Client
where
    SG: StatsGateway + Send + Sync + 'static,
    AS: AssetSource + Send + Sync + 'static,
    B: Broadcaster + Send + Sync + 'static,
{
    Telegram::new(bot, app)
}
