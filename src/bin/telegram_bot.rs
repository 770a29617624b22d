use crew_relay::config::Config;
use crew_relay::relay::{telegram, GatewayClient};
use crew_relay::utils::init_tracing;
use teloxide::Bot;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("crew_relay=info,telegram_bot=info");

    let config = Config::from_env()?;
    let token = config.relay.require_bot_token()?;
    info!("Relay configuration loaded: {:?}", config.relay);

    let client = GatewayClient::from_config(&config.relay)?;
    let bot = Bot::new(token);

    info!("Telegram Bot is starting...");
    telegram::run(bot, client).await;
    info!("Telegram Bot has stopped.");

    Ok(())
}
