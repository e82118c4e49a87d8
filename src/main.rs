use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use tracing::{error, info, warn};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod models;
mod services;
#[cfg(test)]
mod test_support;

use config::Config;
use models::Chain;
use services::balance_service::BalanceService;

struct Handler {
    balances: BalanceService,
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        commands::handle_message(&ctx, &msg, &self.balances).await;
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);
    }
}

fn init_tracing() {
    let mut filter = EnvFilter::from_default_env();
    for directive in ["wallet_balance_bot=debug", "serenity=warn"] {
        match directive.parse::<Directive>() {
            Ok(d) => filter = filter.add_directive(d),
            Err(e) => eprintln!("Ignoring log directive {}: {}", directive, e),
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_tracing();

    info!("Starting wallet balance bot...");

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Error: {}", e);
            return;
        }
    };

    for chain in Chain::ALL {
        if config.explorer(chain).api_key.is_none() {
            warn!(
                "No {} API key configured; {} balances will show as 0",
                chain.explorer_name(),
                chain
            );
        }
    }

    let balances = match BalanceService::from_config(&config) {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to initialize explorer clients: {}", e);
            return;
        }
    };

    let intents = GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGES;

    let mut client = match Client::builder(&config.discord_token, intents)
        .event_handler(Handler { balances })
        .await
    {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create client: {}", e);
            return;
        }
    };

    info!("Polling for messages");
    if let Err(e) = client.start().await {
        error!("Client error: {}", e);
    }
}
