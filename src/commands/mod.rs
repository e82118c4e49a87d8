pub mod balance;
pub mod start;

use serenity::model::channel::Message;
use serenity::prelude::Context;
use tracing::error;

use crate::services::balance_service::BalanceService;

const COMMAND_PREFIX: char = '$';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
}

/// What an incoming chat message asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inbound<'a> {
    Command(Command),
    /// Any non-command text, taken verbatim as a wallet address
    Text(&'a str),
}

/// Classify message content. Unknown `$` commands yield `None`.
pub fn parse_inbound(content: &str) -> Option<Inbound<'_>> {
    let first = content.split_whitespace().next().unwrap_or_default();
    if !first.starts_with(COMMAND_PREFIX) {
        return Some(Inbound::Text(content));
    }

    match first {
        "$start" | "$help" => Some(Inbound::Command(Command::Start)),
        _ => None,
    }
}

pub async fn handle_message(ctx: &Context, msg: &Message, balances: &BalanceService) {
    if msg.author.bot {
        return;
    }

    let Some(inbound) = parse_inbound(&msg.content) else {
        return;
    };

    let replies = replies_for(inbound, balances).await;

    if let Err(e) = send_replies(ctx, msg, &replies).await {
        error!("Error handling {:?} in channel {}: {}", inbound, msg.channel_id, e);
    }
}

/// Messages to send back for one inbound event, in order
pub async fn replies_for(inbound: Inbound<'_>, balances: &BalanceService) -> Vec<String> {
    match inbound {
        Inbound::Command(Command::Start) => start::execute(),
        Inbound::Text(address) => balance::execute(balances, address).await,
    }
}

/// Send each reply as its own plain-text message.
///
/// Every reply is attempted even if an earlier one fails.
async fn send_replies(ctx: &Context, msg: &Message, replies: &[String]) -> Result<(), String> {
    let mut failures = Vec::new();
    for reply in replies {
        if let Err(e) = msg
            .channel_id
            .send_message(ctx, serenity::builder::CreateMessage::default().content(reply))
            .await
        {
            failures.push(e.to_string());
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(format!("Failed to send {} message(s): {}", failures.len(), failures.join("; ")))
    }
}
