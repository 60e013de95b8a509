use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, error::AppError, state::BotState};

/// Starts the Discord bot in a blocking manner
///
/// Builds the serenity client with the bot's event handler and runs it until the gateway
/// connection shuts down.
///
/// # Arguments
/// - `state` - Shared state handed to every event handler
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError::DiscordErr)` if bot initialization or connection fails
pub async fn start_bot(state: BotState) -> Result<(), AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let token = state.config.discord_token.clone();
    let handler = Handler::new(state);

    let mut client = Client::builder(&token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
