//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after the handshake. Besides logging the connection,
//! it registers the bot's slash commands: to a single guild when `GUILD_ID` is configured,
//! which applies instantly, or globally otherwise.

use serenity::all::{Command, Context, GuildId, Ready};

use crate::{bot::command, state::BotState};

/// Handles the ready event when the bot connects to Discord.
///
/// Registration failures are logged and the bot keeps running. Commands that were
/// registered on a previous run keep working.
///
/// # Arguments
/// - `state` - Shared bot state holding the optional guild ID
/// - `ctx` - Discord context for the registration requests
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let commands = command::all();
    let count = commands.len();

    let result = match state.config.guild_id {
        Some(guild_id) => GuildId::new(guild_id)
            .set_commands(&ctx.http, commands)
            .await
            .map(|_| format!("guild {}", guild_id)),
        None => Command::set_global_commands(&ctx.http, commands)
            .await
            .map(|_| "global scope".to_string()),
    };

    match result {
        Ok(scope) => tracing::info!("Registered {} slash command(s) to {}", count, scope),
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }
}
