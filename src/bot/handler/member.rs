use serenity::all::{Context, Member};

use crate::{bot::verification, state::BotState};

/// Handles a member joining a guild.
///
/// Posts the verification prompt when `VERIFICATION_CHANNEL_ID` is configured. Failures
/// are logged, the member simply does not get a prompt.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `ctx` - Discord context for sending the prompt
/// - `new_member` - The member who joined
pub async fn handle_guild_member_addition(state: &BotState, ctx: Context, new_member: Member) {
    let Some(channel_id) = state.config.verification_channel_id else {
        return;
    };

    if let Err(e) =
        verification::send_verification(&ctx, &state.verification, channel_id, &new_member).await
    {
        tracing::error!(
            "Failed to send verification for user {} in guild {}: {}",
            new_member.user.id,
            new_member.guild_id,
            e
        );
    }
}
