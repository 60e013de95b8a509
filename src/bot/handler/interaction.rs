//! Interaction dispatch.
//!
//! Routes slash commands by name and component clicks by custom ID. Handler errors are
//! logged here and turned into a short ephemeral reply. When the interaction was already
//! acknowledged (deferred or answered) the reply goes out as a follow-up.

use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, Interaction,
};

use crate::{
    bot::{command, verification},
    error::AppError,
    state::BotState,
};

pub const UNKNOWN_COMMAND_MESSAGE: &str = "Comando desconhecido.";
pub const COMMAND_ERROR_MESSAGE: &str = "Não sei Rick, parece falso. (Ocorreu um erro)";

/// Handles any interaction delivered by the gateway.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `ctx` - Discord context
/// - `interaction` - Slash command, component click, or another kind (ignored)
pub async fn handle_interaction_create(state: &BotState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => handle_command(state, &ctx, &command).await,
        Interaction::Component(component) => handle_component(state, &ctx, &component).await,
        _ => {}
    }
}

async fn handle_command(state: &BotState, ctx: &Context, interaction: &CommandInteraction) {
    let name = interaction.data.name.as_str();

    let result = match name {
        command::hello::NAME => command::hello::run(ctx, interaction).await,
        command::achievements::NAME => command::achievements::run(ctx, interaction, state).await,
        command::loldle::NAME => command::loldle::run(ctx, interaction, state).await,
        _ => {
            tracing::warn!("Received unknown command /{}", name);
            reply_ephemeral(ctx, interaction, UNKNOWN_COMMAND_MESSAGE).await
        }
    };

    if let Err(e) = result {
        tracing::error!("Failed to execute /{}: {}", name, e);

        if let Err(e) = report_command_error(ctx, interaction).await {
            tracing::error!("Failed to report error for /{}: {}", name, e);
        }
    }
}

async fn handle_component(state: &BotState, ctx: &Context, interaction: &ComponentInteraction) {
    let custom_id = interaction.data.custom_id.as_str();

    let result = if custom_id == verification::VERIFY_BUTTON_ID {
        verification::handle_verify_button(ctx, state, interaction).await
    } else if let Some(message_id) = verification::parse_answer_custom_id(custom_id) {
        verification::handle_answer(ctx, state, interaction, message_id).await
    } else {
        tracing::debug!("Ignoring component interaction {}", custom_id);
        Ok(())
    };

    if let Err(e) = result {
        tracing::error!(
            "Failed to handle component {} for user {}: {}",
            custom_id,
            interaction.user.id,
            e
        );
    }
}

/// Sends an ephemeral text reply to a slash command.
pub async fn reply_ephemeral(
    ctx: &Context,
    interaction: &CommandInteraction,
    content: impl Into<String>,
) -> Result<(), AppError> {
    let message = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true);

    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}

/// Tells the user their command failed.
///
/// Tries a direct reply first and falls back to a follow-up, which is the only option once
/// the command deferred or already replied.
async fn report_command_error(
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    if reply_ephemeral(ctx, interaction, COMMAND_ERROR_MESSAGE)
        .await
        .is_ok()
    {
        return Ok(());
    }

    let followup = CreateInteractionResponseFollowup::new()
        .content(COMMAND_ERROR_MESSAGE)
        .ephemeral(true);

    interaction.create_followup(&ctx.http, followup).await?;

    Ok(())
}
