//! New member verification flow.
//!
//! A member joining the guild gets a welcome message with a "Verificar" button in the
//! verification channel. Clicking it opens an ephemeral question with a select menu.
//! Picking the right answer within two minutes of joining grants the verified role.
//!
//! The select menu's custom ID carries the ID of the welcome message, which is the key
//! of the pending entry in [`VerificationService`].

use std::future::Future;

use serenity::all::{
    ButtonStyle, ChannelId, ComponentInteraction, ComponentInteractionDataKind, Context,
    CreateActionRow, CreateButton, CreateInteractionResponse, CreateInteractionResponseMessage,
    CreateMessage, CreateSelectMenu, CreateSelectMenuKind, CreateSelectMenuOption, Member, RoleId,
};

use crate::{
    error::AppError,
    service::verification::{VerificationService, VerificationStatus},
    state::BotState,
};

pub const VERIFY_BUTTON_ID: &str = "music-of-life-verify";
pub const ANSWER_ID_PREFIX: &str = "music-of-life-answer:";

const QUESTION: &str = "What Is The Music Of Life?";
const CORRECT_ANSWER: &str = "silence";
const ANSWERS: [(&str, &str); 4] = [
    ("Screamming ?", "screamming"),
    ("Um ... the lute ? No, drums!", "lute"),
    ("Some Kind Of choir. With chanting", "choir"),
    ("Silence, my brother", CORRECT_ANSWER),
];

const CORRECT_ANSWER_MESSAGE: &str = "Resposta correta! Welcome Home.";
const WRONG_ANSWER_MESSAGE: &str =
    "Begone. Tente novamente para receber as roles básicas do servidor.";
const ROLE_FAILURE_MESSAGE: &str = "Não foi possível conceder a role. Tente novamente.";
const ROLE_REASON: &str = "Answered the verification question";

/// Custom ID of the answer select menu for the welcome message `message_id`.
pub fn answer_custom_id(message_id: u64) -> String {
    format!("{}{}", ANSWER_ID_PREFIX, message_id)
}

/// Extracts the welcome message ID from an answer select menu custom ID.
pub fn parse_answer_custom_id(custom_id: &str) -> Option<u64> {
    custom_id.strip_prefix(ANSWER_ID_PREFIX)?.parse().ok()
}

/// Reply shown when a lookup did not yield a usable verification.
pub fn status_message(status: VerificationStatus) -> Option<&'static str> {
    match status {
        VerificationStatus::Valid => None,
        VerificationStatus::Missing => Some("Esta verificação expirou ou não existe."),
        VerificationStatus::WrongUser => Some("Esta verificação não é para você."),
        VerificationStatus::Expired => Some("Esta verificação expirou."),
    }
}

pub(crate) fn welcome_message(user_id: u64) -> CreateMessage {
    let button = CreateButton::new(VERIFY_BUTTON_ID)
        .label("Verificar")
        .style(ButtonStyle::Primary);

    CreateMessage::new()
        .content(format!(
            "Bem-vindo <@{}>. Clique no botão para verificar sua entrada.",
            user_id
        ))
        .components(vec![CreateActionRow::Buttons(vec![button])])
}

pub(crate) fn question_message(message_id: u64) -> CreateInteractionResponseMessage {
    let options = ANSWERS
        .iter()
        .map(|(label, value)| CreateSelectMenuOption::new(*label, *value))
        .collect();

    let menu = CreateSelectMenu::new(
        answer_custom_id(message_id),
        CreateSelectMenuKind::String { options },
    )
    .placeholder("Escolha");

    CreateInteractionResponseMessage::new()
        .content(QUESTION)
        .components(vec![CreateActionRow::SelectMenu(menu)])
        .ephemeral(true)
}

/// Posts the welcome message for a new member and records the pending verification.
///
/// # Arguments
/// - `ctx` - Discord context for sending the message
/// - `verification` - Store the pending entry is recorded in
/// - `channel_id` - Verification channel
/// - `member` - Member who just joined
///
/// # Returns
/// - `Ok(())` - Message posted and entry recorded
/// - `Err(AppError::DiscordErr)` - Message could not be sent
pub async fn send_verification(
    ctx: &Context,
    verification: &VerificationService,
    channel_id: u64,
    member: &Member,
) -> Result<(), AppError> {
    let user_id = member.user.id.get();

    let message = ChannelId::new(channel_id)
        .send_message(&ctx.http, welcome_message(user_id))
        .await?;

    verification.register(message.id.get(), user_id).await;

    tracing::info!(
        "Sent verification {} to user {} in guild {}",
        message.id,
        user_id,
        member.guild_id
    );

    Ok(())
}

/// Handles a click on the "Verificar" button.
///
/// Only the member the welcome message was posted for gets the question, and only while
/// the verification is pending.
pub async fn handle_verify_button(
    ctx: &Context,
    state: &BotState,
    interaction: &ComponentInteraction,
) -> Result<(), AppError> {
    let message_id = interaction.message.id.get();
    let status = state
        .verification
        .check(message_id, interaction.user.id.get())
        .await;

    let response = match status_message(status) {
        Some(text) => CreateInteractionResponseMessage::new()
            .content(text)
            .ephemeral(true),
        None => question_message(message_id),
    };

    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(response))
        .await?;

    Ok(())
}

/// Handles an answer picked in the question select menu.
///
/// A wrong answer leaves the verification pending so the member can try again. The right
/// answer grants `VERIFIED_ROLE_ID` and then consumes the verification.
pub async fn handle_answer(
    ctx: &Context,
    state: &BotState,
    interaction: &ComponentInteraction,
    message_id: u64,
) -> Result<(), AppError> {
    let text = resolve_answer(
        &state.verification,
        message_id,
        interaction.user.id.get(),
        selected_value(interaction),
        || grant_verified_role(ctx, state, interaction),
    )
    .await;

    let response = CreateInteractionResponseMessage::new()
        .content(text)
        .ephemeral(true);

    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(response))
        .await?;

    Ok(())
}

/// Decides the reply to an answer and grants the role when it is right.
///
/// The verification is only consumed after `grant_role` succeeds. When the grant fails
/// the entry stays pending, so the member can answer again before it expires.
///
/// # Returns
/// - `&'static str` - Ephemeral reply for the member
pub(crate) async fn resolve_answer<F, Fut>(
    verification: &VerificationService,
    message_id: u64,
    user_id: u64,
    answer: Option<&str>,
    grant_role: F,
) -> &'static str
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), AppError>>,
{
    if answer != Some(CORRECT_ANSWER) {
        return WRONG_ANSWER_MESSAGE;
    }

    if let Some(text) = status_message(verification.check(message_id, user_id).await) {
        return text;
    }

    if let Err(err) = grant_role().await {
        tracing::error!(
            "Failed to grant verified role to user {} for verification {}: {}",
            user_id,
            message_id,
            err
        );
        return ROLE_FAILURE_MESSAGE;
    }

    verification.complete(message_id, user_id).await;
    tracing::info!("User {} passed verification {}", user_id, message_id);

    CORRECT_ANSWER_MESSAGE
}

fn selected_value(interaction: &ComponentInteraction) -> Option<&str> {
    match &interaction.data.kind {
        ComponentInteractionDataKind::StringSelect { values } => {
            values.first().map(String::as_str)
        }
        _ => None,
    }
}

async fn grant_verified_role(
    ctx: &Context,
    state: &BotState,
    interaction: &ComponentInteraction,
) -> Result<(), AppError> {
    let Some(role_id) = state.config.verified_role_id else {
        tracing::warn!("VERIFIED_ROLE_ID is not set, no role granted");
        return Ok(());
    };

    let guild_id = interaction.guild_id.ok_or_else(|| {
        AppError::InternalError("Verification answer outside of a guild".to_string())
    })?;

    ctx.http
        .add_member_role(
            guild_id,
            interaction.user.id,
            RoleId::new(role_id),
            Some(ROLE_REASON),
        )
        .await?;

    Ok(())
}
