//! Slash commands.
//!
//! Each command module exposes its `NAME`, a `register()` returning the command
//! definition sent to Discord, and an async `run` invoked by the interaction dispatcher.

use serenity::all::{CommandInteraction, CreateCommand};

use crate::error::AppError;

pub mod achievements;
pub mod hello;
pub mod loldle;

/// Definitions of every slash command the bot serves.
pub fn all() -> Vec<CreateCommand> {
    vec![hello::register(), achievements::register(), loldle::register()]
}

/// Reads a required string option.
///
/// # Returns
/// - `Ok(&str)` - Option value
/// - `Err(AppError::InternalError)` - Option absent or not a string
pub(crate) fn string_option<'a>(
    interaction: &'a CommandInteraction,
    name: &str,
) -> Result<&'a str, AppError> {
    interaction
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_str())
        .ok_or_else(|| missing_option(interaction, name))
}

/// Reads a required integer option.
pub(crate) fn integer_option(interaction: &CommandInteraction, name: &str) -> Result<i64, AppError> {
    interaction
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_i64())
        .ok_or_else(|| missing_option(interaction, name))
}

fn missing_option(interaction: &CommandInteraction, name: &str) -> AppError {
    AppError::InternalError(format!(
        "Missing option '{}' for /{}",
        name, interaction.data.name
    ))
}
