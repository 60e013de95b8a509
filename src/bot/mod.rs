//! Discord bot: gateway client, event handlers, and slash commands.
//!
//! The bot runs in the main task and blocks until the gateway connection closes. Every
//! event handler receives a clone of [`BotState`](crate::state::BotState).
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability, needed for slash command interactions
//! - `GUILD_MEMBERS` - Member join events for the verification flow (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
pub mod verification;
