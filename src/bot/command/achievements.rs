//! `/achievements` - Steam achievement completion for a player in one game.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, EditInteractionResponse,
};

use crate::{
    bot::{
        command::{integer_option, string_option},
        handler::interaction::reply_ephemeral,
    },
    error::AppError,
    model::steam::{AchievementSummary, SteamAppDetails},
    service::steam::SteamService,
    state::BotState,
};

pub const NAME: &str = "achievements";

const MISSING_API_KEY_MESSAGE: &str = "STEAM_API_KEY is missing.";
const NO_ACHIEVEMENTS_MESSAGE: &str = "Nenhuma conquista nesse jogo.";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Fetch Steam achievements for a user in a specific game")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "steamid",
                "The 64-bit SteamID of the user",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "appid",
                "The AppID of the Steam game",
            )
            .required(true),
        )
}

/// Runs `/achievements`.
///
/// Defers the reply while Steam is queried. Steam failures become the edited reply text.
/// Only Discord failures are returned as errors.
pub async fn run(
    ctx: &Context,
    interaction: &CommandInteraction,
    state: &BotState,
) -> Result<(), AppError> {
    let steam_id = string_option(interaction, "steamid")?;
    let app_id = integer_option(interaction, "appid")?;

    let Some(api_key) = state.config.steam_api_key.as_deref() else {
        return reply_ephemeral(ctx, interaction, MISSING_API_KEY_MESSAGE).await;
    };

    interaction.defer(&ctx.http).await?;

    let response = match fetch_summary(state, api_key, app_id, steam_id).await {
        Ok(Some((summary, details))) => {
            let embed = build_embed(&summary, details.as_ref(), app_id, steam_id);
            EditInteractionResponse::new().embed(embed)
        }
        Ok(None) => EditInteractionResponse::new().content(NO_ACHIEVEMENTS_MESSAGE),
        Err(e) => {
            tracing::warn!(
                "Steam lookup failed for {} in app {}: {}",
                steam_id,
                app_id,
                e
            );
            EditInteractionResponse::new().content(error_message(&e))
        }
    };

    interaction.edit_response(&ctx.http, response).await?;

    Ok(())
}

/// Fetches achievements and, when there are any, the store entry of the game.
async fn fetch_summary(
    state: &BotState,
    api_key: &str,
    app_id: i64,
    steam_id: &str,
) -> Result<Option<(AchievementSummary, Option<SteamAppDetails>)>, AppError> {
    let app_id = u64::try_from(app_id)
        .map_err(|_| AppError::InternalError(format!("Invalid app id {}", app_id)))?;

    let steam = SteamService::new(&state.http_client);
    let achievements = steam
        .fetch_player_achievements(api_key, app_id, steam_id)
        .await?;

    let Some(summary) = AchievementSummary::from_achievements(&achievements) else {
        return Ok(None);
    };

    let details = steam.fetch_app_details(app_id).await?;

    Ok(Some((summary, details)))
}

pub(crate) fn error_message(error: &AppError) -> String {
    format!("Erro buscar conquistas na steam: {}", error)
}

/// Builds the completion embed.
///
/// # Arguments
/// - `summary` - Completed, total and percentage
/// - `details` - Store entry, if Steam has one
/// - `app_id` - Requested app, used for the title when there is no store entry
/// - `steam_id` - Player the lookup was for, shown as the description
pub(crate) fn build_embed(
    summary: &AchievementSummary,
    details: Option<&SteamAppDetails>,
    app_id: i64,
    steam_id: &str,
) -> CreateEmbed {
    let title = details
        .map(|details| details.name.clone())
        .unwrap_or_else(|| format!("App {}", app_id));

    let mut embed = CreateEmbed::new()
        .title(title)
        .description(steam_id)
        .field(
            "Conclusão",
            format!(
                "{}/{} ({}%)",
                summary.completed, summary.total, summary.percentage
            ),
            false,
        );

    if let Some(image) = details.and_then(|details| details.header_image.as_deref()) {
        embed = embed.image(image);
    }

    embed
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::error::steam::SteamError;

    fn summary() -> AchievementSummary {
        AchievementSummary {
            completed: 3,
            total: 7,
            percentage: "42.86".to_string(),
        }
    }

    fn to_json(embed: CreateEmbed) -> Value {
        serde_json::to_value(embed).unwrap()
    }

    /// Tests the embed for a game with a store entry.
    ///
    /// Expected: Store name as title, steam id as description, completion field, image
    #[test]
    fn test_build_embed_with_details() {
        let details = SteamAppDetails {
            id: 570,
            name: "Dota 2".to_string(),
            header_image: Some("https://cdn/570.jpg".to_string()),
        };

        let json = to_json(build_embed(&summary(), Some(&details), 570, "7656119"));

        assert_eq!(json["title"], "Dota 2");
        assert_eq!(json["description"], "7656119");
        assert_eq!(json["fields"][0]["name"], "Conclusão");
        assert_eq!(json["fields"][0]["value"], "3/7 (42.86%)");
        assert_eq!(json["image"]["url"], "https://cdn/570.jpg");
    }

    /// Tests the embed when Steam has no store entry for the game.
    ///
    /// Expected: "App {id}" title and no image
    #[test]
    fn test_build_embed_without_details() {
        let json = to_json(build_embed(&summary(), None, 42, "7656119"));

        assert_eq!(json["title"], "App 42");
        assert!(json.get("image").map_or(true, Value::is_null));
    }

    /// Tests the reply text for a Steam error status.
    ///
    /// Expected: Prefixed message carrying status and body
    #[test]
    fn test_error_message() {
        let error = AppError::from(SteamError::Status {
            service: "Steam achievements",
            status: 403,
            body: "Forbidden".to_string(),
        });

        assert_eq!(
            error_message(&error),
            "Erro buscar conquistas na steam: Steam achievements 403: Forbidden"
        );
    }
}
