//! `/loldle` - classic daily champion guessing game.
//!
//! Each guess is compared field by field against the champion of the day and answered
//! with an embed showing which attributes match. Unknown names get an ephemeral reply
//! with close suggestions instead.

use chrono::{NaiveDate, Utc};
use loldle::{evaluate, Catalog, Evaluation, MatchStatus, YearStatus, DEFAULT_SUGGESTION_LIMIT};
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateEmbedFooter, CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::{
    bot::{command::string_option, handler::interaction::reply_ephemeral},
    error::AppError,
    state::BotState,
};

pub const NAME: &str = "loldle";

const CORRECT_COLOR: u32 = 0x3fb950;
const GUESS_COLOR: u32 = 0x5865f2;

const MISSING_YEAR: &str = "Erro do isbas";
const EMPTY_LIST: &str = "Unknown";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Play the classic LoLdle daily guesser")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "guess",
                "Champion name you want to guess",
            )
            .required(true),
        )
}

pub async fn run(
    ctx: &Context,
    interaction: &CommandInteraction,
    state: &BotState,
) -> Result<(), AppError> {
    let guess = string_option(interaction, "guess")?;
    let today = Utc::now().date_naive();

    match play(&state.catalog, guess, today) {
        GuessOutcome::Unknown { suggestions } => {
            reply_ephemeral(ctx, interaction, unknown_champion_message(&suggestions)).await
        }
        GuessOutcome::Evaluated(evaluation) => {
            tracing::debug!(
                "User {} guessed {} (correct: {})",
                interaction.user.id,
                evaluation.guess.name,
                evaluation.is_correct
            );

            let embed = build_embed(&evaluation, state.catalog.len());
            let message = CreateInteractionResponseMessage::new().embed(embed);

            interaction
                .create_response(&ctx.http, CreateInteractionResponse::Message(message))
                .await?;

            Ok(())
        }
    }
}

/// Result of a single guess.
#[derive(Debug)]
pub(crate) enum GuessOutcome<'a> {
    /// The guess names no champion.
    Unknown { suggestions: Vec<String> },
    Evaluated(Evaluation<'a>),
}

/// Resolves the guess and compares it against the champion of `date`.
pub(crate) fn play<'a>(catalog: &'a Catalog, guess: &str, date: NaiveDate) -> GuessOutcome<'a> {
    match catalog.resolve(guess) {
        Some(champion) => GuessOutcome::Evaluated(evaluate(champion, catalog.daily_target(date))),
        None => GuessOutcome::Unknown {
            suggestions: catalog.suggest(guess, DEFAULT_SUGGESTION_LIMIT),
        },
    }
}

pub(crate) fn unknown_champion_message(suggestions: &[String]) -> String {
    let hint = if suggestions.is_empty() {
        String::new()
    } else {
        format!("\nTalvez: {}", suggestions.join(", "))
    };

    format!("Esse champion não existe. {}", hint)
}

/// Builds the answer embed for an evaluated guess.
///
/// # Arguments
/// - `evaluation` - Comparison of the guess against the champion of the day
/// - `champion_count` - Catalog size shown in the footer
pub(crate) fn build_embed(evaluation: &Evaluation, champion_count: usize) -> CreateEmbed {
    let (title, color, description) = if evaluation.is_correct {
        (
            format!("Você acertou! {}", evaluation.target.name),
            CORRECT_COLOR,
            "Parabéns! Você descobriu o campeão do dia.",
        )
    } else {
        (
            format!("IsBackDle {}", evaluation.guess.name),
            GUESS_COLOR,
            "Use /loldle novamente com outro palpite para continuar jogando.",
        )
    };

    let fields = evaluation_fields(evaluation)
        .into_iter()
        .map(|(name, value)| (name, value, true));

    CreateEmbed::new()
        .title(title)
        .color(color)
        .description(description)
        .fields(fields)
        .footer(CreateEmbedFooter::new(format!(
            "Baseado em {} campeões • Reinicia 00:00 UTC",
            champion_count
        )))
}

/// Field name and value for each compared attribute, in display order.
///
/// Values show the guessed champion's attribute prefixed with its status emoji.
pub(crate) fn evaluation_fields(evaluation: &Evaluation) -> Vec<(&'static str, String)> {
    let guess = evaluation.guess;

    vec![
        ("Gênero", with_status(evaluation.gender, gender_label(&guess.gender))),
        ("Posições", with_status(evaluation.positions, &list(&guess.positions))),
        ("Espécies", with_status(evaluation.species, &list(&guess.species))),
        ("Recurso", with_status(evaluation.resource, &guess.resource)),
        ("Alcance", with_status(evaluation.range_type, &list(&guess.range_type))),
        ("Regiões", with_status(evaluation.regions, &list(&guess.regions))),
        ("Lançamento", release_year(evaluation.release_year, guess.release_year)),
    ]
}

fn status_emoji(status: MatchStatus) -> &'static str {
    match status {
        MatchStatus::Match => "✅",
        MatchStatus::Partial => "🟨",
        MatchStatus::Mismatch => "❌",
    }
}

fn year_emoji(status: YearStatus) -> &'static str {
    match status {
        YearStatus::Match => "✅",
        YearStatus::Higher => "⬆️",
        YearStatus::Lower => "⬇️",
    }
}

fn with_status(status: MatchStatus, value: &str) -> String {
    format!("{} {}", status_emoji(status), value)
}

fn release_year(status: YearStatus, year: i32) -> String {
    if year == 0 {
        format!("{} {}", year_emoji(status), MISSING_YEAR)
    } else {
        format!("{} {}", year_emoji(status), year)
    }
}

/// Expands single-letter gender codes.
fn gender_label(value: &str) -> &str {
    match value {
        "M" => "Male",
        "F" => "Female",
        "X" => "Other",
        other => other,
    }
}

fn list(values: &[String]) -> String {
    if values.is_empty() {
        EMPTY_LIST.to_string()
    } else {
        values.join(", ")
    }
}
