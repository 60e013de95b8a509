use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};

use crate::error::AppError;

pub const NAME: &str = "hello";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Replies with Hello World")
}

pub async fn run(ctx: &Context, interaction: &CommandInteraction) -> Result<(), AppError> {
    let message = CreateInteractionResponseMessage::new().content("Hello World");

    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}
