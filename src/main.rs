mod bot;
mod config;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;

use crate::{
    config::Config, error::AppError, scheduler::verification_cleanup,
    service::verification::VerificationService, state::BotState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing()?;

    let config = Config::from_env()?;

    let catalog = startup::load_catalog(&config)?;
    tracing::info!("Loaded {} champions", catalog.len());

    let http_client = startup::setup_reqwest_client()?;
    let verification = VerificationService::new();

    verification_cleanup::start_scheduler(verification.clone()).await?;

    let state = BotState::new(config, catalog, http_client, verification);

    bot::start::start_bot(state).await
}
