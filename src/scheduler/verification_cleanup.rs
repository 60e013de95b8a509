use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::verification::VerificationService};

/// Cron expression for the sweep: every five seconds.
const CLEANUP_SCHEDULE: &str = "*/5 * * * * *";

/// Starts the verification cleanup scheduler
///
/// Drops pending verifications whose two-minute window passed without an answer.
///
/// # Arguments
/// - `verification`: Store shared with the event handler
///
/// # Returns
/// - `Ok(())` - Scheduler running in the background
/// - `Err(AppError::SchedulerErr)` - Job could not be created or scheduler failed to start
pub async fn start_scheduler(verification: VerificationService) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(CLEANUP_SCHEDULE, move |_uuid, _lock| {
        let verification = verification.clone();

        Box::pin(async move {
            remove_expired(&verification).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Verification cleanup scheduler started");

    Ok(())
}

/// Runs one sweep and logs how many entries it removed.
async fn remove_expired(verification: &VerificationService) -> usize {
    let removed = verification.purge_expired().await;

    if removed > 0 {
        tracing::info!("Removed {} expired verification(s)", removed);
    }

    removed
}
