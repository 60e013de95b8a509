//! Pending member verifications.
//!
//! When a member joins, the bot posts a message with a verification button and records
//! who it is meant for. Entries live in memory for two minutes. A click or an answer
//! outside that window is rejected, and the scheduled sweep drops whatever nobody
//! answered.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

/// Time-to-live for a pending verification in seconds.
pub const VERIFICATION_TTL_SECONDS: u64 = 120;

/// Stored verification with owner and expiration timestamp.
#[derive(Debug, Clone, Copy)]
struct PendingVerification {
    user_id: u64,
    expires_at: Instant,
}

impl PendingVerification {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Outcome of looking up a verification for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationStatus {
    /// Entry exists, belongs to the user, and has not expired.
    Valid,
    /// No entry for this message.
    Missing,
    /// Entry belongs to another member.
    WrongUser,
    /// Entry existed but its time ran out. It has been removed.
    Expired,
}

/// Service tracking verification messages that are waiting for an answer.
///
/// Keyed by the Discord message ID of the verification prompt. Clones share the same
/// store, so the event handler and the cleanup job see the same entries.
#[derive(Clone)]
pub struct VerificationService {
    pending: Arc<RwLock<HashMap<u64, PendingVerification>>>,
    ttl: Duration,
}

impl VerificationService {
    /// Creates an empty service with the default two-minute TTL.
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(VERIFICATION_TTL_SECONDS))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            pending: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Records a verification prompt for `user_id`.
    ///
    /// Registering the same message again restarts its timer.
    ///
    /// # Arguments
    /// - `message_id` - ID of the message carrying the verification button
    /// - `user_id` - Member the prompt was posted for
    pub async fn register(&self, message_id: u64, user_id: u64) {
        let entry = PendingVerification {
            user_id,
            expires_at: Instant::now() + self.ttl,
        };

        self.pending.write().await.insert(message_id, entry);
    }

    /// Checks whether `user_id` may act on the verification for `message_id`.
    ///
    /// Checks run in order: existence, ownership, expiry. An expired entry is removed
    /// as a side effect. A valid entry is left in place.
    ///
    /// # Returns
    /// - `VerificationStatus` - Outcome of the lookup
    pub async fn check(&self, message_id: u64, user_id: u64) -> VerificationStatus {
        let mut pending = self.pending.write().await;
        Self::check_locked(&mut pending, message_id, user_id)
    }

    /// Checks the verification like [`check`](Self::check) and consumes it when valid.
    ///
    /// Used once the member answered correctly, so a second answer finds nothing.
    pub async fn complete(&self, message_id: u64, user_id: u64) -> VerificationStatus {
        let mut pending = self.pending.write().await;
        let status = Self::check_locked(&mut pending, message_id, user_id);

        if status == VerificationStatus::Valid {
            pending.remove(&message_id);
        }

        status
    }

    /// Removes every expired entry.
    ///
    /// # Returns
    /// - `usize` - Number of entries removed
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut pending = self.pending.write().await;
        let before = pending.len();

        pending.retain(|_, entry| !entry.is_expired(now));

        before - pending.len()
    }

    fn check_locked(
        pending: &mut HashMap<u64, PendingVerification>,
        message_id: u64,
        user_id: u64,
    ) -> VerificationStatus {
        let Some(entry) = pending.get(&message_id).copied() else {
            return VerificationStatus::Missing;
        };

        if entry.user_id != user_id {
            return VerificationStatus::WrongUser;
        }

        if entry.is_expired(Instant::now()) {
            pending.remove(&message_id);
            return VerificationStatus::Expired;
        }

        VerificationStatus::Valid
    }

    /// Number of stored entries, expired or not.
    #[cfg(test)]
    pub async fn pending_count(&self) -> usize {
        self.pending.read().await.len()
    }
}

impl Default for VerificationService {
    fn default() -> Self {
        Self::new()
    }
}
