//! Steam Web API and Store API payloads.

use serde::Deserialize;

/// One achievement entry from `ISteamUserStats/GetPlayerAchievements`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SteamAchievement {
    pub apiname: String,
    /// `1` when unlocked, `0` otherwise.
    pub achieved: u8,
    #[serde(default)]
    pub unlocktime: Option<i64>,
}

/// Store metadata for a Steam application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteamAppDetails {
    pub id: u64,
    pub name: String,
    pub header_image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlayerAchievementsResponse {
    pub playerstats: Option<PlayerStats>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlayerStats {
    pub achievements: Option<Vec<SteamAchievement>>,
}

/// Per-application entry of the `appdetails` response, keyed by app id.
#[derive(Debug, Deserialize)]
pub(crate) struct StoreAppDetailsResponse {
    #[serde(default)]
    pub success: bool,
    pub data: Option<StoreAppData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StoreAppData {
    pub name: Option<String>,
    pub header_image: Option<String>,
}

/// Completion of a player's achievements in one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementSummary {
    pub completed: usize,
    pub total: usize,
    /// Completion ratio as a percentage with two decimals, e.g. `"42.86"`.
    pub percentage: String,
}

impl AchievementSummary {
    /// Summarizes a player's achievement list.
    ///
    /// The percentage is rounded half up to two decimals using integer arithmetic.
    ///
    /// # Returns
    /// - `Some(AchievementSummary)` - At least one achievement exists
    /// - `None` - The game has no achievements for this player
    pub fn from_achievements(achievements: &[SteamAchievement]) -> Option<Self> {
        let total = achievements.len();
        if total == 0 {
            return None;
        }

        let completed = achievements.iter().filter(|a| a.achieved == 1).count();
        let hundredths = (completed * 10_000 + total / 2) / total;

        Some(Self {
            completed,
            total,
            percentage: format!("{}.{:02}", hundredths / 100, hundredths % 100),
        })
    }
}
