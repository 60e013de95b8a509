//! Steam Web API and Store API client.
//!
//! Thin wrapper over `reqwest` for the two endpoints used by `/achievements`. Bodies are
//! read as text first so that error statuses can be reported together with what Steam
//! returned, then decoded with `serde_json`.

use std::collections::HashMap;

use url::Url;

use crate::{
    error::{steam::SteamError, AppError},
    model::steam::{
        PlayerAchievementsResponse, SteamAchievement, SteamAppDetails, StoreAppDetailsResponse,
    },
};

const PLAYER_ACHIEVEMENTS_URL: &str =
    "https://api.steampowered.com/ISteamUserStats/GetPlayerAchievements/v1/";
const APP_DETAILS_URL: &str = "https://store.steampowered.com/api/appdetails";

const ACHIEVEMENTS_SERVICE: &str = "Steam achievements";
const STORE_SERVICE: &str = "Steam store";

pub struct SteamService<'a> {
    http_client: &'a reqwest::Client,
}

impl<'a> SteamService<'a> {
    pub fn new(http_client: &'a reqwest::Client) -> Self {
        Self { http_client }
    }

    /// Fetches a player's achievements for one game.
    ///
    /// # Arguments
    /// - `api_key` - Steam Web API key
    /// - `app_id` - Steam application ID of the game
    /// - `steam_id` - 64-bit SteamID of the player
    ///
    /// # Returns
    /// - `Ok(Vec<SteamAchievement>)` - Achievements, empty when Steam lists none
    /// - `Err(AppError::SteamErr)` - Non-success status or undecodable body
    /// - `Err(AppError::ReqwestErr)` - Request failed to complete
    pub async fn fetch_player_achievements(
        &self,
        api_key: &str,
        app_id: u64,
        steam_id: &str,
    ) -> Result<Vec<SteamAchievement>, AppError> {
        let url = player_achievements_url(api_key, app_id, steam_id)?;
        let body = self.get_text(url, ACHIEVEMENTS_SERVICE).await?;

        Ok(parse_player_achievements(&body)?)
    }

    /// Fetches store metadata for a game.
    ///
    /// # Returns
    /// - `Ok(Some(SteamAppDetails))` - Store entry found
    /// - `Ok(None)` - Steam reports no store entry for the app
    /// - `Err(AppError)` - Non-success status, undecodable body, or transport failure
    pub async fn fetch_app_details(&self, app_id: u64) -> Result<Option<SteamAppDetails>, AppError> {
        let url = Url::parse_with_params(APP_DETAILS_URL, &[("appids", app_id.to_string())])
            .map_err(SteamError::from)?;
        let body = self.get_text(url, STORE_SERVICE).await?;

        Ok(parse_app_details(app_id, &body)?)
    }

    async fn get_text(&self, url: Url, service: &'static str) -> Result<String, AppError> {
        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("{} returned {}", service, status);
            return Err(SteamError::Status {
                service,
                status: status.as_u16(),
                body,
            }
            .into());
        }

        Ok(body)
    }
}

fn player_achievements_url(api_key: &str, app_id: u64, steam_id: &str) -> Result<Url, SteamError> {
    Ok(Url::parse_with_params(
        PLAYER_ACHIEVEMENTS_URL,
        &[
            ("appid", app_id.to_string()),
            ("key", api_key.to_string()),
            ("steamid", steam_id.to_string()),
        ],
    )?)
}

/// Decodes a `GetPlayerAchievements` body; missing stats or achievements mean none.
pub(crate) fn parse_player_achievements(body: &str) -> Result<Vec<SteamAchievement>, SteamError> {
    let response: PlayerAchievementsResponse =
        serde_json::from_str(body).map_err(|source| SteamError::Decode {
            service: ACHIEVEMENTS_SERVICE,
            source,
        })?;

    Ok(response
        .playerstats
        .and_then(|stats| stats.achievements)
        .unwrap_or_default())
}

/// Decodes an `appdetails` body for `app_id`.
///
/// A missing entry, `success: false`, or absent `data` all mean the store has nothing to
/// show. A missing name falls back to `"App {id}"`.
pub(crate) fn parse_app_details(app_id: u64, body: &str) -> Result<Option<SteamAppDetails>, SteamError> {
    let mut response: HashMap<String, StoreAppDetailsResponse> = serde_json::from_str(body)
        .map_err(|source| SteamError::Decode {
            service: STORE_SERVICE,
            source,
        })?;

    let Some(entry) = response.remove(&app_id.to_string()) else {
        return Ok(None);
    };

    let Some(data) = entry.data.filter(|_| entry.success) else {
        return Ok(None);
    };

    Ok(Some(SteamAppDetails {
        id: app_id,
        name: data.name.unwrap_or_else(|| format!("App {}", app_id)),
        header_image: data.header_image,
    }))
}
