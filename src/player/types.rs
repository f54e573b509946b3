use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{TimestampSeconds, serde_as};

use crate::types::{AppId, SteamId};

/// High-level info about one of the user's recently played games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct RecentGame {
    #[serde(rename = "appid")]
    pub app_id: AppId,
    pub name: String,
    /// Playtime in the past two weeks, in minutes.
    #[serde(rename = "playtime_2weeks", default)]
    pub playtime_two_weeks: Option<i32>,
    /// Total playtime, in minutes.
    pub playtime_forever: i32,
    pub img_icon_url: String,
    #[serde(default)]
    pub img_logo_url: Option<String>,
    #[serde(default)]
    pub playtime_windows_forever: i32,
    #[serde(default)]
    pub playtime_mac_forever: i32,
    #[serde(default)]
    pub playtime_linux_forever: i32,
}

/// Metadata about a game the user owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct OwnedGame {
    #[serde(rename = "appid")]
    pub app_id: AppId,
    pub name: String,
    /// Total playtime, in minutes.
    pub playtime_forever: i32,
    /// The icon's file name, see [`OwnedGame::icon_url`].
    pub img_icon_url: String,
    /// The logo's file name, see [`OwnedGame::logo_url`].
    #[serde(default)]
    pub img_logo_url: Option<String>,
    #[serde(default)]
    pub playtime_windows_forever: i32,
    #[serde(default)]
    pub playtime_mac_forever: i32,
    #[serde(default)]
    pub playtime_linux_forever: i32,
    #[serde(default)]
    pub has_community_visible_stats: Option<bool>,
    /// Playtime in the past two weeks, in minutes.
    #[serde(rename = "playtime_2weeks", default)]
    pub playtime_two_weeks: Option<i32>,
}

impl OwnedGame {
    /// URL of the game's icon image.
    #[must_use]
    pub fn icon_url(&self) -> String {
        media_url(self.app_id, &self.img_icon_url)
    }

    /// URL of the game's logo image, when the API supplied one.
    #[must_use]
    pub fn logo_url(&self) -> Option<String> {
        self.img_logo_url
            .as_deref()
            .map(|logo| media_url(self.app_id, logo))
    }
}

fn media_url(app_id: AppId, file_name: &str) -> String {
    format!(
        "https://media.steampowered.com/steamcommunity/public/images/apps/{app_id}/{file_name}.jpg"
    )
}

/// A badge belonging to a user. No official badge schema is available.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Badge {
    #[serde(rename = "badgeid")]
    pub badge_id: i32,
    pub level: i32,
    /// When the user acquired the badge.
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub completion_time: DateTime<Utc>,
    /// Experience the badge contributes toward the account's `player_xp`.
    pub xp: i32,
    /// How many people hold this badge.
    pub scarcity: i32,
    /// Present when the badge relates to an app (trading cards).
    #[serde(rename = "appid", default)]
    pub app_id: Option<AppId>,
    #[serde(rename = "communityitemid", default)]
    pub community_item_id: Option<String>,
    #[serde(default)]
    pub border_color: Option<i32>,
}

/// A user's badges plus current level progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct BadgeStatus {
    #[serde(default)]
    pub badges: Vec<Badge>,
    pub player_xp: i32,
    pub player_level: i32,
    pub player_xp_needed_to_level_up: i32,
    pub player_xp_needed_current_level: i32,
}

/// Completion state of one community badge quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct BadgeQuestStatus {
    #[serde(rename = "questid")]
    pub quest_id: i32,
    pub completed: bool,
}

/// A single named stat from a user's per-game stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct PlayerStat {
    pub name: String,
    pub value: i64,
}

/// A single achievement flag from a user's per-game stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct PlayerAchievement {
    pub name: String,
    pub achieved: i32,
}

/// The user's in-game stats as name/value pairs along with achievements.
/// Depends on account visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct PlayerStats {
    #[serde(rename = "steamID")]
    pub steam_id: SteamId,
    #[serde(rename = "gameName")]
    pub game_name: String,
    #[serde(default)]
    pub stats: Vec<PlayerStat>,
    #[serde(default)]
    pub achievements: Vec<PlayerAchievement>,
}
