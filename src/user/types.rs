use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use serde_with::{TimestampSeconds, serde_as};

use crate::types::{GroupId, SteamId};

/// The user's current account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
#[non_exhaustive]
pub enum PersonaState {
    /// Also reported for private profiles.
    Offline = 0,
    Online = 1,
    Busy = 2,
    Away = 3,
    Snooze = 4,
    LookingForTrade = 5,
    LookingToPlay = 6,
}

/// Whether the user has a community profile configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
#[non_exhaustive]
pub enum ProfileState {
    New = 0,
    Configured = 1,
}

/// Whether the profile is visible to unauthenticated callers.
///
/// This API does not authenticate as a friend of the profile, so only
/// `Private` and `Public` occur in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
#[non_exhaustive]
pub enum VisibilityState {
    Private = 1,
    FriendsOnly = 2,
    Public = 3,
}

/// The unaltered player summary as returned by the API. Most fields are
/// omitted by the API on private profiles.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct PlayerSummary {
    #[serde(rename = "steamid")]
    pub steam_id: SteamId,
    #[serde(rename = "communityvisibilitystate")]
    pub community_visibility_state: VisibilityState,
    #[serde(rename = "profilestate", default)]
    pub profile_state: Option<ProfileState>,
    #[serde(rename = "personaname")]
    pub persona_name: String,
    #[serde(rename = "profileurl")]
    pub profile_url: String,
    pub avatar: String,
    #[serde(rename = "avatarmedium")]
    pub avatar_medium: String,
    #[serde(rename = "avatarfull")]
    pub avatar_full: String,
    #[serde(rename = "avatarhash", default)]
    pub avatar_hash: Option<String>,
    #[serde(rename = "personastate")]
    pub persona_state: PersonaState,
    #[serde(rename = "realname", default)]
    pub real_name: Option<String>,
    #[serde(rename = "primaryclanid", default)]
    pub primary_clan_id: Option<GroupId>,
    #[serde(rename = "timecreated", default)]
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub time_created: Option<DateTime<Utc>>,
    /// Bitmask: 1 Offline, 2 Online, 4 Golden, 64 Big Picture,
    /// 256 Web Client, 512 Mobile, 1024 Steam Controller.
    #[serde(rename = "personastateflags", default)]
    pub persona_state_flags: Option<i32>,
    #[serde(rename = "loccountrycode", default)]
    pub loc_country_code: Option<String>,
    #[serde(rename = "locstatecode", default)]
    pub loc_state_code: Option<String>,
    #[serde(rename = "loccityid", default)]
    pub loc_city_id: Option<i32>,
    #[serde(rename = "lastlogoff", default)]
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub last_logoff: Option<DateTime<Utc>>,
    #[serde(rename = "commentpermission", default)]
    pub comment_permission: Option<i32>,
}

/// The user's current economy ban status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum EconBanState {
    None,
    Probation,
    Banned,
}

/// A player's current account ban status, including bans that have aged
/// out and are hidden on profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct PlayerBanState {
    #[serde(rename = "SteamId")]
    pub steam_id: SteamId,
    pub community_banned: bool,
    #[serde(rename = "VACBanned")]
    pub vac_banned: bool,
    #[serde(rename = "NumberOfVACBans")]
    pub number_of_vac_bans: i32,
    pub days_since_last_ban: i32,
    pub number_of_game_bans: i32,
    pub economy_ban: EconBanState,
}

/// One entry of a user's friend list.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Friend {
    #[serde(rename = "steamid")]
    pub steam_id: SteamId,
    pub relationship: String,
    #[serde(default)]
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub friend_since: Option<DateTime<Utc>>,
}
