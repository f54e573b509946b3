use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{TimestampSeconds, serde_as};

use crate::serde_helpers::U64FromAny;
use crate::types::{AppId, SteamId};

/// A known program in the store/library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct App {
    #[serde(rename = "appid")]
    pub app_id: AppId,
    pub name: String,
}

/// One server instance running at a queried IP address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ServerAtAddress {
    pub addr: String,
    #[serde(rename = "gmsindex")]
    pub gms_index: i32,
    #[serde(rename = "appid")]
    pub app_id: AppId,
    #[serde(rename = "gamedir")]
    pub game_dir: String,
    pub region: i32,
    pub secure: bool,
    pub lan: bool,
    #[serde(rename = "gameport")]
    pub game_port: i32,
    #[serde(rename = "specport")]
    pub spec_port: i32,
}

/// A server returned from the master server list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Server {
    pub addr: String,
    #[serde(rename = "gameport")]
    pub game_port: i32,
    #[serde(rename = "steamid")]
    pub steam_id: SteamId,
    pub name: String,
    #[serde(rename = "appid")]
    pub app_id: AppId,
    #[serde(rename = "gamedir")]
    pub game_dir: String,
    pub version: String,
    pub product: String,
    pub region: i32,
    pub players: i32,
    pub max_players: i32,
    pub bots: i32,
    pub map: String,
    pub secure: bool,
    pub dedicated: bool,
    pub os: String,
    #[serde(rename = "gametype", default)]
    pub game_type: Option<String>,
}

/// Result of checking whether an installed app version is current.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct VersionCheckInfo {
    pub success: bool,
    pub up_to_date: bool,
    pub version_is_listable: bool,
    #[serde(default)]
    pub required_version: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Optional filters for [`crate::Client::news_for_app`].
#[derive(Debug, Clone, Default, Builder, Serialize)]
#[non_exhaustive]
pub struct NewsRequest {
    /// Maximum length of each news item's contents, 0 for the full body.
    pub max_length: Option<u32>,
    /// Unix timestamp; only news posted before this date is returned.
    pub end_date: Option<u32>,
    /// Maximum number of items to return.
    pub count: Option<u32>,
    /// Restrict results to the named feeds.
    #[builder(default)]
    pub feeds: Vec<String>,
}

/// An individual news entry for an app.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct NewsItem {
    #[serde_as(as = "U64FromAny")]
    pub gid: u64,
    pub title: String,
    pub url: String,
    pub is_external_url: bool,
    pub author: String,
    pub contents: String,
    #[serde(rename = "feedlabel")]
    pub feed_label: String,
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub date: DateTime<Utc>,
    #[serde(rename = "feedname")]
    pub feed_name: String,
    pub feed_type: i32,
    #[serde(rename = "appid")]
    pub app_id: AppId,
    #[serde(default)]
    pub tags: Vec<String>,
}
