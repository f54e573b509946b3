use serde::Deserialize;

use crate::error::Error;
use crate::player::types::{BadgeQuestStatus, BadgeStatus, OwnedGame, PlayerStats, RecentGame};
use crate::types::{AppId, SteamId};
use crate::{Client, Result};

impl Client {
    /// The user's Steam community level.
    pub async fn steam_level(&self, steam_id: SteamId) -> Result<i32> {
        #[derive(Deserialize)]
        struct Inner {
            player_level: i32,
        }
        #[derive(Deserialize)]
        struct Envelope {
            response: Inner,
        }

        let envelope: Envelope = self
            .get(
                "/IPlayerService/GetSteamLevel/v1/",
                &[("steamid", steam_id.to_string())],
            )
            .await?;
        Ok(envelope.response.player_level)
    }

    /// Lists up to ten recently played games. No results is usually a
    /// privacy setting.
    pub async fn recently_played_games(&self, steam_id: SteamId) -> Result<Vec<RecentGame>> {
        #[derive(Deserialize)]
        struct Inner {
            #[serde(default)]
            games: Vec<RecentGame>,
        }
        #[derive(Deserialize)]
        struct Envelope {
            response: Inner,
        }

        let envelope: Envelope = self
            .get(
                "/IPlayerService/GetRecentlyPlayedGames/v1",
                &[
                    ("steamid", steam_id.to_string()),
                    ("count", "10".to_owned()),
                ],
            )
            .await?;
        Ok(envelope.response.games)
    }

    /// Lists all owned games, including played free games. No results is
    /// usually a privacy setting.
    pub async fn owned_games(&self, steam_id: SteamId) -> Result<Vec<OwnedGame>> {
        #[derive(Deserialize)]
        struct Inner {
            #[serde(default)]
            games: Vec<OwnedGame>,
        }
        #[derive(Deserialize)]
        struct Envelope {
            response: Inner,
        }

        let envelope: Envelope = self
            .get(
                "/IPlayerService/GetOwnedGames/v1",
                &[
                    ("steamid", steam_id.to_string()),
                    ("include_appinfo", "true".to_owned()),
                    ("include_played_free_games", "true".to_owned()),
                ],
            )
            .await?;
        Ok(envelope.response.games)
    }

    /// The user's badges and level progress.
    pub async fn badges(&self, steam_id: SteamId) -> Result<BadgeStatus> {
        #[derive(Deserialize)]
        struct Envelope {
            response: BadgeStatus,
        }

        let envelope: Envelope = self
            .get(
                "/IPlayerService/GetBadges/v1",
                &[("steamid", steam_id.to_string())],
            )
            .await?;
        Ok(envelope.response)
    }

    /// Quest completion toward the community badge.
    pub async fn community_badge_progress(
        &self,
        steam_id: SteamId,
    ) -> Result<Vec<BadgeQuestStatus>> {
        #[derive(Deserialize)]
        struct Inner {
            #[serde(default)]
            quests: Vec<BadgeQuestStatus>,
        }
        #[derive(Deserialize)]
        struct Envelope {
            response: Inner,
        }

        let envelope: Envelope = self
            .get(
                "/IPlayerService/GetCommunityBadgeProgress/v1",
                &[("steamid", steam_id.to_string())],
            )
            .await?;
        Ok(envelope.response.quests)
    }

    /// The current number of players for an app.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Kind::InvalidResponse`] when the payload's
    /// result flag reports failure despite HTTP 200.
    pub async fn number_of_current_players(&self, app_id: AppId) -> Result<i32> {
        const PATH: &str = "/ISteamUserStats/GetNumberOfCurrentPlayers/v1";

        #[derive(Deserialize)]
        struct Inner {
            #[serde(default)]
            player_count: i32,
            result: i32,
        }
        #[derive(Deserialize)]
        struct Envelope {
            response: Inner,
        }

        let envelope: Envelope = self.get(PATH, &[("appid", app_id.to_string())]).await?;
        if envelope.response.result != 1 {
            return Err(Error::invalid_response(PATH));
        }
        Ok(envelope.response.player_count)
    }

    /// The user's stats and achievements for one game. Depends on account
    /// visibility.
    pub async fn user_stats_for_game(
        &self,
        steam_id: SteamId,
        app_id: AppId,
    ) -> Result<PlayerStats> {
        #[derive(Deserialize)]
        struct Envelope {
            #[serde(rename = "playerstats")]
            player_stats: PlayerStats,
        }

        let envelope: Envelope = self
            .get(
                "/ISteamUserStats/GetUserStatsForGame/v2",
                &[
                    ("steamid", steam_id.to_string()),
                    ("appid", app_id.to_string()),
                ],
            )
            .await?;
        Ok(envelope.player_stats)
    }
}
