use serde::Deserialize;

use crate::error::Error;
use crate::types::{GroupId, SteamId};
use crate::user::types::{Friend, PlayerBanState, PlayerSummary};
use crate::{Client, Result};

const PROFILE_URL_MARKER: &str = "steamcommunity.com/profiles/";
const VANITY_URL_MARKER: &str = "steamcommunity.com/id/";
const RESOLVE_VANITY_PATH: &str = "/ISteamUser/ResolveVanityURL/v0001/";

/// A vanity query after local normalization: either already a numeric id,
/// or a name that still needs remote resolution.
enum VanityQuery {
    Resolved(SteamId),
    Name(String),
}

impl Client {
    /// Fetches player summaries for up to 100 accounts in one call.
    ///
    /// # Errors
    ///
    /// Fails validation with zero or more than 100 ids; otherwise returns
    /// any error from the request path.
    pub async fn player_summaries(&self, steam_ids: &[SteamId]) -> Result<Vec<PlayerSummary>> {
        #[derive(Deserialize)]
        struct Inner {
            players: Vec<PlayerSummary>,
        }
        #[derive(Deserialize)]
        struct Envelope {
            response: Inner,
        }

        validate_batch(steam_ids)?;
        let envelope: Envelope = self
            .get(
                "/ISteamUser/GetPlayerSummaries/v0002/",
                &[("steamids", join_ids(steam_ids))],
            )
            .await?;
        Ok(envelope.response.players)
    }

    /// Fetches ban states for up to 100 accounts in one call. This
    /// includes bans that have aged out and no longer show on profiles.
    ///
    /// # Errors
    ///
    /// Fails validation with zero or more than 100 ids; otherwise returns
    /// any error from the request path.
    pub async fn player_bans(&self, steam_ids: &[SteamId]) -> Result<Vec<PlayerBanState>> {
        #[derive(Deserialize)]
        struct Envelope {
            players: Vec<PlayerBanState>,
        }

        validate_batch(steam_ids)?;
        let envelope: Envelope = self
            .get(
                "/ISteamUser/GetPlayerBans/v1/",
                &[("steamids", join_ids(steam_ids))],
            )
            .await?;
        Ok(envelope.players)
    }

    /// Lists the public groups a user belongs to.
    pub async fn user_group_list(&self, steam_id: SteamId) -> Result<Vec<GroupId>> {
        #[derive(Deserialize)]
        struct Group {
            gid: GroupId,
        }
        #[derive(Deserialize)]
        struct Inner {
            #[serde(default)]
            groups: Vec<Group>,
        }
        #[derive(Deserialize)]
        struct Envelope {
            response: Inner,
        }

        let envelope: Envelope = self
            .get(
                "/ISteamUser/GetUserGroupList/v1",
                &[("steamid", steam_id.to_string())],
            )
            .await?;
        Ok(envelope.response.groups.into_iter().map(|g| g.gid).collect())
    }

    /// Lists a user's friends. An empty list is usually a privacy setting,
    /// not an error.
    pub async fn friend_list(&self, steam_id: SteamId) -> Result<Vec<Friend>> {
        #[derive(Deserialize)]
        struct Inner {
            #[serde(default)]
            friends: Vec<Friend>,
        }
        #[derive(Deserialize)]
        struct Envelope {
            #[serde(rename = "friendslist")]
            friends_list: Inner,
        }

        let envelope: Envelope = self
            .get(
                "/ISteamUser/GetFriendList/v1",
                &[("steamid", steam_id.to_string())],
            )
            .await?;
        Ok(envelope.friends_list.friends)
    }

    /// Resolves a vanity name or profile URL to a 64-bit account id.
    ///
    /// Accepts a bare vanity name, a `…/id/<name>` profile URL, or a
    /// `…/profiles/<id>` URL. The last form is parsed locally without any
    /// network call; the id must render as exactly 17 decimal digits.
    ///
    /// # Errors
    ///
    /// Fails validation for malformed profile URLs, and with
    /// [`crate::error::Kind::InvalidResponse`] when the API reports no
    /// match for the vanity name.
    pub async fn resolve_vanity_url(&self, query: &str) -> Result<SteamId> {
        #[derive(Deserialize)]
        struct Inner {
            #[serde(rename = "steamid", default)]
            steam_id: Option<SteamId>,
            success: i32,
        }
        #[derive(Deserialize)]
        struct Envelope {
            response: Inner,
        }

        let name = match parse_vanity_query(query)? {
            VanityQuery::Resolved(steam_id) => return Ok(steam_id),
            VanityQuery::Name(name) => name,
        };

        let envelope: Envelope = self
            .get(RESOLVE_VANITY_PATH, &[("vanityurl", name)])
            .await?;
        if envelope.response.success != 1 {
            return Err(Error::invalid_response(RESOLVE_VANITY_PATH));
        }
        envelope
            .response
            .steam_id
            .ok_or_else(|| Error::invalid_response(RESOLVE_VANITY_PATH))
    }
}

fn validate_batch(steam_ids: &[SteamId]) -> Result<()> {
    if steam_ids.is_empty() {
        return Err(Error::validation("too few steam ids, min 1"));
    }
    if steam_ids.len() > 100 {
        return Err(Error::validation("too many steam ids, max 100"));
    }
    Ok(())
}

fn join_ids(steam_ids: &[SteamId]) -> String {
    steam_ids
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn parse_vanity_query(query: &str) -> Result<VanityQuery> {
    let query = query.replace(' ', "");

    if let Some(index) = query.find(PROFILE_URL_MARKER) {
        let tail = query[index + PROFILE_URL_MARKER.len()..].trim_end_matches('/');
        let id: u64 = tail
            .parse()
            .map_err(|e| Error::with_source(crate::error::Kind::Validation, e))?;
        if id.to_string().len() != 17 {
            return Err(Error::validation("profile id must be 17 digits"));
        }
        return Ok(VanityQuery::Resolved(SteamId(id)));
    }

    if let Some(index) = query.find(VANITY_URL_MARKER) {
        let name = query[index + VANITY_URL_MARKER.len()..].trim_end_matches('/');
        return Ok(VanityQuery::Name(name.to_owned()));
    }

    Ok(VanityQuery::Name(query))
}
