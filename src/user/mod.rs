//! `ISteamUser` endpoints: profiles, bans, friends, groups, and vanity
//! URL resolution.
//!
//! ## Available endpoints
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | [`crate::Client::player_summaries`] | `ISteamUser/GetPlayerSummaries/v0002` |
//! | [`crate::Client::player_bans`] | `ISteamUser/GetPlayerBans/v1` |
//! | [`crate::Client::user_group_list`] | `ISteamUser/GetUserGroupList/v1` |
//! | [`crate::Client::friend_list`] | `ISteamUser/GetFriendList/v1` |
//! | [`crate::Client::resolve_vanity_url`] | `ISteamUser/ResolveVanityURL/v0001` |
//!
//! The batch endpoints accept at most 100 ids per call. Vanity resolution
//! recognizes full profile URLs and short-circuits locally when the URL
//! already embeds a numeric 64-bit id.

mod client;
pub mod types;
