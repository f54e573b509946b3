//! `IPlayerService` and `ISteamUserStats` endpoints: levels, playtime,
//! badges, and per-game stats.
//!
//! Empty results from these endpoints are usually a privacy setting on
//! the queried account rather than an error.

mod client;
pub mod types;
