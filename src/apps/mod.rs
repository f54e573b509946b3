//! `ISteamApps`, `ISteamNews`, and `IGameServersService` endpoints:
//! the public app catalogue, version checks, game news, and server
//! discovery.
//!
//! ## Available endpoints
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | [`crate::Client::app_list`] | `ISteamApps/GetAppList/v2` |
//! | [`crate::Client::servers_at_address`] | `ISteamApps/GetServersAtAddress/v0001` |
//! | [`crate::Client::up_to_date_check`] | `ISteamApps/UpToDateCheck/v1` |
//! | [`crate::Client::news_for_app`] | `ISteamNews/GetNewsForApp/v0002` |
//! | [`crate::Client::server_list`] | `IGameServersService/GetServerList/v1` |
//!
//! The app catalogue is static content and is served from the result
//! cache after the first fetch.

mod client;
pub mod types;
