//! `IEconItems_{appid}` and `ISteamEconomy` endpoints: player
//! inventories, item schemas, and store metadata.
//!
//! ## Available endpoints
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | [`crate::Client::player_items`] | `IEconItems_{appid}/GetPlayerItems/v0001` |
//! | [`crate::Client::schema_overview`] | `IEconItems_{appid}/GetSchemaOverview/v0001` |
//! | [`crate::Client::schema_items`] | `IEconItems_{appid}/GetSchemaItems/v1` |
//! | [`crate::Client::schema_url`] | `IEconItems_{appid}/GetSchemaURL/v0001` |
//! | [`crate::Client::store_metadata`] | `IEconItems_{appid}/GetStoreMetaData/v0001` |
//! | [`crate::Client::asset_class_info`] | `ISteamEconomy/GetAssetClassInfo/v0001` |
//!
//! The schema and store endpoints return static per-app content and are
//! served from the result cache after the first fetch. `GetSchemaItems`
//! is the only paged endpoint in the API; [`crate::Client::schema_items`]
//! drives the page cursor internally and returns the merged list.

mod client;
pub mod types;
