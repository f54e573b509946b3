//! `ISteamWebAPIUtil` endpoints: introspection over the API itself.
//!
//! The supported-API listing is large and effectively static, so
//! [`crate::Client::supported_api_list`] serves repeat calls from the
//! result cache.

mod client;
pub mod types;
