#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod apps;
pub(crate) mod cache;
pub mod client;
pub mod community;
pub mod econ;
pub mod error;
pub mod player;
pub(crate) mod serde_helpers;
pub mod types;
pub mod user;
pub mod util;

use reqwest::{Client as ReqwestClient, Request, StatusCode};
use serde::de::DeserializeOwned;

pub use crate::client::{Client, Config};
use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Default host for the Steam Web API.
pub const WEBAPI_HOST: &str = "https://api.steampowered.com";

/// Default host for community-site requests (group member lists).
pub const COMMUNITY_HOST: &str = "https://steamcommunity.com";

/// Environment variable consulted for a default API key when none is
/// supplied through [`Config`]. See <https://steamcommunity.com/dev/apikey>.
pub const STEAM_TOKEN_VAR: &str = "STEAM_TOKEN";

/// Executes a prepared request and classifies the outcome.
///
/// The body is decoded before the status code is inspected, so a malformed
/// body yields [`error::Kind::Decode`] even on an error status. After a
/// successful decode, 503 maps to [`error::Kind::ServiceUnavailable`],
/// 429 to [`error::Kind::RateLimited`], and any other non-200 status to
/// [`error::Kind::Status`] carrying the numeric code.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request),
        fields(path = request.url().path(), status_code)
    )
)]
pub(crate) async fn request<Response: DeserializeOwned>(
    client: &ReqwestClient,
    request: Request,
) -> Result<Response> {
    let path = request.url().path().to_owned();

    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    let body = response.bytes().await?;
    let value = serde_json::from_slice::<Response>(&body)?;

    if status_code != StatusCode::OK {
        #[cfg(feature = "tracing")]
        tracing::warn!(status = %status_code, path = %path, "API request failed");

        return Err(Error::status(status_code, &path));
    }

    Ok(value)
}
