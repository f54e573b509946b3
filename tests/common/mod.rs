#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests"
)]
#![allow(
    unused,
    reason = "Helpers are shared across test binaries that each use a subset"
)]

use httpmock::MockServer;
use steam_webapi_sdk::{Client, Config};

/// Shape-valid 32-character key; never sent to the real API.
pub const API_KEY: &str = "0123456789ABCDEF0123456789ABCDEF";

/// A client pointed at the mock server, with a valid key and the
/// environment fallback disabled so `STEAM_TOKEN` on the host cannot
/// leak into tests.
pub fn client(server: &MockServer) -> Client {
    Client::new(
        &server.base_url(),
        Config::builder()
            .api_key(API_KEY)
            .env_fallback(false)
            .build(),
    )
    .unwrap()
}

/// A client with no API key configured.
pub fn keyless_client(server: &MockServer) -> Client {
    Client::new(
        &server.base_url(),
        Config::builder().env_fallback(false).build(),
    )
    .unwrap()
}
