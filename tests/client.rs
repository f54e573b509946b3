mod common;

use std::time::Duration;

use httpmock::MockServer;
use reqwest::StatusCode;
use serde_json::json;
use steam_webapi_sdk::error::Kind;
use steam_webapi_sdk::types::SteamId;
use steam_webapi_sdk::{Client, Config};

use crate::common::{API_KEY, client, keyless_client};

const STEAM_ID: SteamId = SteamId(76_561_197_961_279_983);

#[tokio::test]
async fn request_injects_key_and_format() -> anyhow::Result<()> {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/IPlayerService/GetSteamLevel/v1/")
            .query_param("steamid", STEAM_ID.to_string())
            .query_param("key", API_KEY)
            .query_param("format", "json");
        then.status(StatusCode::OK)
            .json_body(json!({ "response": { "player_level": 42 } }));
    });

    let client = client(&server);
    let level = client.steam_level(STEAM_ID).await?;

    assert_eq!(level, 42);
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn missing_key_short_circuits_before_network() -> anyhow::Result<()> {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET);
        then.status(StatusCode::OK).json_body(json!({}));
    });

    let client = keyless_client(&server);
    let err = client.steam_level(STEAM_ID).await.unwrap_err();

    assert_eq!(err.kind(), Kind::NoApiKey);
    mock.assert_calls(0);

    Ok(())
}

mod status_classification {
    use super::*;

    async fn status_error(status: StatusCode) -> steam_webapi_sdk::error::Error {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(httpmock::Method::GET);
            // decodable body, so classification falls through to the status
            then.status(status)
                .json_body(json!({ "response": { "player_level": 0 } }));
        });

        client(&server).steam_level(STEAM_ID).await.unwrap_err()
    }

    #[tokio::test]
    async fn responds_503_as_service_unavailable() {
        let err = status_error(StatusCode::SERVICE_UNAVAILABLE).await;

        assert_eq!(err.kind(), Kind::ServiceUnavailable);
        assert_eq!(err.status_code(), Some(StatusCode::SERVICE_UNAVAILABLE));
    }

    #[tokio::test]
    async fn responds_429_as_rate_limited() {
        let err = status_error(StatusCode::TOO_MANY_REQUESTS).await;

        assert_eq!(err.kind(), Kind::RateLimited);
    }

    #[tokio::test]
    async fn responds_other_statuses_with_the_numeric_code() {
        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR).await;

        assert_eq!(err.kind(), Kind::Status);
        assert_eq!(err.status_code(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn responds_200_with_garbage_body_as_decode() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(httpmock::Method::GET);
            then.status(StatusCode::OK).body("<html>nope</html>");
        });

        let err = client(&server).steam_level(STEAM_ID).await.unwrap_err();

        assert_eq!(err.kind(), Kind::Decode);
    }

    #[tokio::test]
    async fn undecodable_error_body_reports_decode_not_status() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(httpmock::Method::GET);
            then.status(StatusCode::INTERNAL_SERVER_ERROR)
                .body("<html>Internal Server Error</html>");
        });

        let err = client(&server).steam_level(STEAM_ID).await.unwrap_err();

        // body decoding happens before the status check
        assert_eq!(err.kind(), Kind::Decode);
    }
}

mod timeouts {
    use super::*;

    #[tokio::test]
    async fn slow_response_times_out_as_transport() -> anyhow::Result<()> {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(httpmock::Method::GET);
            then.status(StatusCode::OK)
                .delay(Duration::from_secs(5))
                .json_body(json!({ "response": { "player_level": 1 } }));
        });

        let client = Client::new(
            &server.base_url(),
            Config::builder()
                .api_key(API_KEY)
                .env_fallback(false)
                .timeout(Duration::from_millis(100))
                .build(),
        )?;

        let err = client.steam_level(STEAM_ID).await.unwrap_err();

        assert_eq!(err.kind(), Kind::Transport);

        Ok(())
    }

    #[tokio::test]
    async fn dropping_the_future_cancels_the_call() -> anyhow::Result<()> {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(httpmock::Method::GET);
            then.status(StatusCode::OK)
                .delay(Duration::from_secs(5))
                .json_body(json!({ "response": { "player_level": 1 } }));
        });

        let client = client(&server);
        let result =
            tokio::time::timeout(Duration::from_millis(150), client.steam_level(STEAM_ID)).await;

        assert!(result.is_err(), "call must be abandoned with the future");

        Ok(())
    }
}
