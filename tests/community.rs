mod common;

use httpmock::MockServer;
use reqwest::StatusCode;
use serde_json::json;
use steam_webapi_sdk::error::Kind;
use steam_webapi_sdk::types::{GroupId, SteamId};
use steam_webapi_sdk::{Client, Config};

const GROUP_ID: GroupId = GroupId(103_582_791_429_521_412);

fn community_client(server: &MockServer) -> Client {
    Client::new(
        steam_webapi_sdk::WEBAPI_HOST,
        Config::builder()
            .community_host(server.base_url())
            .env_fallback(false)
            .build(),
    )
    .unwrap()
}

#[tokio::test]
async fn group_members_parses_the_member_list_xml() -> anyhow::Result<()> {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path(format!("/gid/{GROUP_ID}/memberslistxml/"))
            .query_param("xml", "1");
        then.status(StatusCode::OK).body(
            r"<?xml version='1.0' encoding='UTF-8' standalone='yes'?>
            <memberList>
              <groupID64>103582791429521412</groupID64>
              <memberCount>2</memberCount>
              <members>
                <steamID64>76561197961279983</steamID64>
                <steamID64>76561197961279984</steamID64>
              </members>
            </memberList>",
        );
    });

    let members = community_client(&server).group_members(GROUP_ID).await?;

    assert_eq!(
        members,
        vec![
            SteamId(76_561_197_961_279_983),
            SteamId(76_561_197_961_279_984)
        ]
    );
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn group_members_needs_no_api_key() -> anyhow::Result<()> {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path(format!("/gid/{GROUP_ID}/memberslistxml/"));
        then.status(StatusCode::OK)
            .body("<steamID64>76561197961279983</steamID64>");
    });

    // community requests bypass the key check entirely
    let members = community_client(&server).group_members(GROUP_ID).await?;

    assert_eq!(members, vec![SteamId(76_561_197_961_279_983)]);
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn invalid_group_id_fails_before_any_network_call() -> anyhow::Result<()> {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET);
        then.status(StatusCode::OK).body("");
    });

    let err = community_client(&server)
        .group_members(GroupId(42))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Kind::Validation);
    mock.assert_calls(0);

    Ok(())
}

#[tokio::test]
async fn body_without_members_yields_an_empty_list() -> anyhow::Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path(format!("/gid/{GROUP_ID}/memberslistxml/"));
        then.status(StatusCode::OK)
            .json_body(json!({ "error": "no such group" }));
    });

    let members = community_client(&server).group_members(GROUP_ID).await?;

    assert!(members.is_empty());

    Ok(())
}
