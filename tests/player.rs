mod common;

use httpmock::MockServer;
use reqwest::StatusCode;
use serde_json::json;
use steam_webapi_sdk::error::Kind;
use steam_webapi_sdk::types::SteamId;

use crate::common::client;

const STEAM_ID: SteamId = SteamId(76_561_197_961_279_983);

#[tokio::test]
async fn steam_level_should_succeed() -> anyhow::Result<()> {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/IPlayerService/GetSteamLevel/v1/")
            .query_param("steamid", STEAM_ID.to_string());
        then.status(StatusCode::OK)
            .json_body(json!({ "response": { "player_level": 17 } }));
    });

    let level = client(&server).steam_level(STEAM_ID).await?;

    assert_eq!(level, 17);
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn recently_played_games_requests_ten() -> anyhow::Result<()> {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/IPlayerService/GetRecentlyPlayedGames/v1")
            .query_param("steamid", STEAM_ID.to_string())
            .query_param("count", "10");
        then.status(StatusCode::OK).json_body(json!({
            "response": {
                "total_count": 1,
                "games": [{
                    "appid": 440,
                    "name": "Team Fortress 2",
                    "playtime_2weeks": 120,
                    "playtime_forever": 5000,
                    "img_icon_url": "e3f595a92552da3d664ad00277fad2107345f743",
                    "playtime_windows_forever": 5000,
                    "playtime_mac_forever": 0,
                    "playtime_linux_forever": 0
                }]
            }
        }));
    });

    let games = client(&server).recently_played_games(STEAM_ID).await?;

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].playtime_two_weeks, Some(120));
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn recently_played_games_empty_response_yields_empty_list() -> anyhow::Result<()> {
    let server = MockServer::start();

    // private accounts return a bare total_count with no games array
    server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/IPlayerService/GetRecentlyPlayedGames/v1");
        then.status(StatusCode::OK)
            .json_body(json!({ "response": { "total_count": 0 } }));
    });

    let games = client(&server).recently_played_games(STEAM_ID).await?;

    assert!(games.is_empty());

    Ok(())
}

#[tokio::test]
async fn owned_games_includes_free_games_and_appinfo() -> anyhow::Result<()> {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/IPlayerService/GetOwnedGames/v1")
            .query_param("steamid", STEAM_ID.to_string())
            .query_param("include_appinfo", "true")
            .query_param("include_played_free_games", "true");
        then.status(StatusCode::OK).json_body(json!({
            "response": {
                "game_count": 1,
                "games": [{
                    "appid": 440,
                    "name": "Team Fortress 2",
                    "playtime_forever": 5000,
                    "img_icon_url": "e3f595a92552da3d664ad00277fad2107345f743"
                }]
            }
        }));
    });

    let games = client(&server).owned_games(STEAM_ID).await?;

    assert_eq!(games.len(), 1);
    assert!(games[0].icon_url().contains("/440/"));
    assert_eq!(games[0].logo_url(), None);
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn badges_should_succeed() -> anyhow::Result<()> {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/IPlayerService/GetBadges/v1")
            .query_param("steamid", STEAM_ID.to_string());
        then.status(StatusCode::OK).json_body(json!({
            "response": {
                "badges": [{
                    "badgeid": 13,
                    "level": 127,
                    "completion_time": 1_622_000_000,
                    "xp": 679,
                    "scarcity": 1_007_347
                }],
                "player_xp": 879,
                "player_level": 9,
                "player_xp_needed_to_level_up": 21,
                "player_xp_needed_current_level": 800
            }
        }));
    });

    let status = client(&server).badges(STEAM_ID).await?;

    assert_eq!(status.player_level, 9);
    assert_eq!(status.badges.len(), 1);
    assert_eq!(status.badges[0].badge_id, 13);
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn community_badge_progress_should_succeed() -> anyhow::Result<()> {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/IPlayerService/GetCommunityBadgeProgress/v1")
            .query_param("steamid", STEAM_ID.to_string());
        then.status(StatusCode::OK).json_body(json!({
            "response": {
                "quests": [
                    { "questid": 115, "completed": true },
                    { "questid": 128, "completed": false }
                ]
            }
        }));
    });

    let quests = client(&server).community_badge_progress(STEAM_ID).await?;

    assert_eq!(quests.len(), 2);
    assert!(quests[0].completed);
    assert!(!quests[1].completed);
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn number_of_current_players_should_succeed() -> anyhow::Result<()> {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/ISteamUserStats/GetNumberOfCurrentPlayers/v1")
            .query_param("appid", "440");
        then.status(StatusCode::OK)
            .json_body(json!({ "response": { "player_count": 23_512, "result": 1 } }));
    });

    let count = client(&server).number_of_current_players(440).await?;

    assert_eq!(count, 23_512);
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn number_of_current_players_failure_flag_reports_invalid_response() -> anyhow::Result<()> {
    let server = MockServer::start();

    // unknown app ids still answer HTTP 200, with result 42
    server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/ISteamUserStats/GetNumberOfCurrentPlayers/v1");
        then.status(StatusCode::OK)
            .json_body(json!({ "response": { "result": 42 } }));
    });

    let err = client(&server)
        .number_of_current_players(999_999_999)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Kind::InvalidResponse);

    Ok(())
}

#[tokio::test]
async fn user_stats_for_game_should_succeed() -> anyhow::Result<()> {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/ISteamUserStats/GetUserStatsForGame/v2")
            .query_param("steamid", STEAM_ID.to_string())
            .query_param("appid", "440");
        then.status(StatusCode::OK).json_body(json!({
            "playerstats": {
                "steamID": "76561197961279983",
                "gameName": "Team Fortress 2",
                "stats": [
                    { "name": "Scout.accum.iPlayTime", "value": 180_000 }
                ],
                "achievements": [
                    { "name": "TF_SCOUT_LONG_DISTANCE_RUNNER", "achieved": 1 }
                ]
            }
        }));
    });

    let stats = client(&server).user_stats_for_game(STEAM_ID, 440).await?;

    assert_eq!(stats.steam_id, STEAM_ID);
    assert_eq!(stats.game_name, "Team Fortress 2");
    assert_eq!(stats.stats[0].value, 180_000);
    assert_eq!(stats.achievements[0].achieved, 1);
    mock.assert();

    Ok(())
}
