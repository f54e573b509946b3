mod common;

use httpmock::MockServer;
use reqwest::StatusCode;
use serde_json::json;

use crate::common::client;

#[tokio::test]
async fn supported_api_list_is_served_from_cache_on_repeat_calls() -> anyhow::Result<()> {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/ISteamWebAPIUtil/GetSupportedAPIList/v0001/");
        then.status(StatusCode::OK).json_body(json!({
            "apilist": {
                "interfaces": [{
                    "name": "ISteamUser",
                    "methods": [{
                        "name": "GetPlayerSummaries",
                        "version": 2,
                        "httpmethod": "GET",
                        "parameters": [
                            {
                                "name": "key",
                                "type": "string",
                                "optional": false,
                                "description": "access key"
                            },
                            {
                                "name": "steamids",
                                "type": "string",
                                "optional": false
                            }
                        ]
                    }]
                }]
            }
        }));
    });

    let client = client(&server);
    let interfaces = client.supported_api_list().await?;
    let again = client.supported_api_list().await?;

    assert_eq!(interfaces.len(), 1);
    assert_eq!(interfaces[0].name, "ISteamUser");
    let method = &interfaces[0].methods[0];
    assert_eq!(method.http_method, "GET");
    assert_eq!(method.parameters[0].parameter_type, "string");
    assert_eq!(method.parameters[1].description, None);
    assert_eq!(interfaces, again);
    mock.assert_calls(1);

    Ok(())
}
