use std::fmt::Write as _;
use std::net::IpAddr;

use serde::Deserialize;

use crate::apps::types::{App, NewsItem, NewsRequest, Server, ServerAtAddress, VersionCheckInfo};
use crate::cache::{CacheKey, CacheValue};
use crate::error::Error;
use crate::types::AppId;
use crate::{Client, Result};

impl Client {
    /// Full list of every publicly facing program in the store/library.
    ///
    /// The catalogue is static content; results are cached and repeat
    /// calls within the cache TTL issue no network request.
    pub async fn app_list(&self) -> Result<Vec<App>> {
        #[derive(Deserialize)]
        struct Inner {
            apps: Vec<App>,
        }
        #[derive(Deserialize)]
        struct Envelope {
            #[serde(rename = "applist")]
            app_list: Inner,
        }

        if let Some(CacheValue::Apps(apps)) = self.cache().get(&CacheKey::AppList) {
            return Ok(apps);
        }

        let envelope: Envelope = self.get("/ISteamApps/GetAppList/v2", &[]).await?;
        let apps = envelope.app_list.apps;
        self.cache()
            .set(CacheKey::AppList, CacheValue::Apps(apps.clone()), None);
        Ok(apps)
    }

    /// Shows all steam-compatible servers related to an IPv4 address.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Kind::InvalidResponse`] when the payload's
    /// success flag reports failure despite HTTP 200.
    pub async fn servers_at_address(&self, addr: IpAddr) -> Result<Vec<ServerAtAddress>> {
        const PATH: &str = "/ISteamApps/GetServersAtAddress/v0001";

        #[derive(Deserialize)]
        struct Inner {
            success: bool,
            #[serde(default)]
            servers: Vec<ServerAtAddress>,
        }
        #[derive(Deserialize)]
        struct Envelope {
            response: Inner,
        }

        let envelope: Envelope = self.get(PATH, &[("addr", addr.to_string())]).await?;
        if !envelope.response.success {
            return Err(Error::invalid_response(PATH));
        }
        Ok(envelope.response.servers)
    }

    /// Checks whether a given app version is the most current available.
    pub async fn up_to_date_check(&self, app_id: AppId, version: u32) -> Result<VersionCheckInfo> {
        const PATH: &str = "/ISteamApps/UpToDateCheck/v1";

        #[derive(Deserialize)]
        struct Envelope {
            response: VersionCheckInfo,
        }

        let envelope: Envelope = self
            .get(
                PATH,
                &[
                    ("appid", app_id.to_string()),
                    ("version", version.to_string()),
                ],
            )
            .await?;
        if !envelope.response.success {
            return Err(Error::invalid_response(PATH));
        }
        Ok(envelope.response)
    }

    /// News feed for an app, optionally filtered.
    pub async fn news_for_app(
        &self,
        app_id: AppId,
        options: &NewsRequest,
    ) -> Result<Vec<NewsItem>> {
        #[derive(Deserialize)]
        struct Inner {
            #[serde(rename = "newsitems")]
            news_items: Vec<NewsItem>,
        }
        #[derive(Deserialize)]
        struct Envelope {
            #[serde(rename = "appnews")]
            app_news: Inner,
        }

        let mut query = vec![("appid", app_id.to_string())];
        if let Some(max_length) = options.max_length.filter(|v| *v > 0) {
            query.push(("maxlength", max_length.to_string()));
        }
        if let Some(count) = options.count.filter(|v| *v > 0) {
            query.push(("count", count.to_string()));
        }
        if let Some(end_date) = options.end_date.filter(|v| *v > 0) {
            query.push(("end_date", end_date.to_string()));
        }
        if !options.feeds.is_empty() {
            query.push(("feeds", options.feeds.join(",")));
        }

        let envelope: Envelope = self.get("/ISteamNews/GetNewsForApp/v0002", &query).await?;
        Ok(envelope.app_news.news_items)
    }

    /// Shows all steam-compatible servers matching the given master-server
    /// filters, e.g. `[("appid", "440"), ("map", "cp_dustbowl")]`.
    pub async fn server_list(&self, filters: &[(String, String)]) -> Result<Vec<Server>> {
        #[derive(Deserialize)]
        struct Inner {
            #[serde(default)]
            servers: Vec<Server>,
        }
        #[derive(Deserialize)]
        struct Envelope {
            response: Inner,
        }

        // Master-server filter syntax: \name\value pairs concatenated.
        let mut filter = String::new();
        for (name, value) in filters {
            let _ = write!(filter, "\\{name}\\{value}");
        }

        let envelope: Envelope = self
            .get(
                "/IGameServersService/GetServerList/v1",
                &[("filter", filter), ("limit", "25000".to_owned())],
            )
            .await?;
        Ok(envelope.response.servers)
    }
}
