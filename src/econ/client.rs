use serde::Deserialize;
use serde_json::Value;

use crate::cache::{CacheKey, CacheValue};
use crate::econ::types::{Asset, PlayerInventory, SchemaItem, SchemaOverview, StoreMetaData};
use crate::error::Error;
use crate::types::{AppId, SteamId};
use crate::{Client, Result};

impl Client {
    /// The user's inventory for one app. Depends on account visibility.
    pub async fn player_items(&self, steam_id: SteamId, app_id: AppId) -> Result<PlayerInventory> {
        #[derive(Deserialize)]
        struct Envelope {
            result: PlayerInventory,
        }

        let path = format!("/IEconItems_{app_id}/GetPlayerItems/v0001/");
        let envelope: Envelope = self
            .get(&path, &[("SteamID", steam_id.to_string())])
            .await?;
        Ok(envelope.result)
    }

    /// The app's item schema minus the item list itself: qualities,
    /// attributes, item sets, particles, levels, and lookup tables. The
    /// result is cached per app.
    pub async fn schema_overview(&self, app_id: AppId) -> Result<SchemaOverview> {
        #[derive(Deserialize)]
        struct Envelope {
            result: SchemaOverview,
        }

        if let Some(CacheValue::SchemaOverview(overview)) =
            self.cache().get(&CacheKey::SchemaOverview(app_id))
        {
            return Ok(*overview);
        }

        let path = format!("/IEconItems_{app_id}/GetSchemaOverview/v0001/");
        let envelope: Envelope = self.get(&path, &[]).await?;
        self.cache().set(
            CacheKey::SchemaOverview(app_id),
            CacheValue::SchemaOverview(Box::new(envelope.result.clone())),
            None,
        );
        Ok(envelope.result)
    }

    /// All item definitions of the app's schema, merged across the
    /// endpoint's pages. The merged list is cached per app.
    pub async fn schema_items(&self, app_id: AppId) -> Result<Vec<SchemaItem>> {
        #[derive(Deserialize)]
        struct Inner {
            #[serde(default)]
            items: Vec<SchemaItem>,
            #[serde(default)]
            next: u32,
        }
        #[derive(Deserialize)]
        struct Envelope {
            result: Inner,
        }

        if let Some(CacheValue::SchemaItems(items)) =
            self.cache().get(&CacheKey::SchemaItems(app_id))
        {
            return Ok(items);
        }

        let path = format!("/IEconItems_{app_id}/GetSchemaItems/v1/");
        let mut items = Vec::new();
        let mut page: u32 = 0;
        loop {
            let envelope: Envelope = self.get(&path, &[("start", page.to_string())]).await?;
            // A page whose next cursor is 0 terminates the loop before its
            // items are appended.
            if envelope.result.next == 0 {
                break;
            }
            items.extend(envelope.result.items);
            page = envelope.result.next;
        }

        self.cache().set(
            CacheKey::SchemaItems(app_id),
            CacheValue::SchemaItems(items.clone()),
            None,
        );
        Ok(items)
    }

    /// URL of the app's raw `items_game.txt` schema file. The result is
    /// cached per app.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Kind::InvalidResponse`] when the payload's
    /// status flag reports failure despite HTTP 200.
    pub async fn schema_url(&self, app_id: AppId) -> Result<String> {
        #[derive(Deserialize)]
        struct Inner {
            status: i32,
            #[serde(default)]
            items_game_url: String,
        }
        #[derive(Deserialize)]
        struct Envelope {
            result: Inner,
        }

        if let Some(CacheValue::SchemaUrl(url)) = self.cache().get(&CacheKey::SchemaUrl(app_id)) {
            return Ok(url);
        }

        let path = format!("/IEconItems_{app_id}/GetSchemaURL/v0001/");
        let envelope: Envelope = self.get(&path, &[]).await?;
        if envelope.result.status != 1 {
            return Err(Error::invalid_response(&path));
        }

        self.cache().set(
            CacheKey::SchemaUrl(app_id),
            CacheValue::SchemaUrl(envelope.result.items_game_url.clone()),
            None,
        );
        Ok(envelope.result.items_game_url)
    }

    /// Layout of the app's in-game store: tabs, filters, sorting, and
    /// home-page content. The result is cached per app.
    pub async fn store_metadata(&self, app_id: AppId) -> Result<StoreMetaData> {
        #[derive(Deserialize)]
        struct Envelope {
            result: StoreMetaData,
        }

        if let Some(CacheValue::StoreMetaData(metadata)) =
            self.cache().get(&CacheKey::StoreMetaData(app_id))
        {
            return Ok(*metadata);
        }

        let path = format!("/IEconItems_{app_id}/GetStoreMetaData/v0001/");
        let envelope: Envelope = self.get(&path, &[]).await?;
        self.cache().set(
            CacheKey::StoreMetaData(app_id),
            CacheValue::StoreMetaData(Box::new(envelope.result.clone())),
            None,
        );
        Ok(envelope.result)
    }

    /// Asset class info for the given class ids, localized to the
    /// client's configured language.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Kind::InvalidResponse`] when the payload's
    /// success flag reports failure despite HTTP 200.
    pub async fn asset_class_info(
        &self,
        app_id: AppId,
        class_ids: &[u64],
    ) -> Result<Vec<Asset>> {
        const PATH: &str = "/ISteamEconomy/GetAssetClassInfo/v0001/";

        #[derive(Deserialize)]
        struct Envelope {
            result: serde_json::Map<String, Value>,
        }

        let mut query = vec![
            ("appid".to_owned(), app_id.to_string()),
            ("language".to_owned(), self.language()),
            ("class_count".to_owned(), class_ids.len().to_string()),
        ];
        for (i, class_id) in class_ids.iter().enumerate() {
            query.push((format!("classid{i}"), class_id.to_string()));
        }
        let query: Vec<(&str, String)> = query
            .iter()
            .map(|(name, value)| (name.as_str(), value.clone()))
            .collect();

        let mut envelope: Envelope = self.get(PATH, &query).await?;
        if envelope.result.remove("success") != Some(Value::Bool(true)) {
            return Err(Error::invalid_response(PATH));
        }

        envelope
            .result
            .into_iter()
            .map(|(_, value)| serde_json::from_value::<Asset>(value).map_err(Into::into))
            .collect()
    }
}
