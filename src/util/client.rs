use serde::Deserialize;

use crate::cache::{CacheKey, CacheValue};
use crate::util::types::ApiInterface;
use crate::{Client, Result};

impl Client {
    /// Lists every interface and method the API exposes to the configured
    /// key. The listing is cached.
    pub async fn supported_api_list(&self) -> Result<Vec<ApiInterface>> {
        #[derive(Deserialize)]
        struct Inner {
            #[serde(default)]
            interfaces: Vec<ApiInterface>,
        }
        #[derive(Deserialize)]
        struct Envelope {
            apilist: Inner,
        }

        if let Some(CacheValue::Interfaces(interfaces)) = self.cache().get(&CacheKey::ApiList) {
            return Ok(interfaces);
        }

        let envelope: Envelope = self
            .get("/ISteamWebAPIUtil/GetSupportedAPIList/v0001/", &[])
            .await?;
        self.cache().set(
            CacheKey::ApiList,
            CacheValue::Interfaces(envelope.apilist.interfaces.clone()),
            None,
        );
        Ok(envelope.apilist.interfaces)
    }
}
