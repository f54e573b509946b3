//! The Steam Web API client and its per-instance configuration.
//!
//! Unlike bindings that keep credentials in process-wide globals, every
//! [`Client`] owns its own configuration, so one process can talk to the
//! API with several independently configured clients. The key and language
//! are runtime-mutable behind a read/write lock; each request snapshots
//! them under the read lock.

use std::sync::RwLock;
use std::time::Duration;

use bon::Builder;
use reqwest::{
    Client as ReqwestClient, Method,
    header::{HeaderMap, HeaderValue},
};
use secrecy::{ExposeSecret as _, SecretString};
use serde::de::DeserializeOwned;
use url::Url;

use crate::cache::{DEFAULT_TTL, MemoryCache};
use crate::error::{Error, Kind};
use crate::{COMMUNITY_HOST, Result, STEAM_TOKEN_VAR, WEBAPI_HOST};

/// Ceiling applied to every outbound request, regardless of how long the
/// caller is willing to wait.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

const DEFAULT_LANGUAGE: &str = "en_US";

/// Per-client configuration.
///
/// Every field is optional; the defaults match production use against the
/// public API. An API key can also arrive through the `STEAM_TOKEN`
/// environment variable when none is set here.
///
/// # Example
///
/// ```
/// use steam_webapi_sdk::Config;
///
/// let config = Config::builder()
///     .api_key("0123456789ABCDEF0123456789ABCDEF")
///     .language("de_DE")
///     .build();
/// ```
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct Config {
    /// Steam Web API key: exactly 32 characters, or empty/absent for a
    /// keyless client. See <https://steamcommunity.com/dev/apikey>.
    #[builder(into)]
    pub api_key: Option<String>,
    /// ISO 639-1 language plus ISO 3166-1 alpha-2 country code, e.g.
    /// `en_US`, `de_DE`, `ko_KR`. Exactly 5 characters.
    #[builder(into)]
    pub language: Option<String>,
    /// Per-request timeout ceiling. Defaults to 20 seconds.
    pub timeout: Option<Duration>,
    /// Default expiry for cached static resources. Defaults to 900 seconds.
    pub cache_ttl: Option<Duration>,
    /// Override for the community host used by the group-member scrape.
    #[builder(into)]
    pub community_host: Option<String>,
    /// Whether to consult the `STEAM_TOKEN` environment variable when no
    /// key is configured. Enabled by default.
    #[builder(default = true)]
    pub env_fallback: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

#[derive(Debug)]
struct State {
    api_key: Option<SecretString>,
    language: String,
}

/// HTTP client for the Steam Web API.
///
/// Endpoint methods are grouped by interface into the [`crate::user`],
/// [`crate::apps`], [`crate::player`], [`crate::econ`], [`crate::util`],
/// and [`crate::community`] modules; all of them funnel through the same
/// request path which injects the key and output format, enforces the
/// request timeout, and classifies failures into [`crate::error::Kind`].
///
/// # Example
///
/// ```no_run
/// use steam_webapi_sdk::{Client, Config};
/// use steam_webapi_sdk::types::SteamId;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::default();
/// let summaries = client
///     .player_summaries(&[SteamId(76561197961279983)])
///     .await?;
/// for player in summaries {
///     println!("{}: {}", player.steam_id, player.persona_name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    host: Url,
    community_host: Url,
    http: ReqwestClient,
    state: RwLock<State>,
    cache: MemoryCache,
    timeout: Duration,
}

impl Default for Client {
    fn default() -> Self {
        Client::new(WEBAPI_HOST, Config::default())
            .expect("Client with default endpoint should succeed")
    }
}

impl Client {
    /// Creates a client against a custom host, usually only needed for
    /// tests; production callers want [`Client::default`].
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Configuration`] error when the configured key or
    /// language fails shape validation, and an error when either host URL
    /// is invalid or the HTTP client cannot be constructed.
    pub fn new(host: &str, config: Config) -> Result<Client> {
        let mut headers = HeaderMap::new();
        headers.insert("User-Agent", HeaderValue::from_static("steam-webapi-sdk"));
        headers.insert("Accept", HeaderValue::from_static("*/*"));
        headers.insert("Connection", HeaderValue::from_static("keep-alive"));
        let http = ReqwestClient::builder().default_headers(headers).build()?;

        let api_key = match config.api_key {
            Some(key) => {
                validate_key(&key)?;
                (!key.is_empty()).then(|| SecretString::from(key))
            }
            None if config.env_fallback => key_from_env(),
            None => None,
        };

        let language = match config.language {
            Some(lang) => {
                validate_language(&lang)?;
                lang.to_lowercase()
            }
            None => DEFAULT_LANGUAGE.to_owned(),
        };

        Ok(Self {
            host: Url::parse(host)?,
            community_host: Url::parse(
                config.community_host.as_deref().unwrap_or(COMMUNITY_HOST),
            )?,
            http,
            state: RwLock::new(State { api_key, language }),
            cache: MemoryCache::new(config.cache_ttl.unwrap_or(DEFAULT_TTL)),
            timeout: config.timeout.unwrap_or(REQUEST_TIMEOUT),
        })
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Replaces the API key used for requests. An empty string clears it.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Configuration`] error for keys that are neither
    /// empty nor exactly 32 characters; the previous key is kept.
    pub fn set_key(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        let mut state = self.state.write().expect("config lock poisoned");
        state.api_key = (!key.is_empty()).then(|| SecretString::from(key.to_owned()));
        Ok(())
    }

    /// Replaces the language used for results that carry translations.
    /// The value is normalized to lowercase.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Configuration`] error for values that are not
    /// exactly 5 characters; the previous language is kept.
    pub fn set_lang(&self, language: &str) -> Result<()> {
        validate_language(language)?;
        let mut state = self.state.write().expect("config lock poisoned");
        state.language = language.to_lowercase();
        Ok(())
    }

    /// Returns the currently configured API key, if any.
    #[must_use]
    pub fn api_key(&self) -> Option<String> {
        let state = self.state.read().expect("config lock poisoned");
        state
            .api_key
            .as_ref()
            .map(|key| key.expose_secret().to_owned())
    }

    /// Returns the currently configured language tag.
    #[must_use]
    pub fn language(&self) -> String {
        let state = self.state.read().expect("config lock poisoned");
        state.language.clone()
    }

    pub(crate) fn http(&self) -> &ReqwestClient {
        &self.http
    }

    pub(crate) fn community_host(&self) -> &Url {
        &self.community_host
    }

    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn cache(&self) -> &MemoryCache {
        &self.cache
    }

    /// Issues one authenticated GET against the Web API.
    ///
    /// Fails fast with [`Kind::NoApiKey`] before any network I/O when no
    /// key is configured. The key and `format=json` are appended to the
    /// endpoint-specific query parameters on every call.
    pub(crate) async fn get<Res: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Res> {
        let key = {
            let state = self.state.read().expect("config lock poisoned");
            let Some(key) = state.api_key.as_ref() else {
                return Err(Error::new(Kind::NoApiKey));
            };
            key.expose_secret().to_owned()
        };

        let request = self
            .http
            .request(Method::GET, self.host.join(path)?)
            .query(query)
            .query(&[("key", key.as_str()), ("format", "json")])
            .timeout(self.timeout)
            .build()?;

        crate::request(&self.http, request).await
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.len() != 32 && !key.is_empty() {
        return Err(Error::configuration(
            "api key must be 32 chars, or empty to remove it",
        ));
    }
    Ok(())
}

fn validate_language(language: &str) -> Result<()> {
    if language.len() != 5 {
        return Err(Error::configuration(
            "language must be an ISO 639-1 code plus country code, e.g. en_US",
        ));
    }
    Ok(())
}

/// Reads `STEAM_TOKEN` for a default key. A malformed value from the
/// environment is ignored rather than failing construction.
fn key_from_env() -> Option<SecretString> {
    let key = std::env::var(STEAM_TOKEN_VAR).ok()?;
    if key.is_empty() {
        return None;
    }
    if validate_key(&key).is_err() {
        #[cfg(feature = "tracing")]
        tracing::warn!("ignoring invalid api key from {STEAM_TOKEN_VAR}");
        return None;
    }
    Some(SecretString::from(key))
}
