//! In-memory result cache for static API resources.
//!
//! A handful of endpoints return content that changes rarely (the full app
//! list, the supported-API listing, per-app item schemas and store
//! metadata). Their results are memoized here so repeat calls skip the
//! network. Entries expire lazily: an entry past its max age behaves as
//! absent on `get` but is only removed when overwritten.

use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::apps::types::App;
use crate::econ::types::{SchemaItem, SchemaOverview, StoreMetaData};
use crate::types::AppId;
use crate::util::types::ApiInterface;

/// Expiry applied when `set` is called without an explicit TTL.
pub(crate) const DEFAULT_TTL: Duration = Duration::from_secs(900);

/// Identifies one cached static resource. Per-app resources embed the
/// application id so different apps never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum CacheKey {
    AppList,
    ApiList,
    StoreMetaData(AppId),
    SchemaUrl(AppId),
    SchemaItems(AppId),
    SchemaOverview(AppId),
}

/// Tagged union over every cached shape. One variant per [`CacheKey`]
/// family keeps the store statically typed; callers pattern-match the
/// variant they stored instead of downcasting.
#[derive(Debug, Clone)]
pub(crate) enum CacheValue {
    Apps(Vec<App>),
    Interfaces(Vec<ApiInterface>),
    StoreMetaData(Box<StoreMetaData>),
    SchemaUrl(String),
    SchemaItems(Vec<SchemaItem>),
    SchemaOverview(Box<SchemaOverview>),
}

#[derive(Debug)]
struct Entry {
    created: Instant,
    max_age: Duration,
    value: CacheValue,
}

impl Entry {
    fn expired(&self) -> bool {
        self.created.elapsed() > self.max_age
    }
}

/// A very basic in-memory cache with per-entry timeouts.
///
/// Reads proceed concurrently with each other; a write excludes readers of
/// the same shard. There is no capacity bound and no eviction thread —
/// entries live until overwritten or process exit.
#[derive(Debug)]
pub(crate) struct MemoryCache {
    entries: DashMap<CacheKey, Entry>,
    default_ttl: Duration,
}

impl MemoryCache {
    pub(crate) fn new(default_ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            default_ttl,
        }
    }

    /// Retrieves a cached value. Returns `None` both when the key was
    /// never set and when the stored entry has outlived its max age.
    pub(crate) fn get(&self, key: &CacheKey) -> Option<CacheValue> {
        let entry = self.entries.get(key)?;
        if entry.expired() {
            return None;
        }
        Some(entry.value.clone())
    }

    /// Stores a value, unconditionally replacing any prior entry. Without
    /// an explicit TTL the cache-wide default applies.
    pub(crate) fn set(&self, key: CacheKey, value: CacheValue, ttl: Option<Duration>) {
        self.entries.insert(
            key,
            Entry {
                created: Instant::now(),
                max_age: ttl.unwrap_or(self.default_ttl),
                value,
            },
        );
    }
}
