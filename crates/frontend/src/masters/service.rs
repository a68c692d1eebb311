//! App-wide master data service provided through context

use contracts::masters::{MasterKey, MasterRecord};
use futures::future::join_all;
use leptos::prelude::*;
use serde_json::Value;

use super::api::{create_master, fetch_master};
use super::cache::MasterDataCache;
use crate::shared::api_error::ApiError;

/// Reactive handle over [`MasterDataCache`].
///
/// Cheap to copy; every copy points at the same cache.
#[derive(Clone, Copy)]
pub struct MasterDataService {
    cache: RwSignal<MasterDataCache>,
    api_base: StoredValue<String>,
}

impl MasterDataService {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            cache: RwSignal::new(MasterDataCache::new()),
            api_base: StoredValue::new(api_base.into()),
        }
    }

    /// Fetch every master kind concurrently.
    ///
    /// Each key resolves on its own: a failing collection becomes empty and
    /// never blocks the rest.
    pub fn load(self) {
        let keys = MasterKey::all();
        let tickets: Vec<(MasterKey, u64)> = self.cache.try_update(|c| {
            keys.iter().map(|k| (*k, c.begin_fetch(*k))).collect()
        }).unwrap_or_default();

        let api_base = self.api_base.get_value();
        log::info!("Loading {} master collections", tickets.len());

        wasm_bindgen_futures::spawn_local(async move {
            let fetches = tickets.into_iter().map(|(key, ticket)| {
                let api_base = api_base.clone();
                async move { (key, ticket, fetch_master(&api_base, key).await) }
            });
            for (key, ticket, result) in join_all(fetches).await {
                self.apply(key, ticket, result);
            }
            log::info!("Master data loaded");
        });
    }

    fn apply(&self, key: MasterKey, ticket: u64, result: Result<Vec<MasterRecord>, ApiError>) {
        if let Ok(records) = &result {
            log::debug!("Master '{}': {} record(s)", key, records.len());
        }
        self.cache.update(|c| {
            c.resolve(key, ticket, result);
        });
    }

    /// Refetch one kind; resolves once the cache holds the new collection
    pub async fn reload_now(self, key: MasterKey) {
        let ticket = self
            .cache
            .try_update(|c| c.begin_fetch(key))
            .unwrap_or_default();
        let result = fetch_master(&self.api_base.get_value(), key).await;
        self.apply(key, ticket, result);
    }

    /// Fire-and-forget variant of [`Self::reload_now`]
    pub fn reload(self, key: MasterKey) {
        wasm_bindgen_futures::spawn_local(async move {
            self.reload_now(key).await;
        });
    }

    /// Create a record, then refresh its collection.
    ///
    /// The returned record is the server's version of what was created.
    pub async fn create(self, key: MasterKey, payload: Value) -> Result<MasterRecord, ApiError> {
        let created = create_master(&self.api_base.get_value(), key, &payload).await?;
        log::info!("Created {} '{}'", key.singular_noun(), created.name());
        self.reload_now(key).await;
        Ok(created)
    }

    /// Tracked read of one collection
    pub fn get(&self, key: MasterKey) -> Vec<MasterRecord> {
        self.cache.with(|c| c.get(key).to_vec())
    }

    pub fn records(self, key: MasterKey) -> Signal<Vec<MasterRecord>> {
        Signal::derive(move || self.get(key))
    }

    pub fn statuses_by_entity(&self, entity_type: &str) -> Vec<MasterRecord> {
        self.cache.with(|c| c.statuses_by_entity(entity_type))
    }

    pub fn is_loading(&self) -> bool {
        self.cache.with(|c| c.is_loading())
    }

    /// Tracked access to the whole cache for derived views
    pub fn with_cache<R>(&self, f: impl FnOnce(&MasterDataCache) -> R) -> R {
        self.cache.with(f)
    }

    pub fn api_base(&self) -> String {
        self.api_base.get_value()
    }
}

pub fn provide_master_data(api_base: impl Into<String>) -> MasterDataService {
    let service = MasterDataService::new(api_base);
    provide_context(service);
    service
}

pub fn use_master_data() -> MasterDataService {
    use_context::<MasterDataService>().expect("MasterDataService not provided in context")
}
