//! In-memory state of the master data cache, independent of the reactive layer

use crate::shared::api_error::ApiError;
use contracts::masters::{MasterKey, MasterRecord};
use std::collections::{BTreeMap, BTreeSet};

/// Reference collections keyed by [`MasterKey`].
///
/// A key is either absent (not loaded yet) or holds the full server response.
/// Collections are only ever replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MasterDataCache {
    collections: BTreeMap<MasterKey, Vec<MasterRecord>>,
    /// Keys the initial bulk load is still waiting for
    pending: BTreeSet<MasterKey>,
    /// Latest fetch ticket per key; older responses are dropped
    tickets: BTreeMap<MasterKey, u64>,
    next_ticket: u64,
}

impl MasterDataCache {
    /// Fresh cache waiting for every key
    pub fn new() -> Self {
        Self {
            pending: MasterKey::all().into_iter().collect(),
            ..Default::default()
        }
    }

    /// True until every key of the initial load has resolved
    pub fn is_loading(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn is_loaded(&self, key: MasterKey) -> bool {
        self.collections.contains_key(&key)
    }

    /// Records of `key` in server order; empty when not loaded
    pub fn get(&self, key: MasterKey) -> &[MasterRecord] {
        self.collections
            .get(&key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn statuses_by_entity(&self, entity_type: &str) -> Vec<MasterRecord> {
        self.get(MasterKey::Statuses)
            .iter()
            .filter(|r| r.entity_type() == Some(entity_type))
            .cloned()
            .collect()
    }

    pub fn find_by_code(&self, key: MasterKey, code: &str) -> Option<&MasterRecord> {
        self.get(key).iter().find(|r| r.code() == Some(code))
    }

    pub fn find_by_id(&self, key: MasterKey, id: &str) -> Option<&MasterRecord> {
        self.get(key).iter().find(|r| r.id() == id)
    }

    /// Register an outgoing fetch for `key` and return its ticket
    pub fn begin_fetch(&mut self, key: MasterKey) -> u64 {
        self.next_ticket += 1;
        self.tickets.insert(key, self.next_ticket);
        self.next_ticket
    }

    /// Store the outcome of a fetch.
    ///
    /// During the initial load a failed fetch resolves the key to an empty
    /// collection so the other keys are never blocked. A failed reload of a
    /// loaded key keeps the collection it already has. Returns `false` when
    /// the ticket was superseded by a later fetch of the same key and the
    /// result was dropped.
    pub fn resolve(
        &mut self,
        key: MasterKey,
        ticket: u64,
        result: Result<Vec<MasterRecord>, ApiError>,
    ) -> bool {
        if self.tickets.get(&key) != Some(&ticket) {
            log::debug!("Dropping stale {} response (ticket {})", key, ticket);
            return false;
        }

        let records = match result {
            Ok(records) => records,
            Err(e) if self.pending.contains(&key) || !self.is_loaded(key) => {
                log::warn!("Master '{}' failed to load, using empty list: {}", key, e);
                Vec::new()
            }
            Err(e) => {
                log::warn!("Master '{}' failed to reload, keeping cached list: {}", key, e);
                return true;
            }
        };

        self.collections.insert(key, records);
        self.pending.remove(&key);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::masters::{Category, Status};

    fn category(id: &str, name: &str) -> MasterRecord {
        MasterRecord::Category(Category {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        })
    }

    fn status(id: &str, code: &str, entity: &str) -> MasterRecord {
        MasterRecord::Status(Status {
            id: id.into(),
            code: code.into(),
            name: code.to_uppercase(),
            entity_type: entity.into(),
            ..Default::default()
        })
    }

    fn load_all_empty(cache: &mut MasterDataCache) {
        for key in MasterKey::all() {
            let t = cache.begin_fetch(key);
            cache.resolve(key, t, Ok(Vec::new()));
        }
    }

    #[test]
    fn test_loading_until_every_key_resolves() {
        let mut cache = MasterDataCache::new();
        assert!(cache.is_loading());
        assert!(cache.get(MasterKey::Units).is_empty());

        let keys = MasterKey::all();
        let (last, rest) = keys.split_last().unwrap();
        for key in rest {
            let t = cache.begin_fetch(*key);
            cache.resolve(*key, t, Ok(Vec::new()));
        }
        assert!(cache.is_loading());

        let t = cache.begin_fetch(*last);
        cache.resolve(*last, t, Ok(Vec::new()));
        assert!(!cache.is_loading());
    }

    #[test]
    fn test_failed_key_resolves_to_empty() {
        let mut cache = MasterDataCache::new();
        load_all_empty(&mut cache);

        let t = cache.begin_fetch(MasterKey::Brands);
        assert!(cache.resolve(MasterKey::Brands, t, Err(ApiError::Network { timeout: false })));
        assert!(cache.is_loaded(MasterKey::Brands));
        assert!(cache.get(MasterKey::Brands).is_empty());
        assert!(!cache.is_loading());
    }

    #[test]
    fn test_failed_reload_keeps_loaded_collection() {
        let mut cache = MasterDataCache::new();
        load_all_empty(&mut cache);
        let t = cache.begin_fetch(MasterKey::Categories);
        cache.resolve(
            MasterKey::Categories,
            t,
            Ok(vec![category("1", "Tablets"), category("2", "Syrups")]),
        );

        let t = cache.begin_fetch(MasterKey::Categories);
        assert!(cache.resolve(MasterKey::Categories, t, Err(ApiError::Network { timeout: true })));
        let names: Vec<&str> = cache.get(MasterKey::Categories).iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Tablets", "Syrups"]);
        assert!(!cache.is_loading());
    }

    #[test]
    fn test_preserves_server_order() {
        let mut cache = MasterDataCache::new();
        let t = cache.begin_fetch(MasterKey::Categories);
        cache.resolve(
            MasterKey::Categories,
            t,
            Ok(vec![category("2", "Tablets"), category("1", "Antibiotics")]),
        );
        let names: Vec<&str> = cache.get(MasterKey::Categories).iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Tablets", "Antibiotics"]);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut cache = MasterDataCache::new();
        let first = cache.begin_fetch(MasterKey::Categories);
        let second = cache.begin_fetch(MasterKey::Categories);

        assert!(cache.resolve(MasterKey::Categories, second, Ok(vec![category("1", "New")])));
        assert!(!cache.resolve(MasterKey::Categories, first, Ok(vec![category("0", "Old")])));
        assert_eq!(cache.get(MasterKey::Categories)[0].name(), "New");
    }

    #[test]
    fn test_reload_replaces_collection_wholesale() {
        let mut cache = MasterDataCache::new();
        let t = cache.begin_fetch(MasterKey::Categories);
        cache.resolve(
            MasterKey::Categories,
            t,
            Ok(vec![category("1", "A"), category("2", "B")]),
        );
        let t = cache.begin_fetch(MasterKey::Categories);
        cache.resolve(MasterKey::Categories, t, Ok(vec![category("3", "C")]));
        assert_eq!(cache.get(MasterKey::Categories).len(), 1);
        assert!(cache.find_by_id(MasterKey::Categories, "1").is_none());
    }

    #[test]
    fn test_statuses_filtered_by_entity() {
        let mut cache = MasterDataCache::new();
        let t = cache.begin_fetch(MasterKey::Statuses);
        cache.resolve(
            MasterKey::Statuses,
            t,
            Ok(vec![
                status("1", "open", "shop"),
                status("2", "in_transit", "dispatch"),
                status("3", "closed", "shop"),
            ]),
        );
        let shop: Vec<String> = cache
            .statuses_by_entity("shop")
            .iter()
            .map(|r| r.id().to_string())
            .collect();
        assert_eq!(shop, vec!["1", "3"]);
        assert!(cache.statuses_by_entity("invoice").is_empty());
        assert_eq!(
            cache.find_by_code(MasterKey::Statuses, "in_transit").map(|r| r.id()),
            Some("2")
        );
    }
}
