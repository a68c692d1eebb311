//! Option derivation and enable/disable policy for master-backed selects

use super::cache::MasterDataCache;
use super::projection::{to_option, SelectOption};
use contracts::masters::{MasterKey, MasterRecord};

/// Client-side narrowing applied before projection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectFilter {
    /// Shops only: keep shops of this warehouse
    pub warehouse_id: Option<String>,
    /// Statuses only: keep statuses of this entity type
    pub entity_type: Option<String>,
}

impl SelectFilter {
    pub fn warehouse(id: impl Into<String>) -> Self {
        Self {
            warehouse_id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn entity(entity_type: impl Into<String>) -> Self {
        Self {
            entity_type: Some(entity_type.into()),
            ..Default::default()
        }
    }

    fn is_narrowing(&self) -> bool {
        self.warehouse_id.is_some() || self.entity_type.is_some()
    }
}

/// Why a select is in its current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectStatus {
    Loading,
    Empty,
    Ready,
}

/// Everything a select control needs to render
#[derive(Debug, Clone, PartialEq)]
pub struct MasterSelectView {
    pub status: SelectStatus,
    pub options: Vec<SelectOption>,
    pub disabled: bool,
    pub placeholder: String,
    /// Tooltip explaining a disabled state
    pub title: Option<String>,
}

/// Records of `key` after the filter is applied
pub fn filtered_records(cache: &MasterDataCache, key: MasterKey, filter: &SelectFilter) -> Vec<MasterRecord> {
    let records: Vec<MasterRecord> = match (&key, &filter.entity_type) {
        (MasterKey::Statuses, Some(entity)) => cache.statuses_by_entity(entity),
        _ => cache.get(key).to_vec(),
    };

    match (&key, &filter.warehouse_id) {
        (MasterKey::Shops, Some(wid)) if !wid.is_empty() => records
            .into_iter()
            .filter(|r| r.warehouse_id() == Some(wid.as_str()))
            .collect(),
        _ => records,
    }
}

pub fn empty_placeholder(key: MasterKey) -> String {
    format!("No {} found — contact administrator", key.plural_noun())
}

pub fn empty_title(key: MasterKey) -> String {
    format!(
        "No {} are configured. Add them under Masters → {}.",
        key.plural_noun(),
        key.display_name()
    )
}

pub fn build_view(
    cache: &MasterDataCache,
    key: MasterKey,
    filter: &SelectFilter,
    externally_disabled: bool,
) -> MasterSelectView {
    if cache.is_loading() {
        return MasterSelectView {
            status: SelectStatus::Loading,
            options: Vec::new(),
            disabled: true,
            placeholder: "Loading…".to_string(),
            title: None,
        };
    }

    let options: Vec<SelectOption> = filtered_records(cache, key, filter)
        .iter()
        .map(to_option)
        .collect();

    if options.is_empty() {
        let (placeholder, title) = if filter.is_narrowing() && !cache.get(key).is_empty() {
            (
                format!("No matching {}", key.plural_noun()),
                Some(format!(
                    "None of the {} match the current selection.",
                    key.plural_noun()
                )),
            )
        } else {
            (empty_placeholder(key), Some(empty_title(key)))
        };
        return MasterSelectView {
            status: SelectStatus::Empty,
            options,
            disabled: true,
            placeholder,
            title,
        };
    }

    MasterSelectView {
        status: SelectStatus::Ready,
        options,
        disabled: externally_disabled,
        placeholder: format!("Select {}", key.singular_noun()),
        title: None,
    }
}

/// GST rate of a cached HSN code; no network involved
pub fn hsn_gst_rate(cache: &MasterDataCache, code: &str) -> Option<f64> {
    match cache.find_by_code(MasterKey::HsnCodes, code) {
        Some(MasterRecord::HsnCode(h)) => Some(h.gst_rate),
        _ => None,
    }
}

/// Both values an HSN selection reports to its owner
pub fn hsn_selection(cache: &MasterDataCache, code: &str) -> (String, Option<f64>) {
    if code.is_empty() {
        return (String::new(), None);
    }
    (code.to_string(), hsn_gst_rate(cache, code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::masters::{HsnCode, Shop, Status};

    fn loaded(entries: Vec<(MasterKey, Vec<MasterRecord>)>) -> MasterDataCache {
        let mut cache = MasterDataCache::new();
        let mut entries = entries;
        for key in MasterKey::all() {
            let records = entries
                .iter()
                .position(|(k, _)| *k == key)
                .map(|i| entries.remove(i).1)
                .unwrap_or_default();
            let t = cache.begin_fetch(key);
            cache.resolve(key, t, Ok(records));
        }
        cache
    }

    fn shop(id: &str, warehouse: &str) -> MasterRecord {
        MasterRecord::Shop(Shop {
            id: id.into(),
            name: format!("Shop {}", id),
            warehouse_id: Some(warehouse.into()),
            ..Default::default()
        })
    }

    #[test]
    fn test_empty_categories_disable_the_select() {
        let cache = loaded(vec![]);
        let view = build_view(&cache, MasterKey::Categories, &SelectFilter::default(), false);
        assert_eq!(view.status, SelectStatus::Empty);
        assert!(view.disabled);
        assert!(view.placeholder.starts_with("No categories found"));
        assert!(view.title.unwrap().contains("Masters → Categories"));
    }

    #[test]
    fn test_loading_cache_disables_with_loading_placeholder() {
        let cache = MasterDataCache::new();
        let view = build_view(&cache, MasterKey::Units, &SelectFilter::default(), false);
        assert_eq!(view.status, SelectStatus::Loading);
        assert!(view.disabled);
        assert_eq!(view.placeholder, "Loading…");
    }

    #[test]
    fn test_loaded_key_waits_for_bulk_load() {
        let mut cache = MasterDataCache::new();
        let t = cache.begin_fetch(MasterKey::Units);
        cache.resolve(MasterKey::Units, t, Ok(Vec::new()));
        assert!(cache.is_loaded(MasterKey::Units));

        let view = build_view(&cache, MasterKey::Units, &SelectFilter::default(), false);
        assert_eq!(view.status, SelectStatus::Loading);
        assert_eq!(view.placeholder, "Loading…");
    }

    #[test]
    fn test_ready_respects_external_disable() {
        let cache = loaded(vec![(MasterKey::Shops, vec![shop("1", "W1")])]);
        let view = build_view(&cache, MasterKey::Shops, &SelectFilter::default(), true);
        assert_eq!(view.status, SelectStatus::Ready);
        assert!(view.disabled);
        assert_eq!(view.placeholder, "Select shop");
    }

    #[test]
    fn test_shop_filter_by_warehouse() {
        let shops: Vec<MasterRecord> = (0..10)
            .map(|i| shop(&i.to_string(), if i % 3 == 0 && i > 0 { "W1" } else { "W2" }))
            .collect();
        let cache = loaded(vec![(MasterKey::Shops, shops)]);

        let view = build_view(&cache, MasterKey::Shops, &SelectFilter::warehouse("W1"), false);
        let ids: Vec<&str> = view.options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "6", "9"]);

        let none = build_view(&cache, MasterKey::Shops, &SelectFilter::warehouse("W9"), false);
        assert!(none.disabled);
        assert_eq!(none.placeholder, "No matching shops");
    }

    #[test]
    fn test_status_select_uses_entity_filter() {
        let statuses = vec![
            MasterRecord::Status(Status {
                id: "1".into(),
                code: "active".into(),
                name: "Active".into(),
                entity_type: "medicine".into(),
                ..Default::default()
            }),
            MasterRecord::Status(Status {
                id: "2".into(),
                code: "dispatched".into(),
                name: "Dispatched".into(),
                entity_type: "dispatch".into(),
                ..Default::default()
            }),
        ];
        let cache = loaded(vec![(MasterKey::Statuses, statuses)]);
        let view = build_view(&cache, MasterKey::Statuses, &SelectFilter::entity("medicine"), false);
        assert_eq!(view.options.len(), 1);
        assert_eq!(view.options[0].id, "active");
    }

    #[test]
    fn test_hsn_selection_derives_gst_rate() {
        let cache = loaded(vec![(
            MasterKey::HsnCodes,
            vec![MasterRecord::HsnCode(HsnCode {
                id: "h1".into(),
                code: "3004".into(),
                description: "Medicaments".into(),
                gst_rate: 12.0,
                ..Default::default()
            })],
        )]);
        assert_eq!(hsn_selection(&cache, "3004"), ("3004".to_string(), Some(12.0)));
        assert_eq!(hsn_selection(&cache, "9999"), ("9999".to_string(), None));
        assert_eq!(hsn_selection(&cache, ""), (String::new(), None));
    }
}
