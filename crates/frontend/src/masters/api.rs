//! REST calls for master collections: `/api/masters/{key}`

use contracts::masters::{MasterKey, MasterRecord};
use contracts::shared::pagination::{DataEnvelope, ListEnvelope, PageRequest, PageResult};
use serde_json::Value;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::list_query;
use crate::shared::http::{get_json, post_json};
use crate::shared::list_utils::{any_field_contains, filter_list, Searchable};

pub fn master_url(api_base: &str, key: MasterKey) -> String {
    format!("{}/api/masters/{}", api_base, key.code())
}

fn decode_records(key: MasterKey, values: Vec<Value>) -> Vec<MasterRecord> {
    let (records, skipped) = MasterRecord::decode_list(key, values);
    if skipped > 0 {
        log::warn!("Skipped {} malformed '{}' record(s)", skipped, key);
    }
    records
}

/// Full collection of one master kind, in server order
pub async fn fetch_master(api_base: &str, key: MasterKey) -> Result<Vec<MasterRecord>, ApiError> {
    let envelope: ListEnvelope<Value> = get_json(&master_url(api_base, key)).await?;
    Ok(decode_records(key, envelope.into_items()))
}

/// One page of a master collection.
///
/// Backends that ignore paging parameters return the bare array; in that case
/// search and paging are applied here.
pub async fn fetch_master_page(
    api_base: &str,
    key: MasterKey,
    request: PageRequest,
    search: &str,
) -> Result<PageResult<MasterRecord>, ApiError> {
    let url = format!(
        "{}?{}",
        master_url(api_base, key),
        list_query(request.page, request.size, Some(search))
    );
    let envelope: ListEnvelope<Value> = get_json(&url).await?;
    Ok(page_from_envelope(key, envelope, request, search))
}

pub(crate) fn page_from_envelope(
    key: MasterKey,
    envelope: ListEnvelope<Value>,
    request: PageRequest,
    search: &str,
) -> PageResult<MasterRecord> {
    match envelope {
        ListEnvelope::Bare(values) => {
            let records = filter_list(decode_records(key, values), search);
            PageResult::slice(records, request)
        }
        paged => {
            let page = paged.into_page();
            let total = page.total;
            PageResult::new(decode_records(key, page.items), total)
        }
    }
}

impl Searchable for MasterRecord {
    fn matches_filter(&self, query: &str) -> bool {
        any_field_contains(&[self.name(), self.code().unwrap_or_default()], query)
    }
}

/// Create a record; the response may be wrapped in `{ "data": … }`
pub async fn create_master(
    api_base: &str,
    key: MasterKey,
    payload: &Value,
) -> Result<MasterRecord, ApiError> {
    let envelope: DataEnvelope<Value> = post_json(&master_url(api_base, key), payload).await?;
    MasterRecord::from_value(key, envelope.into_inner())
        .map_err(|e| ApiError::Decode(format!("created {}: {}", key.singular_noun(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn categories(n: usize) -> Vec<Value> {
        (1..=n)
            .map(|i| json!({ "id": i.to_string(), "name": format!("Category {}", i) }))
            .collect()
    }

    #[test]
    fn test_master_url() {
        assert_eq!(
            master_url("http://localhost:3000", MasterKey::GstSlabs),
            "http://localhost:3000/api/masters/gst_slabs"
        );
    }

    #[test]
    fn test_bare_array_is_paged_locally() {
        let page = page_from_envelope(
            MasterKey::Categories,
            ListEnvelope::Bare(categories(25)),
            PageRequest::new(3, 10),
            "",
        );
        assert_eq!(page.total, 25);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items[0].name(), "Category 21");
    }

    #[test]
    fn test_bare_array_is_searched_locally() {
        let page = page_from_envelope(
            MasterKey::Categories,
            ListEnvelope::Bare(categories(12)),
            PageRequest::new(1, 10),
            "category 1",
        );
        // 1, 10, 11, 12
        assert_eq!(page.total, 4);
    }

    #[test]
    fn test_paged_envelope_keeps_server_total() {
        let envelope: ListEnvelope<Value> =
            serde_json::from_value(json!({ "items": categories(2), "total": 42 })).unwrap();
        let page = page_from_envelope(MasterKey::Categories, envelope, PageRequest::new(1, 2), "x");
        assert_eq!(page.total, 42);
        assert_eq!(page.items.len(), 2);
    }
}
