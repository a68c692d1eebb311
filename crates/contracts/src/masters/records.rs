use super::key::MasterKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Shared metadata
// ============================================================================

/// Audit timestamps returned with every master record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Record shapes
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub meta: RecordMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(flatten)]
    pub meta: RecordMeta,
}

/// GST tax slab; `rate` is a percentage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GstSlab {
    pub id: String,
    pub rate: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(flatten)]
    pub meta: RecordMeta,
}

/// HSN classification code with its default GST rate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HsnCode {
    pub id: String,
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub gst_rate: f64,
    #[serde(flatten)]
    pub meta: RecordMeta,
}

/// Status value scoped to one business entity ("shop", "dispatch", ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub id: String,
    pub code: String,
    pub name: String,
    pub entity_type: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(flatten)]
    pub meta: RecordMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub warehouse_id: Option<String>,
    #[serde(default)]
    pub shop_type: Option<String>,
    #[serde(flatten)]
    pub meta: RecordMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(flatten)]
    pub meta: RecordMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub manufacturer_id: Option<String>,
    #[serde(flatten)]
    pub meta: RecordMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(flatten)]
    pub meta: RecordMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub gstin: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(flatten)]
    pub meta: RecordMeta,
}

/// Shape shared by the small code/name lookups (medicine types, shop types)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodedName {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(flatten)]
    pub meta: RecordMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(flatten)]
    pub meta: RecordMeta,
}

// ============================================================================
// Tagged union
// ============================================================================

/// One record of any master collection.
///
/// The wire format carries no tag; the collection key selects the shape,
/// see [`MasterRecord::from_value`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MasterRecord {
    Category(Category),
    Unit(Unit),
    GstSlab(GstSlab),
    HsnCode(HsnCode),
    Status(Status),
    Shop(Shop),
    Warehouse(Warehouse),
    Brand(Brand),
    Manufacturer(Manufacturer),
    Supplier(Supplier),
    MedicineType(CodedName),
    PaymentMethod(PaymentMethod),
    ShopType(CodedName),
}

impl MasterRecord {
    /// Decode a raw JSON object as a record of the given collection
    pub fn from_value(key: MasterKey, value: serde_json::Value) -> Result<Self, serde_json::Error> {
        let record = match key {
            MasterKey::Categories => MasterRecord::Category(serde_json::from_value(value)?),
            MasterKey::Units => MasterRecord::Unit(serde_json::from_value(value)?),
            MasterKey::GstSlabs => MasterRecord::GstSlab(serde_json::from_value(value)?),
            MasterKey::HsnCodes => MasterRecord::HsnCode(serde_json::from_value(value)?),
            MasterKey::Statuses => MasterRecord::Status(serde_json::from_value(value)?),
            MasterKey::Shops => MasterRecord::Shop(serde_json::from_value(value)?),
            MasterKey::Warehouses => MasterRecord::Warehouse(serde_json::from_value(value)?),
            MasterKey::Brands => MasterRecord::Brand(serde_json::from_value(value)?),
            MasterKey::Manufacturers => MasterRecord::Manufacturer(serde_json::from_value(value)?),
            MasterKey::Suppliers => MasterRecord::Supplier(serde_json::from_value(value)?),
            MasterKey::MedicineTypes => MasterRecord::MedicineType(serde_json::from_value(value)?),
            MasterKey::PaymentMethods => MasterRecord::PaymentMethod(serde_json::from_value(value)?),
            MasterKey::ShopTypes => MasterRecord::ShopType(serde_json::from_value(value)?),
        };
        Ok(record)
    }

    /// Decode a list, skipping entries that do not match the collection shape.
    ///
    /// Returns the decoded records and the number of skipped entries.
    pub fn decode_list(key: MasterKey, values: Vec<serde_json::Value>) -> (Vec<Self>, usize) {
        let total = values.len();
        let records: Vec<Self> = values
            .into_iter()
            .filter_map(|v| Self::from_value(key, v).ok())
            .collect();
        let skipped = total - records.len();
        (records, skipped)
    }

    pub fn key(&self) -> MasterKey {
        match self {
            MasterRecord::Category(_) => MasterKey::Categories,
            MasterRecord::Unit(_) => MasterKey::Units,
            MasterRecord::GstSlab(_) => MasterKey::GstSlabs,
            MasterRecord::HsnCode(_) => MasterKey::HsnCodes,
            MasterRecord::Status(_) => MasterKey::Statuses,
            MasterRecord::Shop(_) => MasterKey::Shops,
            MasterRecord::Warehouse(_) => MasterKey::Warehouses,
            MasterRecord::Brand(_) => MasterKey::Brands,
            MasterRecord::Manufacturer(_) => MasterKey::Manufacturers,
            MasterRecord::Supplier(_) => MasterKey::Suppliers,
            MasterRecord::MedicineType(_) => MasterKey::MedicineTypes,
            MasterRecord::PaymentMethod(_) => MasterKey::PaymentMethods,
            MasterRecord::ShopType(_) => MasterKey::ShopTypes,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            MasterRecord::Category(r) => &r.id,
            MasterRecord::Unit(r) => &r.id,
            MasterRecord::GstSlab(r) => &r.id,
            MasterRecord::HsnCode(r) => &r.id,
            MasterRecord::Status(r) => &r.id,
            MasterRecord::Shop(r) => &r.id,
            MasterRecord::Warehouse(r) => &r.id,
            MasterRecord::Brand(r) => &r.id,
            MasterRecord::Manufacturer(r) => &r.id,
            MasterRecord::Supplier(r) => &r.id,
            MasterRecord::MedicineType(r) | MasterRecord::ShopType(r) => &r.id,
            MasterRecord::PaymentMethod(r) => &r.id,
        }
    }

    /// Human readable name. GST slabs and HSN codes have none and use their
    /// description instead.
    pub fn name(&self) -> &str {
        match self {
            MasterRecord::Category(r) => &r.name,
            MasterRecord::Unit(r) => &r.name,
            MasterRecord::GstSlab(r) => &r.description,
            MasterRecord::HsnCode(r) => &r.description,
            MasterRecord::Status(r) => &r.name,
            MasterRecord::Shop(r) => &r.name,
            MasterRecord::Warehouse(r) => &r.name,
            MasterRecord::Brand(r) => &r.name,
            MasterRecord::Manufacturer(r) => &r.name,
            MasterRecord::Supplier(r) => &r.name,
            MasterRecord::MedicineType(r) | MasterRecord::ShopType(r) => &r.name,
            MasterRecord::PaymentMethod(r) => &r.name,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            MasterRecord::Category(r) => r.code.as_deref(),
            MasterRecord::Unit(r) => r.code.as_deref(),
            MasterRecord::GstSlab(r) => r.code.as_deref(),
            MasterRecord::HsnCode(r) => Some(&r.code),
            MasterRecord::Status(r) => Some(&r.code),
            MasterRecord::Shop(r) => r.code.as_deref(),
            MasterRecord::Warehouse(r) => r.code.as_deref(),
            MasterRecord::Brand(r) => r.code.as_deref(),
            MasterRecord::Manufacturer(r) => r.code.as_deref(),
            MasterRecord::Supplier(r) => r.code.as_deref(),
            MasterRecord::MedicineType(r) | MasterRecord::ShopType(r) => Some(&r.code),
            MasterRecord::PaymentMethod(r) => Some(&r.code),
        }
    }

    pub fn meta(&self) -> &RecordMeta {
        match self {
            MasterRecord::Category(r) => &r.meta,
            MasterRecord::Unit(r) => &r.meta,
            MasterRecord::GstSlab(r) => &r.meta,
            MasterRecord::HsnCode(r) => &r.meta,
            MasterRecord::Status(r) => &r.meta,
            MasterRecord::Shop(r) => &r.meta,
            MasterRecord::Warehouse(r) => &r.meta,
            MasterRecord::Brand(r) => &r.meta,
            MasterRecord::Manufacturer(r) => &r.meta,
            MasterRecord::Supplier(r) => &r.meta,
            MasterRecord::MedicineType(r) | MasterRecord::ShopType(r) => &r.meta,
            MasterRecord::PaymentMethod(r) => &r.meta,
        }
    }

    /// `entity_type` discriminator, present on statuses only
    pub fn entity_type(&self) -> Option<&str> {
        match self {
            MasterRecord::Status(r) => Some(&r.entity_type),
            _ => None,
        }
    }

    /// Owning warehouse, present on shops only
    pub fn warehouse_id(&self) -> Option<&str> {
        match self {
            MasterRecord::Shop(r) => r.warehouse_id.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_selects_shape_by_key() {
        let value = json!({ "id": "h1", "code": "3004", "description": "Medicaments", "gst_rate": 12 });
        let record = MasterRecord::from_value(MasterKey::HsnCodes, value).unwrap();
        match &record {
            MasterRecord::HsnCode(h) => {
                assert_eq!(h.code, "3004");
                assert_eq!(h.gst_rate, 12.0);
            }
            other => panic!("unexpected record {:?}", other),
        }
        assert_eq!(record.key(), MasterKey::HsnCodes);
        assert_eq!(record.code(), Some("3004"));
    }

    #[test]
    fn test_optional_fields_and_timestamps() {
        let value = json!({
            "id": "s1",
            "name": "Main Street",
            "warehouse_id": "W1",
            "created_at": "2024-03-15T14:02:26Z"
        });
        let record = MasterRecord::from_value(MasterKey::Shops, value).unwrap();
        assert_eq!(record.warehouse_id(), Some("W1"));
        assert_eq!(record.code(), None);
        assert!(record.meta().created_at.is_some());
        assert!(record.meta().updated_at.is_none());
    }

    #[test]
    fn test_decode_list_skips_malformed_entries() {
        let values = vec![
            json!({ "id": "1", "code": "active", "name": "Active", "entity_type": "shop" }),
            json!({ "id": "2", "name": "no code or entity" }),
        ];
        let (records, skipped) = MasterRecord::decode_list(MasterKey::Statuses, values);
        assert_eq!(records.len(), 1);
        assert_eq!(skipped, 1);
        assert_eq!(records[0].entity_type(), Some("shop"));
    }

    #[test]
    fn test_serialize_is_untagged() {
        let record = MasterRecord::Unit(Unit {
            id: "u1".into(),
            name: "Strip".into(),
            short_name: "str".into(),
            ..Default::default()
        });
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["name"], "Strip");
        assert!(value.get("Unit").is_none());
    }
}
