//! Medicine catalogue entry as edited in the medicine form

use serde::{Deserialize, Serialize};

/// Form payload for `POST /api/medicines`.
///
/// Master-backed fields hold the value each master select stores: names for
/// category and unit, codes for type, HSN and status, ids for places.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicineDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub generic_name: String,
    pub category: String,
    #[serde(default)]
    pub medicine_type: String,
    pub unit: String,
    pub hsn_code: String,
    #[serde(default)]
    pub gst_rate: Option<f64>,
    #[serde(default)]
    pub mrp: Option<f64>,
    #[serde(default)]
    pub warehouse_id: String,
    #[serde(default)]
    pub shop_id: String,
    pub status: String,
}

impl MedicineDto {
    /// Labels of required fields that are blank, in form order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let required = [
            (&self.name, "Name"),
            (&self.category, "Category"),
            (&self.unit, "Unit"),
            (&self.hsn_code, "HSN code"),
            (&self.status, "Status"),
        ];
        required
            .iter()
            .filter(|(value, _)| value.trim().is_empty())
            .map(|(_, label)| *label)
            .collect()
    }

    /// Shop is cleared when it does not belong to the new warehouse
    pub fn set_warehouse(&mut self, warehouse_id: String, shop_in_warehouse: bool) {
        if warehouse_id != self.warehouse_id && !shop_in_warehouse {
            self.shop_id.clear();
        }
        self.warehouse_id = warehouse_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_in_form_order() {
        let dto = MedicineDto {
            name: "Paracetamol 500".into(),
            unit: " ".into(),
            ..Default::default()
        };
        assert_eq!(dto.missing_fields(), vec!["Category", "Unit", "HSN code", "Status"]);
    }

    #[test]
    fn test_warehouse_change_clears_foreign_shop() {
        let mut dto = MedicineDto {
            warehouse_id: "W1".into(),
            shop_id: "S1".into(),
            ..Default::default()
        };
        dto.set_warehouse("W2".into(), false);
        assert_eq!(dto.shop_id, "");
        assert_eq!(dto.warehouse_id, "W2");

        dto.shop_id = "S7".into();
        dto.set_warehouse("W3".into(), true);
        assert_eq!(dto.shop_id, "S7");
    }

    #[test]
    fn test_serializes_without_id() {
        let json = serde_json::to_value(MedicineDto::default()).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["gst_rate"], serde_json::Value::Null);
    }
}
