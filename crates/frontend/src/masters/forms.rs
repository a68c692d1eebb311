//! Creation forms for master records: fields per kind and JSON payloads

use contracts::masters::MasterKey;
use serde_json::{Map, Value};

use super::projection::{to_option, SelectOption};
use super::service::MasterDataService;
use crate::shared::components::select_with_add::{AddField, FieldKind, FormValues};

/// Inputs needed to create a record of `key`
pub fn fields_for(key: MasterKey) -> Vec<AddField> {
    match key {
        MasterKey::Categories => vec![
            AddField::text("name", "Name").required(),
            AddField::text("code", "Code"),
            AddField::area("description", "Description"),
        ],
        MasterKey::Brands => vec![
            AddField::text("name", "Name").required(),
            AddField::text("code", "Code"),
        ],
        MasterKey::Warehouses => vec![
            AddField::text("name", "Name").required(),
            AddField::text("code", "Code"),
            AddField::text("location", "Location"),
        ],
        MasterKey::Units => vec![
            AddField::text("name", "Name").required().placeholder("Milligram"),
            AddField::text("short_name", "Short name").required().placeholder("mg"),
        ],
        MasterKey::GstSlabs => vec![
            AddField::number("rate", "Rate (%)").required().placeholder("12"),
            AddField::text("description", "Description"),
        ],
        MasterKey::HsnCodes => vec![
            AddField::text("code", "HSN code").required().placeholder("3004"),
            AddField::area("description", "Description").required(),
            AddField::number("gst_rate", "GST rate (%)").required().placeholder("12"),
        ],
        MasterKey::Statuses => vec![
            AddField::text("code", "Code").required(),
            AddField::text("name", "Name").required(),
            AddField::text("entity_type", "Entity type").required().placeholder("medicine"),
            AddField::text("color", "Color").placeholder("#22c55e"),
        ],
        MasterKey::Shops => vec![
            AddField::text("name", "Name").required(),
            AddField::text("code", "Code"),
            AddField::text("warehouse_id", "Warehouse id"),
        ],
        MasterKey::Manufacturers => vec![
            AddField::text("name", "Name").required(),
            AddField::text("country", "Country"),
        ],
        MasterKey::Suppliers => vec![
            AddField::text("name", "Name").required(),
            AddField::text("gstin", "GSTIN"),
            AddField::text("phone", "Phone"),
        ],
        MasterKey::MedicineTypes | MasterKey::ShopTypes => vec![
            AddField::text("code", "Code").required(),
            AddField::text("name", "Name").required(),
        ],
        MasterKey::PaymentMethods => vec![
            AddField::text("code", "Code").required(),
            AddField::text("name", "Name").required(),
            AddField::text("icon", "Icon"),
        ],
    }
}

/// JSON body for the create call.
///
/// Blank optional fields are omitted; number fields must parse.
pub fn payload_from(key: MasterKey, values: &FormValues) -> Result<Value, String> {
    let mut body = Map::new();
    for field in fields_for(key) {
        let raw = values.get(field.name).map(|v| v.trim()).unwrap_or_default();
        if raw.is_empty() {
            continue;
        }
        let value = match field.kind {
            FieldKind::Number => raw
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite() && *n >= 0.0)
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| format!("{} must be a non-negative number", field.label))?,
            FieldKind::Text | FieldKind::TextArea => Value::String(raw.to_string()),
        };
        body.insert(field.name.to_string(), value);
    }
    Ok(Value::Object(body))
}

/// Create a record from inline form values and return it as a select option.
///
/// Errors are already turned into user-facing text.
pub async fn create_from_form(
    service: MasterDataService,
    key: MasterKey,
    values: FormValues,
) -> Result<SelectOption, String> {
    let payload = payload_from(key, &values)?;
    let record = service
        .create(key, payload)
        .await
        .map_err(|e| e.user_message())?;
    Ok(to_option(&record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_every_kind_has_a_required_field() {
        for key in MasterKey::all() {
            assert!(fields_for(key).iter().any(|f| f.required), "{}", key);
        }
    }

    #[test]
    fn test_payload_parses_numbers_and_skips_blanks() {
        let body = payload_from(
            MasterKey::HsnCodes,
            &values(&[("code", " 3004 "), ("description", "Medicaments"), ("gst_rate", "12")]),
        )
        .unwrap();
        assert_eq!(body, json!({ "code": "3004", "description": "Medicaments", "gst_rate": 12.0 }));

        let body = payload_from(MasterKey::Categories, &values(&[("name", "Syrups"), ("code", "")])).unwrap();
        assert_eq!(body, json!({ "name": "Syrups" }));
    }

    #[test]
    fn test_payload_rejects_bad_number() {
        let err = payload_from(MasterKey::GstSlabs, &values(&[("rate", "twelve")])).unwrap_err();
        assert_eq!(err, "Rate (%) must be a non-negative number");
        assert!(payload_from(MasterKey::GstSlabs, &values(&[("rate", "-5")])).is_err());
    }
}
