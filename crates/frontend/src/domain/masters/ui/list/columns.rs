use contracts::masters::{MasterKey, MasterRecord};
use leptos::prelude::*;
use serde_json::Value;

use crate::masters::projection::{format_rate, project_label};
use crate::masters::MasterDataService;
use crate::shared::components::table::{ColumnDescriptor, TableRow};

impl TableRow for MasterRecord {
    fn row_key(&self) -> String {
        self.id().to_string()
    }

    fn field(&self, key: &str) -> String {
        let value = serde_json::to_value(self).unwrap_or(Value::Null);
        match value.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}

fn created_at() -> ColumnDescriptor<MasterRecord> {
    ColumnDescriptor::new("created_at", "Created")
        .width("140px")
        .render_text(|r: &MasterRecord| {
            r.meta()
                .created_at
                .map(|dt| dt.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string())
        })
}

fn rate(key: &'static str, header: &str) -> ColumnDescriptor<MasterRecord> {
    ColumnDescriptor::new(key, header)
        .numeric()
        .width("100px")
        .render_text(move |r: &MasterRecord| {
            let raw = r.field(key);
            match raw.parse::<f64>() {
                Ok(v) => format!("{}%", format_rate(v)),
                Err(_) => raw,
            }
        })
}

/// Name of a referenced record, or the raw id when it is not cached
fn reference(
    key: &'static str,
    header: &str,
    target: MasterKey,
    service: MasterDataService,
) -> ColumnDescriptor<MasterRecord> {
    ColumnDescriptor::new(key, header).render_text(move |r: &MasterRecord| {
        let id = r.field(key);
        if id.is_empty() {
            return "-".to_string();
        }
        service
            .with_cache(|c| c.find_by_id(target, &id).map(|t| t.name().to_string()))
            .unwrap_or(id)
    })
}

fn text(key: &'static str, header: &str) -> ColumnDescriptor<MasterRecord> {
    ColumnDescriptor::new(key, header)
}

fn code() -> ColumnDescriptor<MasterRecord> {
    text("code", "Code").width("120px").class("table__cell--mono")
}

pub fn columns_for(key: MasterKey, service: MasterDataService) -> Vec<ColumnDescriptor<MasterRecord>> {
    let mut columns = match key {
        MasterKey::Categories => vec![code(), text("name", "Name"), text("description", "Description")],
        MasterKey::Units => vec![text("name", "Name"), text("short_name", "Short name").width("120px")],
        MasterKey::GstSlabs => vec![rate("rate", "Rate"), text("description", "Description")],
        MasterKey::HsnCodes => vec![
            code(),
            text("description", "Description"),
            rate("gst_rate", "GST"),
        ],
        MasterKey::Statuses => vec![
            code(),
            text("name", "Name"),
            text("entity_type", "Entity"),
            ColumnDescriptor::new("color", "Color")
                .align(crate::shared::components::table::Align::Center)
                .width("80px")
                .render_view(|r: &MasterRecord| {
                    let color = r.field("color");
                    if color.is_empty() {
                        view! { <span>"-"</span> }.into_any()
                    } else {
                        view! {
                            <span class="color-swatch" style=format!("background: {}", color) title=color.clone()></span>
                        }
                        .into_any()
                    }
                }),
        ],
        MasterKey::Shops => vec![
            code(),
            text("name", "Name"),
            reference("warehouse_id", "Warehouse", MasterKey::Warehouses, service),
            text("shop_type", "Type"),
        ],
        MasterKey::Warehouses => vec![code(), text("name", "Name"), text("location", "Location")],
        MasterKey::Brands => vec![
            code(),
            text("name", "Name"),
            reference("manufacturer_id", "Manufacturer", MasterKey::Manufacturers, service),
        ],
        MasterKey::Manufacturers => vec![text("name", "Name"), text("country", "Country")],
        MasterKey::Suppliers => vec![
            text("name", "Name"),
            text("gstin", "GSTIN").class("table__cell--mono"),
            text("phone", "Phone"),
        ],
        MasterKey::MedicineTypes | MasterKey::ShopTypes => vec![code(), text("name", "Name")],
        MasterKey::PaymentMethods => vec![
            code(),
            ColumnDescriptor::new("name", "Name").render_text(project_label),
        ],
    };
    columns.push(created_at());
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::masters::{HsnCode, Shop};

    #[test]
    fn test_field_reads_flattened_record() {
        let hsn = MasterRecord::HsnCode(HsnCode {
            id: "h1".into(),
            code: "3004".into(),
            description: "Medicaments".into(),
            gst_rate: 12.0,
            ..Default::default()
        });
        assert_eq!(hsn.row_key(), "h1");
        assert_eq!(hsn.field("code"), "3004");
        assert_eq!(hsn.field("gst_rate"), "12.0");
        assert_eq!(hsn.field("missing"), "");

        let shop = MasterRecord::Shop(Shop {
            id: "s1".into(),
            name: "MG Road".into(),
            ..Default::default()
        });
        assert_eq!(shop.field("warehouse_id"), "");
    }

    #[test]
    fn test_rate_column_formats_percent() {
        let hsn = MasterRecord::HsnCode(HsnCode {
            id: "h1".into(),
            code: "3004".into(),
            gst_rate: 12.0,
            ..Default::default()
        });
        assert_eq!(rate("gst_rate", "GST").resolve_text(&hsn), "12%");
    }
}
