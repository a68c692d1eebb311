//! Per-kind projection of master records into select options

use contracts::masters::{MasterKey, MasterRecord};

/// Normalized option rendered by every select-backed control
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub id: String,
    pub label: String,
    pub sublabel: Option<String>,
}

impl SelectOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            sublabel: None,
        }
    }
}

/// HSN descriptions are cut to this many characters in labels
pub const HSN_DESCRIPTION_MAX: usize = 30;

/// Which record field is stored as the selected value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueField {
    Id,
    Name,
    Code,
}

/// Projection functions for one master kind
#[derive(Clone, Copy)]
pub struct Projection {
    pub value_field: ValueField,
    pub label: fn(&MasterRecord) -> String,
    pub sublabel: fn(&MasterRecord) -> Option<String>,
}

pub fn projection(key: MasterKey) -> Projection {
    match key {
        MasterKey::Categories | MasterKey::Brands => Projection {
            value_field: ValueField::Name,
            label: name_label,
            sublabel: code_sublabel,
        },
        MasterKey::Units => Projection {
            value_field: ValueField::Name,
            label: unit_label,
            sublabel: no_sublabel,
        },
        MasterKey::GstSlabs => Projection {
            value_field: ValueField::Id,
            label: gst_label,
            sublabel: no_sublabel,
        },
        // Forms store the HSN code itself and derive the GST rate from it
        MasterKey::HsnCodes => Projection {
            value_field: ValueField::Code,
            label: hsn_label,
            sublabel: hsn_sublabel,
        },
        MasterKey::PaymentMethods => Projection {
            value_field: ValueField::Code,
            label: payment_label,
            sublabel: no_sublabel,
        },
        MasterKey::MedicineTypes | MasterKey::ShopTypes | MasterKey::Statuses => Projection {
            value_field: ValueField::Code,
            label: name_label,
            sublabel: no_sublabel,
        },
        MasterKey::Shops
        | MasterKey::Warehouses
        | MasterKey::Manufacturers
        | MasterKey::Suppliers => Projection {
            value_field: ValueField::Id,
            label: name_label,
            sublabel: code_sublabel,
        },
    }
}

pub fn project_value(record: &MasterRecord) -> String {
    match projection(record.key()).value_field {
        ValueField::Id => record.id().to_string(),
        ValueField::Name => record.name().to_string(),
        ValueField::Code => record.code().unwrap_or(record.id()).to_string(),
    }
}

pub fn project_label(record: &MasterRecord) -> String {
    (projection(record.key()).label)(record)
}

pub fn to_option(record: &MasterRecord) -> SelectOption {
    let p = projection(record.key());
    SelectOption {
        id: project_value(record),
        label: (p.label)(record),
        sublabel: (p.sublabel)(record),
    }
}

/// First `max` characters, with "..." appended when something was cut
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}...", cut.trim_end())
}

/// Display a percentage without trailing zeros: 12 -> "12", 2.5 -> "2.5"
pub fn format_rate(rate: f64) -> String {
    format!("{}", rate)
}

fn name_label(record: &MasterRecord) -> String {
    record.name().to_string()
}

fn unit_label(record: &MasterRecord) -> String {
    match record {
        MasterRecord::Unit(u) if !u.short_name.trim().is_empty() => {
            format!("{} ({})", u.name, u.short_name)
        }
        other => other.name().to_string(),
    }
}

fn gst_label(record: &MasterRecord) -> String {
    match record {
        MasterRecord::GstSlab(g) if g.description.trim().is_empty() => {
            format!("{}%", format_rate(g.rate))
        }
        MasterRecord::GstSlab(g) => format!("{}% - {}", format_rate(g.rate), g.description),
        other => other.name().to_string(),
    }
}

fn hsn_label(record: &MasterRecord) -> String {
    match record {
        MasterRecord::HsnCode(h) => format!(
            "{} - {}",
            h.code,
            truncate_chars(&h.description, HSN_DESCRIPTION_MAX)
        ),
        other => other.name().to_string(),
    }
}

fn hsn_sublabel(record: &MasterRecord) -> Option<String> {
    match record {
        MasterRecord::HsnCode(h) => Some(format!("GST {}%", format_rate(h.gst_rate))),
        _ => None,
    }
}

/// Glyph shown before a payment method; the record's own icon wins
pub fn payment_icon(code: &str) -> &'static str {
    match code.to_lowercase().as_str() {
        "cash" => "💵",
        "card" | "credit_card" | "debit_card" => "💳",
        "upi" | "wallet" => "📱",
        "bank" | "bank_transfer" | "neft" | "cheque" => "🏦",
        "credit" => "📒",
        _ => "💰",
    }
}

fn payment_label(record: &MasterRecord) -> String {
    match record {
        MasterRecord::PaymentMethod(p) => {
            let glyph = p
                .icon
                .as_deref()
                .filter(|i| !i.trim().is_empty())
                .unwrap_or_else(|| payment_icon(&p.code));
            format!("{} {}", glyph, p.name)
        }
        other => other.name().to_string(),
    }
}

fn code_sublabel(record: &MasterRecord) -> Option<String> {
    record
        .code()
        .filter(|c| !c.trim().is_empty())
        .map(str::to_string)
}

fn no_sublabel(_: &MasterRecord) -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::masters::{Category, CodedName, GstSlab, HsnCode, PaymentMethod, Shop, Unit};

    #[test]
    fn test_value_field_per_kind() {
        let cat = MasterRecord::Category(Category {
            id: "c1".into(),
            name: "Antibiotics".into(),
            ..Default::default()
        });
        assert_eq!(project_value(&cat), "Antibiotics");

        let mt = MasterRecord::MedicineType(CodedName {
            id: "m1".into(),
            code: "TAB".into(),
            name: "Tablet".into(),
            ..Default::default()
        });
        assert_eq!(project_value(&mt), "TAB");

        let shop = MasterRecord::Shop(Shop {
            id: "s9".into(),
            name: "MG Road".into(),
            code: Some("BLR-01".into()),
            ..Default::default()
        });
        assert_eq!(project_value(&shop), "s9");
        assert_eq!(to_option(&shop).sublabel.as_deref(), Some("BLR-01"));
    }

    #[test]
    fn test_hsn_label_truncates_description() {
        let hsn = MasterRecord::HsnCode(HsnCode {
            id: "h1".into(),
            code: "3004".into(),
            description: "Medicaments consisting of mixed or unmixed products".into(),
            gst_rate: 12.0,
            ..Default::default()
        });
        assert_eq!(project_label(&hsn), "3004 - Medicaments consisting of mixe...");
        assert_eq!(to_option(&hsn).sublabel.as_deref(), Some("GST 12%"));
        assert_eq!(project_value(&hsn), "3004");

        let short = MasterRecord::HsnCode(HsnCode {
            id: "h2".into(),
            code: "3002".into(),
            description: "Vaccines".into(),
            gst_rate: 5.0,
            ..Default::default()
        });
        assert_eq!(project_label(&short), "3002 - Vaccines");
    }

    #[test]
    fn test_gst_and_unit_labels() {
        let gst = MasterRecord::GstSlab(GstSlab {
            id: "g1".into(),
            rate: 2.5,
            description: "Reduced".into(),
            ..Default::default()
        });
        assert_eq!(project_label(&gst), "2.5% - Reduced");

        let unit = MasterRecord::Unit(Unit {
            id: "u1".into(),
            name: "Milligram".into(),
            short_name: "mg".into(),
            ..Default::default()
        });
        assert_eq!(project_label(&unit), "Milligram (mg)");
        assert_eq!(project_value(&unit), "Milligram");
    }

    #[test]
    fn test_payment_label_has_glyph() {
        let upi = MasterRecord::PaymentMethod(PaymentMethod {
            id: "p1".into(),
            code: "UPI".into(),
            name: "UPI".into(),
            icon: None,
            ..Default::default()
        });
        assert_eq!(project_label(&upi), "📱 UPI");
        assert_eq!(project_value(&upi), "UPI");

        let custom = MasterRecord::PaymentMethod(PaymentMethod {
            id: "p2".into(),
            code: "voucher".into(),
            name: "Voucher".into(),
            icon: Some("🎟".into()),
            ..Default::default()
        });
        assert_eq!(project_label(&custom), "🎟 Voucher");
    }

    #[test]
    fn test_truncate_chars_is_char_safe() {
        assert_eq!(truncate_chars("आयुर्वेदिक", 3), "आयु...");
        assert_eq!(truncate_chars("short", 30), "short");
    }
}
