use serde::{Deserialize, Serialize};

/// Master data collections known to the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MasterKey {
    Categories,
    Units,
    GstSlabs,
    HsnCodes,
    Statuses,
    Shops,
    Warehouses,
    Brands,
    Manufacturers,
    Suppliers,
    MedicineTypes,
    PaymentMethods,
    ShopTypes,
}

impl MasterKey {
    /// Key used in API paths and as the cache key
    pub fn code(&self) -> &'static str {
        match self {
            MasterKey::Categories => "categories",
            MasterKey::Units => "units",
            MasterKey::GstSlabs => "gst_slabs",
            MasterKey::HsnCodes => "hsn_codes",
            MasterKey::Statuses => "statuses",
            MasterKey::Shops => "shops",
            MasterKey::Warehouses => "warehouses",
            MasterKey::Brands => "brands",
            MasterKey::Manufacturers => "manufacturers",
            MasterKey::Suppliers => "suppliers",
            MasterKey::MedicineTypes => "medicine_types",
            MasterKey::PaymentMethods => "payment_methods",
            MasterKey::ShopTypes => "shop_types",
        }
    }

    /// Title of the management page for this collection
    pub fn display_name(&self) -> &'static str {
        match self {
            MasterKey::Categories => "Categories",
            MasterKey::Units => "Units",
            MasterKey::GstSlabs => "GST Slabs",
            MasterKey::HsnCodes => "HSN Codes",
            MasterKey::Statuses => "Statuses",
            MasterKey::Shops => "Shops",
            MasterKey::Warehouses => "Warehouses",
            MasterKey::Brands => "Brands",
            MasterKey::Manufacturers => "Manufacturers",
            MasterKey::Suppliers => "Suppliers",
            MasterKey::MedicineTypes => "Medicine Types",
            MasterKey::PaymentMethods => "Payment Methods",
            MasterKey::ShopTypes => "Shop Types",
        }
    }

    /// Lowercase plural noun used in placeholders ("No units found")
    pub fn plural_noun(&self) -> &'static str {
        match self {
            MasterKey::Categories => "categories",
            MasterKey::Units => "units",
            MasterKey::GstSlabs => "GST slabs",
            MasterKey::HsnCodes => "HSN codes",
            MasterKey::Statuses => "statuses",
            MasterKey::Shops => "shops",
            MasterKey::Warehouses => "warehouses",
            MasterKey::Brands => "brands",
            MasterKey::Manufacturers => "manufacturers",
            MasterKey::Suppliers => "suppliers",
            MasterKey::MedicineTypes => "medicine types",
            MasterKey::PaymentMethods => "payment methods",
            MasterKey::ShopTypes => "shop types",
        }
    }

    /// Lowercase singular noun used in prompts ("Select unit")
    pub fn singular_noun(&self) -> &'static str {
        match self {
            MasterKey::Categories => "category",
            MasterKey::Units => "unit",
            MasterKey::GstSlabs => "GST slab",
            MasterKey::HsnCodes => "HSN code",
            MasterKey::Statuses => "status",
            MasterKey::Shops => "shop",
            MasterKey::Warehouses => "warehouse",
            MasterKey::Brands => "brand",
            MasterKey::Manufacturers => "manufacturer",
            MasterKey::Suppliers => "supplier",
            MasterKey::MedicineTypes => "medicine type",
            MasterKey::PaymentMethods => "payment method",
            MasterKey::ShopTypes => "shop type",
        }
    }

    pub fn all() -> Vec<MasterKey> {
        vec![
            MasterKey::Categories,
            MasterKey::Units,
            MasterKey::GstSlabs,
            MasterKey::HsnCodes,
            MasterKey::Statuses,
            MasterKey::Shops,
            MasterKey::Warehouses,
            MasterKey::Brands,
            MasterKey::Manufacturers,
            MasterKey::Suppliers,
            MasterKey::MedicineTypes,
            MasterKey::PaymentMethods,
            MasterKey::ShopTypes,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|k| k.code() == code)
    }
}

impl std::fmt::Display for MasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_code() {
        for key in MasterKey::all() {
            assert_eq!(MasterKey::from_code(key.code()), Some(key));
        }
        assert_eq!(MasterKey::from_code("medicines"), None);
    }

    #[test]
    fn test_serde_uses_snake_case_codes() {
        let json = serde_json::to_string(&MasterKey::GstSlabs).unwrap();
        assert_eq!(json, "\"gst_slabs\"");
        let key: MasterKey = serde_json::from_str("\"hsn_codes\"").unwrap();
        assert_eq!(key, MasterKey::HsnCodes);
    }
}
