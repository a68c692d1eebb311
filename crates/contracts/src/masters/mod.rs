//! Master data: reference lookup tables shared by every dashboard page

pub mod key;
pub mod records;

pub use key::MasterKey;
pub use records::{
    Brand, Category, CodedName, GstSlab, HsnCode, Manufacturer, MasterRecord, PaymentMethod,
    RecordMeta, Shop, Status, Supplier, Unit, Warehouse,
};
