pub mod masters;
pub mod medicine;
