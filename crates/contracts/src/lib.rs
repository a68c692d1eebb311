pub mod masters;
pub mod medicine;
pub mod shared;
