pub mod error_body;
pub mod pagination;
