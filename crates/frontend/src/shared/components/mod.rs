pub mod page_header;
pub mod pagination_controls;
pub mod select_with_add;
pub mod table;
pub mod ui;
