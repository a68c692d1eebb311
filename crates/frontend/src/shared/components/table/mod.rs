//! Generic table renderer

pub mod body;
pub mod column;
pub mod data_table;

pub use body::{BodyPlan, SKELETON_ROWS};
pub use column::{Align, CellRender, ColumnDescriptor, TableRow};
pub use data_table::{DataTable, TablePagination};
