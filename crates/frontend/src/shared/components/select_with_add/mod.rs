//! Select with an inline "Add new" creation form

pub mod component;
pub mod state;

pub use component::SelectWithAdd;
pub use state::{AddField, AddSelectEvent, AddSelectState, FieldKind, FormValues};
