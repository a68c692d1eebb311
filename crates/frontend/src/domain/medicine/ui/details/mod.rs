//! Medicine form UI module
//!
//! - model.rs: API functions
//! - view_model.rs: form state and commands
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::MedicineForm;
pub use view_model::MedicineFormViewModel;
