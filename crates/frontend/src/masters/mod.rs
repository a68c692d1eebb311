//! Master data on the client: cache, REST calls, projections and selects

pub mod api;
pub mod cache;
pub mod components;
pub mod forms;
pub mod projection;
pub mod select_model;
pub mod service;

pub use cache::MasterDataCache;
pub use components::*;
pub use projection::SelectOption;
pub use select_model::{MasterSelectView, SelectFilter};
pub use service::{provide_master_data, use_master_data, MasterDataService};
