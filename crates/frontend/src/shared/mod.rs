pub mod api_error;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod notifications;
pub mod pagination;
pub mod permissions;
pub mod universal_list;
