//! Frontend configuration.
//!
//! Defaults are embedded as TOML; the hosting page may override any of them by
//! defining `window.__APP_CONFIG__` with the same structure before the wasm
//! bundle starts.

use serde::Deserialize;

use super::api_utils::window_api_base;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub list: ListConfig,
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub permissions: PermissionConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Empty means "same host as the page, port 3000"
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    pub search_debounce_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationConfig {
    pub dismiss_after_ms: u32,
}

/// Permissions granted to the current user, e.g. `"masters.create"`.
/// `"*"` grants everything, `"masters.*"` everything under `masters`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PermissionConfig {
    pub granted: Vec<String>,
}

impl Default for PermissionConfig {
    fn default() -> Self {
        Self {
            granted: vec!["*".to_string()],
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[list]
default_page_size = 20
page_size_options = [10, 20, 50, 100]
search_debounce_ms = 300

[notifications]
dismiss_after_ms = 4000

[permissions]
granted = ["*"]
"#;

/// Partial override read from `window.__APP_CONFIG__`
#[derive(Debug, Deserialize, Default)]
struct ConfigOverride {
    #[serde(default)]
    api: Option<ApiConfig>,
    #[serde(default)]
    list: Option<ListConfig>,
    #[serde(default)]
    notifications: Option<NotificationConfig>,
    #[serde(default)]
    permissions: Option<PermissionConfig>,
}

impl AppConfig {
    pub fn embedded() -> Result<Self, toml::de::Error> {
        toml::from_str(DEFAULT_CONFIG)
    }

    /// Embedded defaults merged with the page-provided override, if any
    pub fn load() -> Self {
        let mut config = match Self::embedded() {
            Ok(c) => c,
            Err(e) => {
                log::error!("Embedded config is invalid: {}", e);
                Self::fallback()
            }
        };

        if let Some(over) = read_window_override() {
            log::info!("Applying window.__APP_CONFIG__ override");
            config.apply(over);
        }

        config.normalize();
        config
    }

    fn fallback() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
            },
            list: ListConfig {
                default_page_size: 20,
                page_size_options: vec![10, 20, 50, 100],
                search_debounce_ms: 300,
            },
            notifications: NotificationConfig {
                dismiss_after_ms: 4000,
            },
            permissions: PermissionConfig::default(),
        }
    }

    fn apply(&mut self, over: ConfigOverride) {
        if let Some(api) = over.api {
            self.api = api;
        }
        if let Some(list) = over.list {
            self.list = list;
        }
        if let Some(n) = over.notifications {
            self.notifications = n;
        }
        if let Some(p) = over.permissions {
            self.permissions = p;
        }
    }

    /// Page size must be one of the offered options
    fn normalize(&mut self) {
        self.list.page_size_options.retain(|s| *s > 0);
        if self.list.page_size_options.is_empty() {
            self.list.page_size_options = vec![self.list.default_page_size.max(1)];
        }
        self.list.page_size_options.sort_unstable();
        self.list.page_size_options.dedup();
        if !self
            .list
            .page_size_options
            .contains(&self.list.default_page_size)
        {
            self.list.default_page_size = self.list.page_size_options[0];
        }
        self.api.base_url = self.api.base_url.trim_end_matches('/').to_string();
    }

    pub fn api_base(&self) -> String {
        if self.api.base_url.is_empty() {
            window_api_base()
        } else {
            self.api.base_url.clone()
        }
    }

    /// Full URL for an API path such as `/api/masters/units`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base(), path)
    }
}

/// Configuration provided by the app root; falls back to loading it
pub fn use_app_config() -> AppConfig {
    leptos::prelude::use_context::<AppConfig>().unwrap_or_else(AppConfig::load)
}

fn read_window_override() -> Option<ConfigOverride> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str("__APP_CONFIG__")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value::<ConfigOverride>(value) {
        Ok(over) => Some(over),
        Err(e) => {
            log::warn!("Ignoring malformed window.__APP_CONFIG__: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::embedded().unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.list.default_page_size, 20);
        assert_eq!(config.list.page_size_options, vec![10, 20, 50, 100]);
        assert_eq!(config.notifications.dismiss_after_ms, 4000);
        assert_eq!(config.permissions.granted, vec!["*"]);
    }

    #[test]
    fn test_normalize_fixes_page_size() {
        let mut config = AppConfig::embedded().unwrap();
        config.list.default_page_size = 25;
        config.list.page_size_options = vec![50, 0, 10, 50];
        config.api.base_url = "https://pharma.example/".to_string();
        config.normalize();
        assert_eq!(config.list.page_size_options, vec![10, 50]);
        assert_eq!(config.list.default_page_size, 10);
        assert_eq!(config.api_url("/api/masters/units"), "https://pharma.example/api/masters/units");
    }

    #[test]
    fn test_override_replaces_sections() {
        let mut config = AppConfig::embedded().unwrap();
        config.apply(ConfigOverride {
            api: Some(ApiConfig {
                base_url: "http://10.0.0.5:8080".to_string(),
            }),
            ..Default::default()
        });
        assert_eq!(config.api.base_url, "http://10.0.0.5:8080");
        assert_eq!(config.list.default_page_size, 20);
    }
}
