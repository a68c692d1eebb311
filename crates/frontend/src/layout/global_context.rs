use contracts::masters::MasterKey;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKey {
    Master(MasterKey),
    MedicineForm,
}

impl PageKey {
    /// Value of the `?page=` query parameter
    pub fn code(&self) -> String {
        match self {
            PageKey::Master(key) => format!("masters.{}", key.code()),
            PageKey::MedicineForm => "medicine_form".to_string(),
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        if code == "medicine_form" {
            return Some(PageKey::MedicineForm);
        }
        code.strip_prefix("masters.")
            .and_then(MasterKey::from_code)
            .map(PageKey::Master)
    }

    pub fn title(&self) -> String {
        match self {
            PageKey::Master(key) => key.display_name().to_string(),
            PageKey::MedicineForm => "Medicine form".to_string(),
        }
    }
}

impl Default for PageKey {
    fn default() -> Self {
        PageKey::MedicineForm
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<PageKey>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(PageKey::default()),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore the active page from `?page=` and keep the URL in sync with it
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("page").and_then(|p| PageKey::from_code(p)) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let code = this.active.get().code();
            let query_string =
                serde_qs::to_string(&HashMap::from([("page".to_string(), code)])).unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, page: PageKey) {
        log::debug!("navigate: {}", page.code());
        self.active.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_key_codes() {
        let page = PageKey::Master(MasterKey::HsnCodes);
        assert_eq!(page.code(), "masters.hsn_codes");
        assert_eq!(PageKey::from_code("masters.hsn_codes"), Some(page));
        assert_eq!(PageKey::from_code("medicine_form"), Some(PageKey::MedicineForm));
        assert_eq!(PageKey::from_code("masters.unknown"), None);
        assert_eq!(PageKey::from_code("dashboard"), None);
    }
}
