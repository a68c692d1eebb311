use contracts::masters::{MasterKey, MasterRecord};
use leptos::prelude::*;
use std::rc::Rc;

use crate::masters::forms::{fields_for, payload_from};
use crate::masters::MasterDataService;
use crate::shared::components::select_with_add::state::{missing_required, validation_message};
use crate::shared::components::select_with_add::FormValues;
use crate::shared::notifications::NotificationService;

/// ViewModel for the create-master drawer
#[derive(Clone, Copy)]
pub struct MasterCreateViewModel {
    pub key: MasterKey,
    pub values: RwSignal<FormValues>,
    pub error: RwSignal<Option<String>>,
    pub submitting: RwSignal<bool>,
}

impl MasterCreateViewModel {
    pub fn new(key: MasterKey) -> Self {
        Self {
            key,
            values: RwSignal::new(FormValues::new()),
            error: RwSignal::new(None),
            submitting: RwSignal::new(false),
        }
    }

    pub fn value(&self, name: &str) -> String {
        self.values.with(|v| v.get(name).cloned().unwrap_or_default())
    }

    pub fn set_value(&self, name: &str, value: String) {
        self.values.update(|v| {
            v.insert(name.to_string(), value);
        });
    }

    pub fn reset(&self) {
        self.values.set(FormValues::new());
        self.error.set(None);
        self.submitting.set(false);
    }

    /// Validate, create, then hand the created record to `on_saved`.
    ///
    /// Failures stay in the drawer and are also reported as a notification.
    pub fn save_command(
        &self,
        service: MasterDataService,
        notifications: NotificationService,
        on_saved: Rc<dyn Fn(MasterRecord)>,
    ) {
        if self.submitting.get_untracked() {
            return;
        }
        let key = self.key;
        let values = self.values.get_untracked();

        let fields = fields_for(key);
        let missing = missing_required(&fields, &values);
        if !missing.is_empty() {
            self.error.set(Some(validation_message(&missing)));
            return;
        }
        let payload = match payload_from(key, &values) {
            Ok(p) => p,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };

        self.error.set(None);
        self.submitting.set(true);
        let error = self.error;
        let submitting = self.submitting;
        wasm_bindgen_futures::spawn_local(async move {
            let result = service.create(key, payload).await;
            submitting.set(false);
            match result {
                Ok(record) => {
                    notifications.success(format!(
                        "{} '{}' created",
                        capitalize(key.singular_noun()),
                        record.name()
                    ));
                    (on_saved)(record);
                }
                Err(e) => {
                    let message = e.user_message();
                    notifications.error(message.clone());
                    error.set(Some(message));
                }
            }
        });
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("HSN code"), "HSN code");
        assert_eq!(capitalize("category"), "Category");
        assert_eq!(capitalize(""), "");
    }
}
