use super::model;
use contracts::masters::MasterKey;
use contracts::medicine::MedicineDto;
use leptos::prelude::*;

use crate::masters::forms::create_from_form;
use crate::masters::{MasterDataService, SelectOption};
use crate::shared::components::select_with_add::FormValues;
use crate::shared::notifications::NotificationService;

/// ViewModel for the medicine form
#[derive(Clone, Copy)]
pub struct MedicineFormViewModel {
    pub form: RwSignal<MedicineDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub masters: MasterDataService,
    pub notifications: NotificationService,
}

impl MedicineFormViewModel {
    pub fn new(masters: MasterDataService, notifications: NotificationService) -> Self {
        Self {
            form: RwSignal::new(MedicineDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            masters,
            notifications,
        }
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| f.missing_fields().is_empty())
    }

    /// HSN code and the GST rate derived from it arrive together
    pub fn set_hsn(&self, code: String, gst_rate: Option<f64>) {
        self.form.update(|f| {
            f.hsn_code = code;
            f.gst_rate = gst_rate;
        });
    }

    /// Keeps the shop only when it belongs to the new warehouse
    pub fn set_warehouse(&self, warehouse_id: String) {
        let shop_id = self.form.with_untracked(|f| f.shop_id.clone());
        let shop_in_warehouse = !shop_id.is_empty()
            && self.masters.with_cache(|c| {
                c.find_by_id(MasterKey::Shops, &shop_id)
                    .and_then(|s| s.warehouse_id().map(|w| w == warehouse_id))
                    .unwrap_or(false)
            });
        self.form
            .update(|f| f.set_warehouse(warehouse_id, shop_in_warehouse));
    }

    pub fn set_mrp(&self, text: String) {
        let mrp = text.trim().parse::<f64>().ok().filter(|v| *v >= 0.0);
        self.form.update(|f| f.mrp = mrp);
    }

    /// Inline category creation from the category select
    pub async fn create_category(self, values: FormValues) -> Result<SelectOption, String> {
        let result = create_from_form(self.masters, MasterKey::Categories, values).await;
        match &result {
            Ok(option) => self
                .notifications
                .success(format!("Category '{}' created", option.label)),
            Err(e) => self.notifications.error(e.clone()),
        }
        result
    }

    pub fn reset(&self) {
        self.form.set(MedicineDto::default());
        self.error.set(None);
    }

    pub fn save_command(&self) {
        let current = self.form.get_untracked();
        let missing = current.missing_fields();
        if !missing.is_empty() {
            self.error
                .set(Some(format!("Required: {}", missing.join(", "))));
            return;
        }

        self.error.set(None);
        self.saving.set(true);
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::save_form(&this.masters.api_base(), &current).await;
            this.saving.set(false);
            match result {
                Ok(saved) => {
                    this.notifications
                        .success(format!("Medicine '{}' saved", saved.name));
                    this.reset();
                }
                Err(e) => {
                    let message = e.user_message();
                    this.notifications.error(message.clone());
                    this.error.set(Some(message));
                }
            }
        });
    }
}
