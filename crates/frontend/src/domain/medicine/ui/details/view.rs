use super::view_model::MedicineFormViewModel;
use contracts::masters::MasterKey;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Spinner, SpinnerSize};

use crate::masters::forms::fields_for;
use crate::masters::projection::{format_rate, to_option};
use crate::masters::{
    use_master_data, HsnCodeSelect, MedicineTypeSelect, ShopSelect, StatusSelect, UnitSelect,
    WarehouseSelect,
};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::select_with_add::SelectWithAdd;
use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;

/// New medicine form wired to the master selects
#[component]
pub fn MedicineForm() -> impl IntoView {
    let masters = use_master_data();
    let vm = MedicineFormViewModel::new(masters, use_notifications());
    let form = vm.form;

    let categories = Signal::derive(move || {
        masters.with_cache(|c| {
            c.get(MasterKey::Categories)
                .iter()
                .map(to_option)
                .collect::<Vec<_>>()
        })
    });
    let category_placeholder = Signal::derive(move || {
        Some(if masters.is_loading() {
            "Loading…".to_string()
        } else {
            "Select category".to_string()
        })
    });

    let gst_display = move || {
        form.with(|f| match f.gst_rate {
            Some(rate) => format!("{}%", format_rate(rate)),
            None => "-".to_string(),
        })
    };
    let warehouse = Signal::derive(move || form.with(|f| Some(f.warehouse_id.clone())));

    view! {
        <div class="details-container medicine-form">
            <PageHeader title="New medicine" subtitle="Fields marked * are required".to_string()>
                <Show
                    when=move || vm.saving.get()
                    fallback=move || view! {
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || !vm.is_form_valid())
                            on_click=move |_| vm.save_command()
                        >
                            {icon("save")}
                            " Save"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.reset()>
                            {icon("cancel")}
                            " Clear"
                        </Button>
                    }
                >
                    <Spinner size=SpinnerSize::Small label="Saving…" />
                </Show>
            </PageHeader>

            {move || vm.error.get().map(|e| view! {
                <div class="error" role="alert">{icon("alert")}<span>{e}</span></div>
            })}

            <div class="details-form details-form--grid">
                <Input
                    label="Name"
                    id="medicine-name"
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                    placeholder="Brand name as printed"
                    required=true
                />
                <Input
                    label="Generic name"
                    id="medicine-generic"
                    value=Signal::derive(move || form.with(|f| f.generic_name.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.generic_name = v))
                    placeholder="Salt composition"
                />

                <SelectWithAdd
                    label="Category"
                    options=categories
                    value=Signal::derive(move || form.with(|f| f.category.clone()))
                    on_change=Callback::new(move |id: String| form.update(|f| f.category = id))
                    fields=fields_for(MasterKey::Categories)
                    on_create=move |values| vm.create_category(values)
                    placeholder=category_placeholder
                    add_label="Add new category"
                    required=true
                />
                <MedicineTypeSelect
                    value=Signal::derive(move || form.with(|f| f.medicine_type.clone()))
                    on_change=Callback::new(move |id: String| form.update(|f| f.medicine_type = id))
                />
                <UnitSelect
                    value=Signal::derive(move || form.with(|f| f.unit.clone()))
                    on_change=Callback::new(move |id: String| form.update(|f| f.unit = id))
                    required=true
                />

                <HsnCodeSelect
                    value=Signal::derive(move || form.with(|f| f.hsn_code.clone()))
                    on_change=Callback::new(move |(code, rate): (String, Option<f64>)| vm.set_hsn(code, rate))
                    required=true
                />
                <div class="form__group">
                    <label class="form__label" for="medicine-gst">"GST rate"</label>
                    <input id="medicine-gst" class="form__input" readonly prop:value=gst_display />
                </div>
                <Input
                    label="MRP"
                    id="medicine-mrp"
                    input_type="number"
                    value=Signal::derive(move || {
                        form.with(|f| f.mrp.map(|v| v.to_string()).unwrap_or_default())
                    })
                    on_input=Callback::new(move |v: String| vm.set_mrp(v))
                    placeholder="0.00"
                />

                <WarehouseSelect
                    value=Signal::derive(move || form.with(|f| f.warehouse_id.clone()))
                    on_change=Callback::new(move |id: String| vm.set_warehouse(id))
                />
                <ShopSelect
                    value=Signal::derive(move || form.with(|f| f.shop_id.clone()))
                    on_change=Callback::new(move |id: String| form.update(|f| f.shop_id = id))
                    warehouse_id=warehouse
                />
                <StatusSelect
                    entity_type="medicine"
                    value=Signal::derive(move || form.with(|f| f.status.clone()))
                    on_change=Callback::new(move |id: String| form.update(|f| f.status = id))
                    required=true
                />
            </div>
        </div>
    }
}
