//! Selects bound to the master data cache
//!
//! Every control reads options from [`MasterDataService`] and never fetches
//! on its own. While the cache loads they show "Loading…"; when a collection
//! is empty they stay disabled and point the user to the Masters section.

use contracts::masters::MasterKey;
use leptos::prelude::*;

use super::select_model::{build_view, hsn_selection, MasterSelectView, SelectFilter};
use super::service::use_master_data;
use crate::shared::components::ui::Select;

/// Select over any master kind
#[component]
pub fn MasterSelect(
    master: MasterKey,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] label: MaybeProp<String>,
    /// Narrowing applied before projection (warehouse, entity type)
    #[prop(optional, into)]
    filter: Signal<SelectFilter>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] id: MaybeProp<String>,
) -> impl IntoView {
    let service = use_master_data();

    let view_state = Memo::new(move |_| {
        let filter = filter.get();
        let disabled = disabled.get();
        service.with_cache(|cache| build_view(cache, master, &filter, disabled))
    });

    let options = Signal::derive(move || view_state.with(|v| v.options.clone()));
    let placeholder = Signal::derive(move || view_state.with(|v| Some(v.placeholder.clone())));
    let title = Signal::derive(move || view_state.with(|v| v.title.clone()));
    let is_disabled = Signal::derive(move || view_state.with(|v: &MasterSelectView| v.disabled));

    view! {
        <Select
            label=label
            value=value
            on_change=on_change
            options=options
            placeholder=placeholder
            disabled=is_disabled
            title=title
            required=required
            id=id
        />
    }
}

#[component]
pub fn CategorySelect(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <MasterSelect master=MasterKey::Categories value=value on_change=on_change
            label="Category" disabled=disabled required=required />
    }
}

#[component]
pub fn UnitSelect(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <MasterSelect master=MasterKey::Units value=value on_change=on_change
            label="Unit" disabled=disabled required=required />
    }
}

#[component]
pub fn GstSlabSelect(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <MasterSelect master=MasterKey::GstSlabs value=value on_change=on_change
            label="GST slab" disabled=disabled required=required />
    }
}

#[component]
pub fn BrandSelect(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <MasterSelect master=MasterKey::Brands value=value on_change=on_change
            label="Brand" disabled=disabled required=required />
    }
}

#[component]
pub fn ManufacturerSelect(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <MasterSelect master=MasterKey::Manufacturers value=value on_change=on_change
            label="Manufacturer" disabled=disabled required=required />
    }
}

#[component]
pub fn SupplierSelect(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <MasterSelect master=MasterKey::Suppliers value=value on_change=on_change
            label="Supplier" disabled=disabled required=required />
    }
}

#[component]
pub fn WarehouseSelect(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <MasterSelect master=MasterKey::Warehouses value=value on_change=on_change
            label="Warehouse" disabled=disabled required=required />
    }
}

#[component]
pub fn MedicineTypeSelect(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <MasterSelect master=MasterKey::MedicineTypes value=value on_change=on_change
            label="Medicine type" disabled=disabled required=required />
    }
}

#[component]
pub fn PaymentMethodSelect(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <MasterSelect master=MasterKey::PaymentMethods value=value on_change=on_change
            label="Payment method" disabled=disabled required=required />
    }
}

#[component]
pub fn ShopTypeSelect(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <MasterSelect master=MasterKey::ShopTypes value=value on_change=on_change
            label="Shop type" disabled=disabled required=required />
    }
}

/// HSN code select.
///
/// Reports the selected code together with its GST rate, looked up in the
/// cache. An unknown code reports `None` for the rate.
#[component]
pub fn HsnCodeSelect(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<(String, Option<f64>)>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let service = use_master_data();
    let on_code = Callback::new(move |code: String| {
        let selection = service.with_cache(|cache| hsn_selection(cache, &code));
        on_change.run(selection);
    });

    view! {
        <MasterSelect master=MasterKey::HsnCodes value=value on_change=on_code
            label="HSN code" disabled=disabled required=required />
    }
}

/// Shops of one warehouse; all shops while no warehouse is chosen
#[component]
pub fn ShopSelect(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] warehouse_id: MaybeProp<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let filter = Signal::derive(move || match warehouse_id.get() {
        Some(w) if !w.is_empty() => SelectFilter::warehouse(w),
        _ => SelectFilter::default(),
    });

    view! {
        <MasterSelect master=MasterKey::Shops value=value on_change=on_change
            label="Shop" filter=filter disabled=disabled required=required />
    }
}

/// Statuses that apply to one entity type, e.g. "medicine" or "dispatch"
#[component]
pub fn StatusSelect(
    #[prop(into)] entity_type: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let filter = Signal::derive(move || SelectFilter::entity(entity_type.clone()));

    view! {
        <MasterSelect master=MasterKey::Statuses value=value on_change=on_change
            label="Status" filter=filter disabled=disabled required=required />
    }
}
