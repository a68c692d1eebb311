use crate::domain::masters::ui::list::MasterListPage;
use crate::domain::medicine::ui::details::MedicineForm;
use crate::layout::global_context::{use_global_context, PageKey};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;

/// Page body for the active sidebar entry
#[component]
fn ActivePage() -> impl IntoView {
    let ctx = use_global_context();

    move || match ctx.active.get() {
        // Keyed by master so switching collections rebuilds the list state
        PageKey::Master(master) => view! { <MasterListPage master=master /> }.into_any(),
        PageKey::MedicineForm => view! { <MedicineForm /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_global_context();

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <ActivePage /> }.into_any()
        />
    }
}
