pub mod columns;

use contracts::masters::{MasterKey, MasterRecord};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::domain::masters::ui::create::MasterCreateDrawer;
use crate::masters::api::fetch_master_page;
use crate::masters::use_master_data;
use crate::shared::icons::icon;
use crate::shared::permissions::use_permissions;
use crate::shared::universal_list::{FailurePolicy, UniversalListPage};
use columns::columns_for;

/// Permission needed to create records of `key`
pub fn create_permission(key: MasterKey) -> String {
    format!("masters.{}.create", key.code())
}

/// Management page of one master collection
#[component]
pub fn MasterListPage(master: MasterKey) -> impl IntoView {
    let service = use_master_data();
    let permissions = use_permissions();
    let drawer_open = RwSignal::new(false);
    let reload = RwSignal::new(0u64);

    let api_base = service.api_base();
    let fetcher = move |request, search: String| {
        let api_base = api_base.clone();
        async move { fetch_master_page(&api_base, master, request, &search).await }
    };

    let on_saved = Callback::new(move |record: MasterRecord| {
        log::debug!("Created {} {}", master, record.id());
        reload.update(|n| *n += 1);
    });

    let can_create = move || permissions.can(&create_permission(master));
    let actions: ChildrenFn = std::sync::Arc::new(move || {
        view! {
            <Show when=can_create>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| drawer_open.set(true)>
                    {icon("plus")}
                    {format!(" New {}", master.singular_noun())}
                </Button>
            </Show>
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| {
                    service.reload(master);
                    reload.update(|n| *n += 1);
                }
            >
                {icon("refresh")}
                " Refresh"
            </Button>
        }
        .into_any()
    });

    view! {
        <UniversalListPage
            title=master.display_name()
            subtitle=format!("Reference list of {}", master.plural_noun())
            columns=columns_for(master, service)
            fetcher=fetcher
            failure_policy=FailurePolicy::Surface
            reload_trigger=Signal::derive(move || Some(reload.get()))
            search_placeholder=format!("Search {}…", master.plural_noun())
            empty_message=format!("No {} yet", master.plural_noun())
            actions=actions
        />
        <MasterCreateDrawer master=master open=drawer_open on_saved=on_saved />
    }
}
