//! Sidebar with collapsible menu groups

use crate::layout::global_context::{use_global_context, PageKey};
use crate::masters::use_master_data;
use crate::shared::icons::icon;
use contracts::masters::MasterKey;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<PageKey>,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "inventory",
            label: "Inventory",
            icon: "pill",
            items: vec![PageKey::MedicineForm],
        },
        MenuGroup {
            id: "masters",
            label: "Masters",
            icon: "database",
            items: MasterKey::all().into_iter().map(PageKey::Master).collect(),
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let masters = use_master_data();
    let expanded_groups = RwSignal::new(vec!["inventory", "masters"]);

    view! {
        <div class="app-sidebar__content">
            {menu_groups().into_iter().map(|group| {
                let gid = group.id;
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                expanded_groups.update(|items| {
                                    if let Some(pos) = items.iter().position(|x| *x == gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=move || expanded_groups.get().contains(&gid)>
                            {group.items.iter().map(|page| {
                                let page = *page;
                                // Record counts once the cache has the collection
                                let count = move || match page {
                                    PageKey::Master(key) => masters
                                        .with_cache(|c| c.is_loaded(key).then(|| c.get(key).len())),
                                    PageKey::MedicineForm => None,
                                };
                                view! {
                                    <div
                                        class="app-sidebar__item app-sidebar__item--child"
                                        class:app-sidebar__item--active=move || ctx.active.get() == page
                                        style:padding-left="32px"
                                        on:click=move |_| ctx.navigate(page)
                                    >
                                        <span>{page.title()}</span>
                                        {move || count().map(|n| view! {
                                            <span class="app-sidebar__badge">{n}</span>
                                        })}
                                    </div>
                                }
                            }).collect_view()}
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
