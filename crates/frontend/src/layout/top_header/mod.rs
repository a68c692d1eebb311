//! Top bar: sidebar toggle, title of the active page and master data status

use crate::layout::global_context::use_global_context;
use crate::masters::use_master_data;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let masters = use_master_data();

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Pharmacy Admin"</span>
                <span class="top-header__page">{move || ctx.active.get().title()}</span>
            </div>

            <div class="top-header__actions">
                <Show
                    when=move || masters.is_loading()
                    fallback=|| view! {
                        <span class="top-header__status" title="Master data loaded">{icon("check")}</span>
                    }
                >
                    <span class="top-header__status">
                        <Spinner size=SpinnerSize::Tiny />
                        " Loading master data…"
                    </span>
                </Show>
            </div>
        </div>
    }
}
