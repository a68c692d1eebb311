use crate::layout::global_context::use_global_context;
use leptos::prelude::*;

/// Content zone; scrolls independently of the sidebar
#[component]
pub fn Center(children: Children) -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div
            data-zone="center"
            class="app-center"
            class:app-center--wide=move || !ctx.left_open.get()
            style="flex: 1; overflow: auto;"
        >
            {children()}
        </div>
    }
}
