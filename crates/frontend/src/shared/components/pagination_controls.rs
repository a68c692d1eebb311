use crate::shared::icons::icon;
use crate::shared::pagination::{
    has_next, has_prev, next_page, page_sequence, prev_page, range_label, total_pages, PageItem,
};
use leptos::prelude::*;

/// Pagination footer: range label, numbered page buttons and page size picker.
///
/// Pages are 1-based.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_items: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    /// Defaults to [10, 20, 50, 100]
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![10, 20, 50, 100]);
    let pages = move || total_pages(total_items.get(), page_size.get());

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || range_label(current_page.get(), page_size.get(), total_items.get())}
            </span>
            <button
                class="pagination-btn"
                title="Previous page"
                disabled=move || !has_prev(current_page.get())
                on:click=move |_| {
                    let page = current_page.get_untracked();
                    if has_prev(page) {
                        on_page_change.run(prev_page(page));
                    }
                }
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = current_page.get();
                page_sequence(current, pages())
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(n) => view! {
                            <button
                                class="pagination-btn pagination-btn--page"
                                class:pagination-btn--active=n == current
                                on:click=move |_| {
                                    if n != current_page.get_untracked() {
                                        on_page_change.run(n);
                                    }
                                }
                            >
                                {n.to_string()}
                            </button>
                        }
                        .into_any(),
                        PageItem::Ellipsis => view! {
                            <span class="pagination-ellipsis">"…"</span>
                        }
                        .into_any(),
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                title="Next page"
                disabled=move || !has_next(current_page.get(), pages())
                on:click=move |_| {
                    let page = current_page.get_untracked();
                    let total = total_pages(total_items.get_untracked(), page_size.get_untracked());
                    if has_next(page, total) {
                        on_page_change.run(next_page(page, total));
                    }
                }
            >
                {icon("chevron-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(val) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(val);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {format!("{} / page", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
