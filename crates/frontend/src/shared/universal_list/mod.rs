//! Paginated, searchable list page over any fetcher

pub mod state;

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use contracts::shared::pagination::{PageRequest, PageResult};
use leptos::prelude::*;

use crate::shared::api_error::ApiError;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{ColumnDescriptor, DataTable, TablePagination, TableRow};
use crate::shared::config::use_app_config;
use crate::shared::list_utils::SearchInput;

pub use state::{create_state, ApplyOutcome, FailurePolicy, ListPageState, ListQuery, RequestSequence};

type PageFuture<T> = Pin<Box<dyn Future<Output = Result<PageResult<T>, ApiError>>>>;
type Fetcher<T> = Rc<dyn Fn(PageRequest, String) -> PageFuture<T>>;

/// List page: header with actions, search bar fused with the table, pager.
///
/// `fetcher` is called with the page request and the trimmed search text
/// whenever either changes, and again whenever `reload_trigger` changes.
/// Only the response to the most recent call is shown.
#[component]
pub fn UniversalListPage<T, F, Fut>(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    columns: Vec<ColumnDescriptor<T>>,
    fetcher: F,
    #[prop(optional)] failure_policy: FailurePolicy,
    /// Bump to refetch the current page
    #[prop(optional, into)]
    reload_trigger: MaybeProp<u64>,
    #[prop(optional, into)] search_placeholder: String,
    #[prop(optional, into)] empty_message: Option<String>,
    #[prop(optional)] on_row_click: Option<Callback<T>>,
    /// Buttons rendered in the page header
    #[prop(optional)]
    actions: Option<ChildrenFn>,
) -> impl IntoView
where
    T: TableRow + Clone + Send + Sync + 'static,
    F: Fn(PageRequest, String) -> Fut + 'static,
    Fut: Future<Output = Result<PageResult<T>, ApiError>> + 'static,
{
    let config = use_app_config();
    let state = create_state::<T>(config.list.default_page_size);
    let fetcher: Fetcher<T> = Rc::new(move |req, search| Box::pin(fetcher(req, search)) as PageFuture<T>);
    let fetcher = StoredValue::new_local(fetcher);

    let query = Memo::new(move |_| state.with(|s| s.query()));

    let run_fetch = move || {
        let (request_id, q) = state
            .try_update(|s| (s.begin_fetch(), s.query()))
            .unwrap_or_else(|| (0, state.with_untracked(|s| s.query())));
        let fut = fetcher.with_value(|f| f(q.request(), q.search.clone()));
        wasm_bindgen_futures::spawn_local(async move {
            let result = fut.await;
            let outcome = state
                .try_update(|s| s.apply(request_id, result, failure_policy))
                .unwrap_or(ApplyOutcome::Stale);
            if outcome == ApplyOutcome::Refetch {
                log::debug!("Page out of range after fetch, refetching");
            }
        });
    };

    // Page, size and search live in `state`; the memo only fires when they change.
    // A clamped page (Refetch) changes the query and lands here again.
    Effect::new(move |_| {
        query.track();
        let _ = reload_trigger.get();
        untrack(run_fetch);
    });

    let items = Signal::derive(move || state.with(|s| s.items.clone()));
    let loading = Signal::derive(move || Some(state.with(|s| s.loading)));
    let error = Signal::derive(move || state.with(|s| s.error.clone()));

    let pagination = TablePagination {
        current_page: Signal::derive(move || state.with(|s| s.page)),
        page_size: Signal::derive(move || state.with(|s| s.page_size)),
        total_items: Signal::derive(move || state.with(|s| s.total)),
        page_size_options: config.list.page_size_options.clone(),
        on_page_change: Callback::new(move |page: usize| state.update(|s| s.set_page(page))),
        on_page_size_change: Callback::new(move |size: usize| {
            state.update(|s| s.set_page_size(size))
        }),
    };

    let search_value = Signal::derive(move || state.with(|s| s.search.clone()));
    let on_search = Callback::new(move |text: String| {
        // Untracked compare: only a real change may reset the page
        if state.with_untracked(|s| s.search != text.trim()) {
            state.update(|s| {
                s.set_search(&text);
            });
        }
    });
    let debounce_ms = config.list.search_debounce_ms;
    let search_placeholder = if search_placeholder.is_empty() {
        "Search by name or code…".to_string()
    } else {
        search_placeholder
    };
    let search_bar = ViewFn::from(move || {
        view! {
            <SearchInput
                value=search_value
                on_change=on_search
                placeholder=search_placeholder.clone()
                debounce_ms=debounce_ms
            />
        }
    });

    let on_retry = (failure_policy == FailurePolicy::Surface)
        .then(|| Callback::new(move |_: ()| run_fetch()));

    view! {
        <div class="page page--list">
            <PageHeader title=title subtitle=subtitle>
                {actions.as_ref().map(|a| a())}
            </PageHeader>
            <DataTable
                data=items
                columns=columns
                loading=loading
                error=error
                empty_message=empty_message.unwrap_or_else(|| "No records found".to_string())
                on_retry=on_retry
                on_row_click=on_row_click
                header=search_bar
                embedded=true
                pagination=pagination
            />
        </div>
    }
}
