use super::body::BodyPlan;
use super::column::{ColumnDescriptor, TableRow};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::pagination::{should_render, total_pages};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

/// Pagination footer configuration for [`DataTable`]
#[derive(Clone)]
pub struct TablePagination {
    pub current_page: Signal<usize>,
    pub page_size: Signal<usize>,
    pub total_items: Signal<usize>,
    pub page_size_options: Vec<usize>,
    pub on_page_change: Callback<usize>,
    pub on_page_size_change: Callback<usize>,
}

/// Generic column-described table with loading, empty and error states.
///
/// Never fetches on its own; it only calls back into the owner.
#[component]
pub fn DataTable<T>(
    #[prop(into)] data: Signal<Vec<T>>,
    columns: Vec<ColumnDescriptor<T>>,
    #[prop(optional, into)] loading: MaybeProp<bool>,
    /// Set to show the error state instead of rows
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(default = None, into)] empty_message: Option<String>,
    #[prop(default = None, into)] on_retry: Option<Callback<()>>,
    #[prop(default = None, into)] on_row_click: Option<Callback<T>>,
    /// Control region above the column headers (search / filter bar)
    #[prop(optional, into)]
    header: Option<ViewFn>,
    /// Fuse the header slot with the table's top edge
    #[prop(optional)]
    embedded: bool,
    #[prop(optional)] pagination: Option<TablePagination>,
) -> impl IntoView
where
    T: TableRow + Clone + Send + Sync + 'static,
{
    let empty_message = empty_message.unwrap_or_else(|| "No records found".to_string());
    let column_count = columns.len();
    let columns = StoredValue::new(columns);

    let plan = Memo::new(move |_| {
        let err = error.get();
        BodyPlan::plan(
            data.with(|d| d.len()),
            column_count,
            loading.get().unwrap_or(false),
            err.as_deref(),
            &empty_message,
            on_retry.is_some(),
        )
    });

    let header_cells = columns.with_value(|cols| {
        cols.iter()
            .map(|col| {
                view! {
                    <th class=col.header_class() style=col.width_style()>
                        {col.header.clone()}
                    </th>
                }
            })
            .collect_view()
    });

    let body = move || match plan.get() {
        BodyPlan::Error { message, can_retry } => view! {
            <tr class="table__row table__row--error">
                <td class="table__cell table__cell--error" colspan=column_count.max(1).to_string()>
                    <div class="table__error">
                        {icon("alert")}
                        <span>{message}</span>
                        {(can_retry)
                            .then(|| on_retry)
                            .flatten()
                            .map(|retry| view! {
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| retry.run(())
                                >
                                    "Try again"
                                </Button>
                            })}
                    </div>
                </td>
            </tr>
        }
        .into_any(),
        BodyPlan::Skeleton { rows, columns: cols } => (0..rows)
            .map(|_| {
                view! {
                    <tr class="table__row table__row--skeleton">
                        {(0..cols)
                            .map(|_| view! { <td class="table__cell"><div class="skeleton-bar"></div></td> })
                            .collect_view()}
                    </tr>
                }
            })
            .collect_view()
            .into_any(),
        BodyPlan::Empty { message, colspan } => view! {
            <tr class="table__row">
                <td class="table__cell table__cell--empty" colspan=colspan.to_string()>{message}</td>
            </tr>
        }
        .into_any(),
        BodyPlan::Rows => data
            .get()
            .into_iter()
            .map(|row| {
                let cells = columns.with_value(|cols| {
                    cols.iter()
                        .map(|col| view! { <td class=col.cell_class()>{col.render_cell(&row)}</td> })
                        .collect_view()
                });
                let clickable = on_row_click.is_some();
                let key = row.row_key();
                view! {
                    <tr
                        class="table__row"
                        class:table__row--clickable=clickable
                        data-key=key
                        on:click=move |_| {
                            if let Some(cb) = on_row_click {
                                cb.run(row.clone());
                            }
                        }
                    >
                        {cells}
                    </tr>
                }
            })
            .collect_view()
            .into_any(),
    };

    let footer = pagination.map(|p| {
        let show = move || {
            plan.get().shows_pagination()
                && should_render(
                    total_pages(p.total_items.get(), p.page_size.get()),
                    p.total_items.get(),
                )
        };
        let options = p.page_size_options.clone();
        view! {
            <Show when=show>
                <div class="table__footer">
                    <PaginationControls
                        current_page=p.current_page
                        total_items=p.total_items
                        page_size=p.page_size
                        on_page_change=p.on_page_change
                        on_page_size_change=p.on_page_size_change
                        page_size_options=options.clone()
                    />
                </div>
            </Show>
        }
    });

    view! {
        <div class="table-container" class:table--embedded=embedded>
            {header.map(|h| view! { <div class="table__header-slot">{h.run()}</div> })}
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>{header_cells}</tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
            {footer}
        </div>
    }
}
