//! List helpers: client-side search and the debounced search box
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Shorter queries do not filter
pub const MIN_SEARCH_LEN: usize = 2;

/// Rows that can be matched against a search query
pub trait Searchable {
    /// `query` is already trimmed and lowercased
    fn matches_filter(&self, query: &str) -> bool;
}

/// Normalized query, or `None` when it is too short to filter by
pub fn normalize_query(filter: &str) -> Option<String> {
    let trimmed = filter.trim();
    if trimmed.chars().count() < MIN_SEARCH_LEN {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Case-insensitive substring check over several fields
pub fn any_field_contains(fields: &[&str], query: &str) -> bool {
    fields.iter().any(|f| f.to_lowercase().contains(query))
}

pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    match normalize_query(filter) {
        None => items,
        Some(query) => items
            .into_iter()
            .filter(|item| item.matches_filter(&query))
            .collect(),
    }
}

/// Search box that reports its value after `debounce_ms` of inactivity
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(default = 300)] debounce_ms: u32,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search…".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // Dropping the previous timeout cancels it
        pending.set_value(Some(Timeout::new(debounce_ms, move || {
            on_change.run(new_value);
        })));
    };

    let clear = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    let is_filter_active = move || normalize_query(&value.get()).is_some();

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" title="Clear" on:click=clear>
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: &'static str,
        code: &'static str,
    }

    impl Searchable for Row {
        fn matches_filter(&self, query: &str) -> bool {
            any_field_contains(&[self.name, self.code], query)
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Tablet", code: "TAB" },
            Row { name: "Syrup", code: "SYR" },
            Row { name: "Capsule", code: "CAP" },
        ]
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let found = filter_list(rows(), "  syr ");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Syrup");
    }

    #[test]
    fn test_short_query_does_not_filter() {
        assert_eq!(filter_list(rows(), "t").len(), 3);
        assert_eq!(filter_list(rows(), "").len(), 3);
    }
}
