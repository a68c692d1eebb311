use crate::masters::SelectOption;
use leptos::prelude::*;

/// Native select with label, placeholder option and tooltip
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value; empty selects the placeholder
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    #[prop(into)]
    options: Signal<Vec<SelectOption>>,
    /// First, empty-valued option
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// Tooltip, typically explaining why the select is disabled
    #[prop(optional, into)]
    title: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                    {required.then(|| view! { <span class="form__required">"*"</span> })}
                </label>
            })}
            <select
                id=select_id
                class=move || format!("form__select {}", additional_class())
                disabled=move || disabled.get()
                required=required
                title=move || title.get()
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <option value="" selected=move || value.get().is_empty()>
                    {move || placeholder.get().unwrap_or_default()}
                </option>
                <For
                    each=move || options.get()
                    key=|o| o.id.clone()
                    children=move |o| {
                        let val = o.id.clone();
                        let is_selected = move || value.get() == val;
                        let text = match &o.sublabel {
                            Some(sub) => format!("{} · {}", o.label, sub),
                            None => o.label.clone(),
                        };
                        view! {
                            <option value=o.id selected=is_selected>
                                {text}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
