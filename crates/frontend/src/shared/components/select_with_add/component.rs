use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize, Spinner, SpinnerSize};
use wasm_bindgen::JsCast;

use super::state::{
    merge_options, AddField, AddSelectEvent, AddSelectState, Command, FieldKind, FormValues,
};
use crate::masters::SelectOption;
use crate::shared::icons::icon;

type CreateFuture = Pin<Box<dyn Future<Output = Result<SelectOption, String>>>>;
type CreateFn = Rc<dyn Fn(FormValues) -> CreateFuture>;

/// Feed the create outcome into the state machine.
///
/// Returns `None` when the select was unmounted while the create was in
/// flight; the outcome is then dropped.
fn finish_create(
    state: RwSignal<AddSelectState>,
    fields: StoredValue<Vec<AddField>>,
    outcome: AddSelectEvent,
) -> Option<Command> {
    let Some(current) = state.try_get_untracked() else {
        log::debug!("Inline create finished after the select was disposed");
        return None;
    };
    let (next, command) = fields.try_with_value(|f| current.transition(outcome, f))?;
    if state.try_set(next).is_some() {
        return None;
    }
    Some(command)
}

/// Select whose dropdown ends with an "Add new" entry.
///
/// The entry opens an inline form built from `fields`. On submit the form is
/// validated, `on_create` is awaited and the created option is selected.
/// A failed create keeps the form open with the error and the entered values.
#[component]
pub fn SelectWithAdd<F, Fut>(
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    fields: Vec<AddField>,
    on_create: F,
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// Text of the "Add new" entry
    #[prop(optional, into)]
    add_label: MaybeProp<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
) -> impl IntoView
where
    F: Fn(FormValues) -> Fut + 'static,
    Fut: Future<Output = Result<SelectOption, String>> + 'static,
{
    let state = RwSignal::new(AddSelectState::Closed);
    let created = RwSignal::new(Vec::<SelectOption>::new());
    let fields = StoredValue::new(fields);
    let root_ref = NodeRef::<Div>::new();
    let create_fn: CreateFn = Rc::new(move |values| Box::pin(on_create(values)) as CreateFuture);
    let create_fn = StoredValue::new_local(create_fn);
    let form_id = format!("swa-{}", uuid::Uuid::new_v4().simple());

    let all_options = Memo::new(move |_| {
        let options = options.get();
        created.with(|c| merge_options(&options, c))
    });

    let selected_label = move || {
        let current = value.get();
        all_options
            .with(|opts| opts.iter().find(|o| o.id == current).map(|o| o.label.clone()))
            .unwrap_or_else(|| placeholder.get().unwrap_or_else(|| "Select…".to_string()))
    };

    let send = move |event: AddSelectEvent| {
        let current = state.get_untracked();
        let (next, command) = fields.with_value(|f| current.transition(event, f));
        state.set(next);

        match command {
            Command::None => {}
            Command::Emit(id) => on_change.run(id),
            Command::Create(values) => {
                let fut = create_fn.with_value(|f| f(values));
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = match fut.await {
                        Ok(option) => {
                            created.try_update(|c| {
                                if !c.iter().any(|o| o.id == option.id) {
                                    c.push(option.clone());
                                }
                            });
                            AddSelectEvent::SubmitSucceeded(option)
                        }
                        Err(message) => {
                            log::warn!("Inline create failed: {}", message);
                            AddSelectEvent::SubmitFailed(message)
                        }
                    };
                    if let Some(Command::Emit(id)) = finish_create(state, fields, outcome) {
                        on_change.run(id);
                    }
                });
            }
        }
    };

    let listener = window_event_listener(ev::mousedown, move |e: ev::MouseEvent| {
        if !state.with_untracked(AddSelectState::is_open) {
            return;
        }
        let Some(root) = root_ref.get_untracked() else {
            return;
        };
        let inside = e
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            .map(|node| root.contains(Some(&node)))
            .unwrap_or(false);
        if !inside {
            send(AddSelectEvent::OutsideClick);
        }
    });
    on_cleanup(move || listener.remove());

    let field_value = move |name: &'static str| {
        state.with(|s| {
            s.values()
                .and_then(|v| v.get(name).cloned())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="select-with-add" node_ref=root_ref>
            {move || label.get().map(|l| view! {
                <label class="form__label">
                    {l}
                    {required.then(|| view! { <span class="form__required">"*"</span> })}
                </label>
            })}

            <Show when=move || !state.with(AddSelectState::is_form_visible)>
                <button
                    type="button"
                    class="select-with-add__trigger form__select"
                    class:select-with-add__trigger--placeholder=move || value.get().is_empty()
                    disabled=move || disabled.get()
                    on:click=move |_| send(AddSelectEvent::Toggle)
                >
                    {selected_label}
                </button>
            </Show>

            <Show when=move || state.with(AddSelectState::is_open)>
                <ul class="select-with-add__dropdown" role="listbox">
                    <For
                        each=move || all_options.get()
                        key=|o| o.id.clone()
                        children=move |o| {
                            let id = o.id.clone();
                            let is_selected = {
                                let id = o.id.clone();
                                move || value.get() == id
                            };
                            view! {
                                <li
                                    class="select-with-add__option"
                                    class:select-with-add__option--selected=is_selected
                                    role="option"
                                    on:click=move |_| send(AddSelectEvent::Select(id.clone()))
                                >
                                    <span>{o.label}</span>
                                    {o.sublabel.map(|s| view! {
                                        <span class="select-with-add__sublabel">{s}</span>
                                    })}
                                </li>
                            }
                        }
                    />
                    <li
                        class="select-with-add__option select-with-add__option--add"
                        on:click=move |_| send(AddSelectEvent::ChooseAddNew)
                    >
                        {icon("plus")}
                        <span>{move || add_label.get().unwrap_or_else(|| "Add new".to_string())}</span>
                    </li>
                </ul>
            </Show>

            <Show when=move || state.with(AddSelectState::is_form_visible)>
                <div class="select-with-add__form">
                    {fields.get_value().into_iter().map(|field| {
                        let input_id = format!("{}-{}", form_id, field.name);
                        let name = field.name;
                        let on_input = move |ev: ev::Event| {
                            send(AddSelectEvent::FieldChanged {
                                name: name.to_string(),
                                value: event_target_value(&ev),
                            })
                        };
                        let readonly = move || state.with(AddSelectState::is_submitting);
                        let input = if field.kind == FieldKind::TextArea {
                            view! {
                                <textarea
                                    id=input_id.clone()
                                    class="form__textarea"
                                    placeholder=field.placeholder
                                    prop:value=move || field_value(name)
                                    disabled=readonly
                                    on:input=on_input
                                />
                            }.into_any()
                        } else {
                            view! {
                                <input
                                    id=input_id.clone()
                                    class="form__input"
                                    type=field.kind.input_type()
                                    placeholder=field.placeholder
                                    prop:value=move || field_value(name)
                                    disabled=readonly
                                    on:input=on_input
                                />
                            }.into_any()
                        };
                        view! {
                            <div class="form__group">
                                <label class="form__label" for=input_id>
                                    {field.label}
                                    {field.required.then(|| view! { <span class="form__required">"*"</span> })}
                                </label>
                                {input}
                            </div>
                        }
                    }).collect_view()}

                    {move || state.with(|s| s.error().map(str::to_string)).map(|e| view! {
                        <div class="select-with-add__error" role="alert">
                            {icon("alert")}
                            <span>{e}</span>
                        </div>
                    })}

                    <div class="select-with-add__actions">
                        <Show
                            when=move || state.with(AddSelectState::is_submitting)
                            fallback=move || view! {
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| send(AddSelectEvent::Submit)
                                >
                                    {icon("save")}
                                    " Save"
                                </Button>
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| send(AddSelectEvent::Cancel)
                                >
                                    {icon("cancel")}
                                    " Cancel"
                                </Button>
                            }
                        >
                            <Spinner size=SpinnerSize::Tiny label="Saving…" />
                        </Show>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn submitting() -> AddSelectState {
        let mut values = FormValues::new();
        values.insert("name".to_string(), "Syrups".to_string());
        AddSelectState::Submitting { values }
    }

    #[test]
    fn test_finish_create_emits_new_option() {
        let owner = Owner::new();
        owner.set();
        let state = RwSignal::new(submitting());
        let fields = StoredValue::new(vec![AddField::text("name", "Name").required()]);

        let command = finish_create(
            state,
            fields,
            AddSelectEvent::SubmitSucceeded(SelectOption::new("c9", "Syrups")),
        );
        assert_eq!(command, Some(Command::Emit("c9".to_string())));
        assert_eq!(state.get_untracked(), AddSelectState::Closed);
    }

    #[test]
    fn test_finish_create_after_unmount_is_dropped() {
        let owner = Owner::new();
        owner.set();
        let state = RwSignal::new(submitting());
        let fields = StoredValue::new(vec![AddField::text("name", "Name").required()]);
        owner.cleanup();

        let command = finish_create(
            state,
            fields,
            AddSelectEvent::SubmitSucceeded(SelectOption::new("c9", "Syrups")),
        );
        assert_eq!(command, None);
    }
}
