pub mod view_model;

use contracts::masters::{MasterKey, MasterRecord};
use leptos::prelude::*;
use std::rc::Rc;
use thaw::{Button, ButtonAppearance, Spinner, SpinnerSize};

use crate::masters::forms::fields_for;
use crate::masters::use_master_data;
use crate::shared::components::select_with_add::FieldKind;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use view_model::MasterCreateViewModel;

/// Slide-in panel with the creation form of one master kind
#[component]
pub fn MasterCreateDrawer(
    master: MasterKey,
    open: RwSignal<bool>,
    #[prop(into)] on_saved: Callback<MasterRecord>,
) -> impl IntoView {
    let vm = MasterCreateViewModel::new(master);
    let service = use_master_data();
    let notifications = use_notifications();

    let close = move || {
        vm.reset();
        open.set(false);
    };

    let save = move || {
        let saved: Rc<dyn Fn(MasterRecord)> = Rc::new(move |record| {
            vm.reset();
            open.set(false);
            on_saved.run(record);
        });
        vm.save_command(service, notifications, saved);
    };

    let fields = fields_for(master);

    view! {
        <Show when=move || open.get()>
            <div class="drawer-backdrop" on:click=move |_| close()></div>
        </Show>
        <aside class="drawer" class:drawer--open=move || open.get() aria-hidden=move || (!open.get()).to_string()>
            <div class="details-header drawer__header">
                <h3>{format!("New {}", master.singular_noun())}</h3>
                <button class="drawer__close" title="Close" on:click=move |_| close()>
                    {icon("x")}
                </button>
            </div>

            {move || vm.error.get().map(|e| view! {
                <div class="error" role="alert">{icon("alert")}<span>{e}</span></div>
            })}

            <div class="details-form">
                {fields.into_iter().map(|field| {
                    let name = field.name;
                    let input_id = format!("master-{}-{}", master.code(), name);
                    let on_input = move |ev: leptos::ev::Event| vm.set_value(name, event_target_value(&ev));
                    let control = match field.kind {
                        FieldKind::TextArea => view! {
                            <textarea
                                id=input_id.clone()
                                rows="3"
                                placeholder=field.placeholder
                                prop:value=move || vm.value(name)
                                disabled=move || vm.submitting.get()
                                on:input=on_input
                            />
                        }.into_any(),
                        FieldKind::Text | FieldKind::Number => view! {
                            <input
                                id=input_id.clone()
                                type=field.kind.input_type()
                                placeholder=field.placeholder
                                prop:value=move || vm.value(name)
                                disabled=move || vm.submitting.get()
                                on:input=on_input
                            />
                        }.into_any(),
                    };
                    view! {
                        <div class="form-group">
                            <label for=input_id>
                                {field.label}
                                {field.required.then(|| view! { <span class="form__required">"*"</span> })}
                            </label>
                            {control}
                        </div>
                    }
                }).collect_view()}
            </div>

            <div class="details-actions">
                <Show
                    when=move || vm.submitting.get()
                    fallback=move || view! {
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| save()>
                            {icon("save")}
                            " Save"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| close()>
                            {icon("cancel")}
                            " Cancel"
                        </Button>
                    }
                >
                    <Spinner size=SpinnerSize::Small label="Saving…" />
                </Show>
            </div>
        </aside>
    }
}
