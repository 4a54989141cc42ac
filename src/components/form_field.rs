//! Labelled input bound to one field of a [`FormState`].

use leptos::prelude::*;

use crate::state::form::FormState;
use crate::validation::{Field, Schema};

/// Text input wired to `form`: keystrokes update the value, blur marks the
/// field touched, and the field's error shows once it is touched.
#[component]
pub fn FormField<R>(
    form: RwSignal<FormState<R>>,
    field: R::Field,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView
where
    R: Schema + Send + Sync + 'static,
{
    let name = field.name();
    let invalid = move || form.with(|f| f.visible_error(field).is_some());

    view! {
        <div class="mb-3">
            <label for=name class="form-label">{label}</label>
            <input
                id=name
                name=name
                type=input_type
                placeholder=placeholder
                class=move || if invalid() { "form-control is-invalid" } else { "form-control" }
                prop:value=move || form.with(|f| f.value(field).to_owned())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
                on:blur=move |_| form.update(|f| f.blur(field))
            />
            {move || {
                form.with(|f| f.visible_error(field))
                    .map(|message| view! { <div class="invalid-feedback">{message}</div> })
            }}
        </div>
    }
}

/// Banner for request-level failures.
#[component]
pub fn SubmitError<R>(form: RwSignal<FormState<R>>) -> impl IntoView
where
    R: Schema + Send + Sync + 'static,
{
    move || {
        form.with(|f| f.submit_error().map(str::to_owned))
            .map(|message| view! { <div class="alert alert-danger" role="alert">{message}</div> })
    }
}
