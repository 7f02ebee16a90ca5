//! Labelled form controls used by the admin forms.

use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[component]
fn FieldLabel(label: String, required: bool, #[prop(into)] for_id: String) -> impl IntoView {
    view! {
        <label class="label" for=for_id>
            {label}
            {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
        </label>
    }
}

#[component]
fn FieldError(error: MaybeProp<String>) -> impl IntoView {
    move || {
        error.get().map(|err| {
            view! {
                <div class="flex items-center text-sm text-theme-error" role="alert">
                    <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                    <span>{err}</span>
                </div>
            }
        })
    }
}

/// Text input with label, hint and inline error
#[component]
pub fn FormField(
    /// Field label text
    #[prop(into)]
    label: String,
    /// Element id, also used by the label
    id: &'static str,
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, number, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = String::new(), into)]
    placeholder: String,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = false.into(), into)]
    disabled: Signal<bool>,
    /// Help text under the input
    #[prop(optional)]
    hint: Option<&'static str>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <FieldLabel label=label required=required for_id=id/>
            <input
                id=id
                type=input_type
                class="input-base"
                class:border-red-500=move || error.get().is_some()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            {hint.map(|h| view! { <p class="text-xs text-theme-muted">{h}</p> })}
            <FieldError error=error/>
        </div>
    }
}

/// Select control over (value, display text) pairs
#[component]
pub fn SelectField(
    #[prop(into)]
    label: String,
    id: &'static str,
    value: Signal<String>,
    on_change: Callback<String>,
    options: Vec<(String, String)>,
    #[prop(default = false.into(), into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <FieldLabel label=label required=false for_id=id/>
            <select
                id=id
                class="select-base"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                disabled=move || disabled.get()
            >
                {options
                    .into_iter()
                    .map(|(val, text)| view! { <option value=val>{text}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Checkbox with a description line
#[component]
pub fn CheckboxField(
    #[prop(into)]
    label: String,
    id: &'static str,
    checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(default = false.into(), into)]
    disabled: Signal<bool>,
    #[prop(optional, into)]
    description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="flex items-start gap-3">
            <input
                id=id
                type="checkbox"
                class="mt-1 w-4 h-4 rounded border-theme-primary text-theme-accent focus:ring-2 focus:ring-theme-accent"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
                disabled=move || disabled.get()
            />
            <div class="flex-1">
                <label class="label cursor-pointer" for=id>{label}</label>
                {description.map(|desc| view! {
                    <p class="text-sm text-theme-muted mt-0.5">{desc}</p>
                })}
            </div>
        </div>
    }
}
