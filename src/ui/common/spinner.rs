use leptos::prelude::*;

/// Spinner size options
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "spinner-sm",
            SpinnerSize::Medium => "spinner-md",
            SpinnerSize::Large => "spinner-lg",
        }
    }
}

/// Ring spinner with an accessible label
#[component]
pub fn Spinner(
    #[prop(default = SpinnerSize::Medium)]
    size: SpinnerSize,
    #[prop(default = "Loading")]
    label: &'static str,
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <span
            class=format!("spinner-ring {} {}", size.class(), class)
            role="status"
            aria-label=label
        ></span>
    }
}

/// Button that swaps its label for a spinner while an action is in flight
#[component]
pub fn PendingButton(
    /// Button text when idle
    text: &'static str,
    /// Button text while pending
    #[prop(default = "Working...")]
    pending_text: &'static str,
    #[prop(into)]
    pending: Signal<bool>,
    on_click: Callback<()>,
    #[prop(default = "btn-primary")]
    class: &'static str,
    #[prop(default = false.into(), into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            class=class
            disabled=move || pending.get() || disabled.get()
            aria-busy=move || pending.get().to_string()
            on:click=move |_| on_click.run(())
        >
            <Show when=move || pending.get() fallback=move || text>
                <Spinner size=SpinnerSize::Small class="mr-2"/>
                {pending_text}
            </Show>
        </button>
    }
}
