//! Modal dialogs: a base frame and a confirmation dialog for destructive
//! admin actions.

use super::spinner::{Spinner, SpinnerSize};
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Dialog frame shared by admin confirmations and the diagnostics panel.
///
/// Stays mounted while closed so its fade can run; Escape and a click on the
/// backdrop itself both call `on_close`.
#[component]
pub fn BaseModal(
    #[prop(into)]
    title: Signal<String>,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    is_open: Signal<bool>,
    on_close: Callback<()>,
    children: Children,
    /// Width utility for the panel
    #[prop(default = "max-w-2xl")]
    max_width: &'static str,
    #[prop(default = true)]
    dismissible: bool,
) -> impl IntoView {
    let dismiss = move || {
        if dismissible && is_open.get_untracked() {
            on_close.run(());
        }
    };

    #[cfg(not(feature = "ssr"))]
    {
        let escape = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                dismiss();
            }
        });
        on_cleanup(move || escape.remove());
    }

    view! {
        <div
            class="modal-backdrop"
            class:modal-open=move || is_open.get()
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |e| {
                // Only clicks landing on the backdrop, not bubbling out of the panel
                if e.target() == e.current_target() {
                    dismiss();
                }
            }
        >
            <div
                class=format!("modal-panel card {max_width}")
                role="dialog"
                aria-modal="true"
                aria-label=move || title.get()
            >
                <header class="card-header">
                    <div>
                        <h3 class="title-lg">{move || title.get()}</h3>
                        {move || subtitle.get().map(|s| view! { <p class="subtitle">{s}</p> })}
                    </div>
                    <Show when=move || dismissible>
                        <button
                            class="btn-icon"
                            aria-label="Close dialog"
                            on:click=move |_| dismiss()
                        >
                            <Icon name=icons::X class="icon-standalone"/>
                        </button>
                    </Show>
                </header>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}

/// Confirmation dialog for actions that change admin data.
///
/// While `pending` is true both buttons are disabled and the confirm button
/// shows a spinner. The caller closes the dialog when its action settles.
#[component]
pub fn ConfirmDialog(
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: Signal<String>,
    is_open: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(default = "Confirm")]
    confirm_text: &'static str,
    #[prop(default = false.into(), into)]
    pending: Signal<bool>,
    /// Uses the danger button style
    #[prop(default = false)]
    is_destructive: bool,
) -> impl IntoView {
    let cancel = Callback::new(move |_| {
        if !pending.get_untracked() {
            on_cancel.run(());
        }
    });

    view! {
        <BaseModal
            title=title
            is_open=is_open
            on_close=cancel
            max_width="max-w-md"
        >
            <div class="space-y-4">
                <p class="text-theme-secondary">{move || message.get()}</p>

                <div class="flex items-center justify-end gap-2 divider-top pt-4">
                    <button
                        class="btn-secondary"
                        disabled=move || pending.get()
                        on:click=move |_| cancel.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        class=if is_destructive { "btn-danger" } else { "btn-primary" }
                        disabled=move || pending.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        <Show when=move || pending.get()>
                            <Spinner size=SpinnerSize::Small class="mr-2"/>
                        </Show>
                        {confirm_text}
                    </button>
                </div>
            </div>
        </BaseModal>
    }
}
