//! Inline keyboard shortcut legend

use leptos::prelude::*;

/// One key and what pressing it does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyboardHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyboardHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

#[component]
pub fn KeyboardHints(
    #[prop(into)]
    hints: Vec<KeyboardHint>,
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <dl class=format!("kbd-hint {class}") aria-label="Keyboard shortcuts">
            {hints
                .into_iter()
                .map(|KeyboardHint { key, action }| view! {
                    <div class="kbd-hint-item">
                        <dt><kbd class="kbd">{key}</kbd></dt>
                        <dd>{action}</dd>
                    </div>
                })
                .collect_view()}
        </dl>
    }
}
