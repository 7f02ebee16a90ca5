//! Walkthrough chrome: progress, step dots, playback button, shortcut legend.

use leptos::prelude::*;

use super::WalkthroughHandle;
use crate::core::walkthrough::{Command, KEY_BINDINGS};
use crate::ui::common::{KeyboardHint, KeyboardHints};
use crate::ui::icon::{Icon, icons};

/// Percentage of the tour completed at `index`
pub fn progress_percent(index: usize, total: usize) -> f64 {
    if total <= 1 {
        return 100.0;
    }
    (index.min(total - 1) as f64 / (total - 1) as f64) * 100.0
}

#[component]
pub fn ProgressBar(walkthrough: WalkthroughHandle) -> impl IntoView {
    let total = walkthrough.total_steps();
    let state = walkthrough.state();

    view! {
        <div
            class="walkthrough-progress"
            role="progressbar"
            aria-valuemin="1"
            aria-valuemax=total.to_string()
            aria-valuenow=move || (state.get().current_index + 1).to_string()
        >
            <div
                class="walkthrough-progress-fill"
                style:width=move || format!("{:.1}%", progress_percent(state.get().current_index, total))
            ></div>
        </div>
    }
}

/// Clickable dot per step
#[component]
pub fn StepIndicators(walkthrough: WalkthroughHandle) -> impl IntoView {
    let state = walkthrough.state();

    view! {
        <ol class="walkthrough-dots" aria-label="Tour steps">
            {walkthrough
                .steps()
                .into_iter()
                .enumerate()
                .map(|(index, step)| {
                    let label = format!("Go to step {}: {}", index + 1, step.title);
                    view! {
                        <li>
                            <button
                                class="walkthrough-dot"
                                class:walkthrough-dot-active=move || state.get().current_index == index
                                class:walkthrough-dot-done={move || state.get().current_index > index}
                                aria-label=label.clone()
                                title=step.title.clone()
                                aria-current=move || (state.get().current_index == index).then_some("step")
                                on:click=move |_| walkthrough.dispatch(Command::GoTo(index))
                            ></button>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

#[component]
pub fn PlaybackButton(walkthrough: WalkthroughHandle) -> impl IntoView {
    let state = walkthrough.state();
    let last = walkthrough.total_steps().saturating_sub(1);
    let playing = move || state.get().is_auto_playing;

    view! {
        <button
            class="btn-secondary walkthrough-playback"
            disabled={move || state.get().current_index >= last}
            aria-pressed=move || playing().to_string()
            on:click=move |_| walkthrough.dispatch(Command::ToggleAutoplay)
        >
            <Show
                when=playing
                fallback=|| view! { <Icon name=icons::PLAY class="icon-text"/> "Autoplay" }
            >
                <Icon name=icons::PAUSE class="icon-text"/>
                "Pause"
            </Show>
        </button>
    }
}

/// Bar that drains while an autoplay advance is pending
#[component]
pub fn AutoplayCountdown(walkthrough: WalkthroughHandle) -> impl IntoView {
    let pending = walkthrough.pending();

    move || {
        pending.get().map(|advance| {
            view! {
                <div class="walkthrough-countdown" aria-hidden="true">
                    <div
                        class="walkthrough-countdown-fill"
                        style:animation-duration=format!("{}ms", advance.delay.as_millis())
                    ></div>
                </div>
            }
        })
    }
}

#[component]
pub fn ShortcutLegend() -> impl IntoView {
    let hints = KEY_BINDINGS
        .iter()
        .map(|binding| KeyboardHint::new(binding.label, binding.action))
        .collect::<Vec<_>>();

    view! { <KeyboardHints hints=hints class="walkthrough-legend"/> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_endpoints() {
        assert_eq!(progress_percent(0, 6), 0.0);
        assert_eq!(progress_percent(5, 6), 100.0);
        assert_eq!(progress_percent(9, 6), 100.0);
    }

    #[test]
    fn test_progress_single_step_is_complete() {
        assert_eq!(progress_percent(0, 1), 100.0);
    }
}
