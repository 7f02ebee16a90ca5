//! Guided product walkthrough
//!
//! [`Walkthrough`] owns a [`WalkthroughHandle`], renders the chrome around
//! the current step and remounts the step view whenever the index changes.
//! Toggling autoplay does not remount the step.

mod chrome;
mod handle;
mod reveal;
mod steps;

use leptos::prelude::*;

use crate::core::walkthrough::{AutoplayTiming, Command, StepCatalog};
pub use chrome::progress_percent;
use chrome::{AutoplayCountdown, PlaybackButton, ProgressBar, ShortcutLegend, StepIndicators};
pub use handle::{WalkthroughHandle, use_walkthrough};
pub use steps::StepControls;

#[component]
pub fn Walkthrough(
    #[prop(default = StepCatalog::product_demo())]
    catalog: StepCatalog,
    #[prop(default = AutoplayTiming::default())]
    timing: AutoplayTiming,
) -> impl IntoView {
    let walkthrough = use_walkthrough(catalog, timing);
    let state = walkthrough.state();
    let current_index = Memo::new(move |_| state.get().current_index);

    let controls = StepControls {
        next: Callback::new(move |_| walkthrough.dispatch(Command::Next)),
        prev: Callback::new(move |_| walkthrough.dispatch(Command::Prev)),
        restart: Callback::new(move |_| walkthrough.dispatch(Command::Reset)),
        is_auto_playing: Signal::derive(move || state.get().is_auto_playing),
        current_step: current_index.into(),
        total_steps: walkthrough.total_steps(),
    };

    view! {
        <div class="walkthrough" aria-live="polite">
            <ProgressBar walkthrough=walkthrough/>
            <div class="walkthrough-toolbar">
                <StepIndicators walkthrough=walkthrough/>
                <PlaybackButton walkthrough=walkthrough/>
            </div>
            <AutoplayCountdown walkthrough=walkthrough/>

            <div class="walkthrough-stage">
                {move || {
                    let step = walkthrough.step(current_index.get());
                    steps::render_step(step.kind, controls)
                }}
            </div>

            <ShortcutLegend/>
        </div>
    }
}
