use leptos::prelude::*;

use crate::core::walkthrough::{RevealSchedule, RevealStage};

/// Entrance state of one mounted step
#[derive(Clone, Copy)]
pub struct Reveal {
    schedule: StoredValue<RevealSchedule>,
    revealed: ReadSignal<usize>,
}

impl Reveal {
    /// Whether `stage` has been revealed yet
    pub fn shown(&self, stage: RevealStage) -> bool {
        let revealed = self.revealed.get();
        self.schedule
            .with_value(|s| s.is_visible(stage, revealed))
    }

    /// Class toggling the fade-in transition of `stage`
    pub fn class(self, stage: RevealStage) -> impl Fn() -> &'static str + Send + Sync + 'static {
        move || {
            if self.shown(stage) {
                "reveal reveal-shown"
            } else {
                "reveal"
            }
        }
    }
}

/// Run `schedule` from the moment the calling component mounts.
/// Each wake-up recomputes the visible count from the time since mount, so
/// a throttled background tab catches up in one step. Unmounting cancels the
/// timeout still pending.
pub fn use_reveal(schedule: RevealSchedule) -> Reveal {
    let (revealed, set_revealed) = signal(0usize);
    let schedule = StoredValue::new(schedule);

    #[cfg(not(feature = "ssr"))]
    {
        let pending = StoredValue::new(None::<TimeoutHandle>);
        let mounted_at = super::handle::clock_ms();
        arm(schedule, mounted_at, set_revealed, pending);
        on_cleanup(move || {
            if let Some(handle) = pending.try_update_value(Option::take).flatten() {
                handle.clear();
            }
        });
    }
    #[cfg(feature = "ssr")]
    let _ = set_revealed;

    Reveal { schedule, revealed }
}

#[cfg(not(feature = "ssr"))]
fn arm(
    schedule: StoredValue<RevealSchedule>,
    mounted_at: f64,
    set_revealed: WriteSignal<usize>,
    pending: StoredValue<Option<TimeoutHandle>>,
) {
    let elapsed = super::handle::elapsed_since(mounted_at);
    let Some(delay) = schedule.try_with_value(|s| s.next_reveal_in(elapsed)).flatten() else {
        pending.try_update_value(|p| *p = None);
        return;
    };

    match set_timeout_with_handle(
        move || {
            let elapsed = super::handle::elapsed_since(mounted_at);
            let Some(count) = schedule.try_with_value(|s| s.revealed_after(elapsed)) else {
                return;
            };
            if set_revealed.try_set(count).is_none() {
                arm(schedule, mounted_at, set_revealed, pending);
            }
        },
        delay,
    ) {
        Ok(handle) => {
            pending.try_update_value(|p| *p = Some(handle));
        }
        Err(err) => {
            leptos::logging::warn!("failed to schedule reveal: {:?}", err);
            set_revealed.set(usize::MAX);
        }
    }
}
