//! Views for the individual walkthrough steps
//!
//! A step only sees [`StepControls`]; it never touches the controller.

use leptos::prelude::*;
use leptos_router::components::A;

use super::reveal::{Reveal, use_reveal};
use crate::core::admin::format_cents;
use crate::core::admin::seed::seed_plans;
use crate::core::walkthrough::{RevealSchedule, RevealStage, StepKind};
use crate::ui::icon::{Icon, icons};

/// The only interface a step has to the sequencer
#[derive(Clone, Copy)]
pub struct StepControls {
    pub next: Callback<()>,
    pub prev: Callback<()>,
    /// Back to the first step with autoplay off
    pub restart: Callback<()>,
    pub is_auto_playing: Signal<bool>,
    pub current_step: Signal<usize>,
    pub total_steps: usize,
}

impl StepControls {
    fn is_first(&self) -> bool {
        self.current_step.get() == 0
    }

    fn is_last(&self) -> bool {
        self.current_step.get() + 1 >= self.total_steps
    }
}

/// Mount the view for `kind`
pub fn render_step(kind: StepKind, controls: StepControls) -> AnyView {
    match kind {
        StepKind::Hero => view! { <HeroStep controls=controls/> }.into_any(),
        StepKind::Onboarding => view! { <OnboardingStep controls=controls/> }.into_any(),
        StepKind::Plans => view! { <PlansStep controls=controls/> }.into_any(),
        StepKind::Dashboard => view! { <DashboardStep controls=controls/> }.into_any(),
        StepKind::Roles => view! { <RolesStep controls=controls/> }.into_any(),
        StepKind::Final => view! { <FinalStep controls=controls/> }.into_any(),
    }
}

/// Back/next row shared by the inner steps
#[component]
fn StepNav(controls: StepControls) -> impl IntoView {
    view! {
        <div class="walkthrough-step-nav">
            <button
                class="btn-secondary"
                disabled=move || controls.is_first()
                on:click=move |_| controls.prev.run(())
            >
                <Icon name=icons::CHEVRON_LEFT class="icon-text"/>
                "Back"
            </button>
            <span class="text-sm text-theme-muted">
                {move || format!("Step {} of {}", controls.current_step.get() + 1, controls.total_steps)}
                <Show when=move || controls.is_auto_playing.get()>
                    <span class="walkthrough-autoplay-tag">" · autoplay"</span>
                </Show>
            </span>
            <button
                class="btn-primary"
                disabled=move || controls.is_last()
                on:click=move |_| controls.next.run(())
            >
                "Next"
                <Icon name=icons::CHEVRON_RIGHT class="icon-text"/>
            </button>
        </div>
    }
}

#[component]
fn StepHeading(reveal: Reveal, title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <h2 class=reveal.class(RevealStage::Title)>
            <span class="walkthrough-title">{title}</span>
        </h2>
        <p class=reveal.class(RevealStage::Subtitle)>
            <span class="walkthrough-subtitle">{subtitle}</span>
        </p>
    }
}

#[component]
fn HeroStep(controls: StepControls) -> impl IntoView {
    let reveal = use_reveal(RevealSchedule::for_kind(StepKind::Hero));

    view! {
        <section class="walkthrough-step walkthrough-hero">
            <StepHeading
                reveal=reveal
                title="Run your whole school from one place"
                subtitle="Campusly brings admissions, classes, grades and billing together for every campus you manage."
            />
            <div class=reveal.class(RevealStage::CallToAction)>
                <button class="landing-btn-primary" on:click=move |_| controls.next.run(())>
                    "Start the tour"
                    <Icon name=icons::CHEVRON_RIGHT class="icon-text"/>
                </button>
            </div>
        </section>
    }
}

const ONBOARDING: [(&str, &str); 3] = [
    ("Create your school", "Pick a name and your subdomain. You are live on yourschool.campusly.app in a minute."),
    ("Invite your staff", "Send invitations to teachers and office staff. Roles are assigned on first sign-in."),
    ("Import students", "Upload a spreadsheet or sync from your existing system. Classes are built automatically."),
];

#[component]
fn OnboardingStep(controls: StepControls) -> impl IntoView {
    let reveal = use_reveal(RevealSchedule::for_kind(StepKind::Onboarding));

    view! {
        <section class="walkthrough-step">
            <StepHeading
                reveal=reveal
                title="Onboarding in three moves"
                subtitle="No consultants, no migration project."
            />
            <ol class=move || format!("walkthrough-timeline {}", reveal.class(RevealStage::Body)())>
                {ONBOARDING
                    .iter()
                    .enumerate()
                    .map(|(i, (title, text))| view! {
                        <li class="walkthrough-timeline-item">
                            <span class="walkthrough-timeline-index">{i + 1}</span>
                            <div>
                                <h3 class="font-semibold text-theme-primary">{*title}</h3>
                                <p class="text-theme-secondary">{*text}</p>
                            </div>
                        </li>
                    })
                    .collect_view()}
            </ol>
            <StepNav controls=controls/>
        </section>
    }
}

#[component]
fn PlansStep(controls: StepControls) -> impl IntoView {
    let reveal = use_reveal(RevealSchedule::for_kind(StepKind::Plans));
    let plans = seed_plans()
        .into_iter()
        .filter(|plan| plan.is_active)
        .collect::<Vec<_>>();

    view! {
        <section class="walkthrough-step">
            <StepHeading
                reveal=reveal
                title="Plans that grow with you"
                subtitle="Start small, move up when enrolment does. Switching is prorated."
            />
            <div class=move || format!("walkthrough-plan-grid {}", reveal.class(RevealStage::Body)())>
                {plans
                    .into_iter()
                    .map(|plan| view! {
                        <div class="card p-6">
                            <h3 class="title-lg">{plan.name.clone()}</h3>
                            <p class="text-3xl font-bold text-theme-primary">
                                "$"{format_cents(plan.monthly_price_cents)}
                                <span class="text-sm font-normal text-theme-muted">"/month"</span>
                            </p>
                            <p class="text-sm text-theme-secondary">{plan.students_label()}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
            <StepNav controls=controls/>
        </section>
    }
}

const DASHBOARD_STATS: [(&str, &str, &str); 4] = [
    ("Attendance today", "96.4%", "+1.2% this week"),
    ("Open admissions", "38", "12 awaiting documents"),
    ("Fees collected", "$48,210", "91% of term target"),
    ("Teacher workload", "Balanced", "2 classes uncovered"),
];

#[component]
fn DashboardStep(controls: StepControls) -> impl IntoView {
    let reveal = use_reveal(RevealSchedule::for_kind(StepKind::Dashboard));

    view! {
        <section class="walkthrough-step">
            <StepHeading
                reveal=reveal
                title="Everything at a glance"
                subtitle="The dashboard answers the morning questions before the first bell."
            />
            <div class=move || format!("walkthrough-stat-grid {}", reveal.class(RevealStage::Body)())>
                {DASHBOARD_STATS
                    .iter()
                    .map(|(label, value, note)| view! {
                        <div class="card p-4">
                            <p class="text-sm text-theme-muted">{*label}</p>
                            <p class="text-2xl font-bold text-theme-primary">{*value}</p>
                            <p class="text-xs text-theme-secondary">{*note}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
            <StepNav controls=controls/>
        </section>
    }
}

const ROLES: [(&str, &str); 4] = [
    ("Administrators", "Manage campuses, billing and staff permissions."),
    ("Teachers", "Take attendance, publish grades and message families."),
    ("Parents", "Follow progress, pay fees and book meetings."),
    ("Students", "See timetables, homework and results."),
];

#[component]
fn RolesStep(controls: StepControls) -> impl IntoView {
    let reveal = use_reveal(RevealSchedule::for_kind(StepKind::Roles));

    view! {
        <section class="walkthrough-step">
            <StepHeading
                reveal=reveal
                title="A view for every role"
                subtitle="Each person sees what they need and nothing they should not."
            />
            <ul class=move || format!("walkthrough-role-list {}", reveal.class(RevealStage::Body)())>
                {ROLES
                    .iter()
                    .map(|(role, text)| view! {
                        <li class="card p-4">
                            <h3 class="font-semibold text-theme-primary">{*role}</h3>
                            <p class="text-sm text-theme-secondary">{*text}</p>
                        </li>
                    })
                    .collect_view()}
            </ul>
            <StepNav controls=controls/>
        </section>
    }
}

#[component]
fn FinalStep(controls: StepControls) -> impl IntoView {
    let reveal = use_reveal(RevealSchedule::for_kind(StepKind::Final));

    view! {
        <section class="walkthrough-step walkthrough-final">
            <StepHeading
                reveal=reveal
                title="Ready when you are"
                subtitle="Try Campusly free for 14 days. No card required."
            />
            <p class=reveal.class(RevealStage::Body)>
                <span class="text-theme-secondary">
                    "Bring one campus or twenty. We help you import your data and train your staff."
                </span>
            </p>
            <div class=move || format!("walkthrough-final-actions {}", reveal.class(RevealStage::CallToAction)())>
                <A href="/#pricing" attr:class="landing-btn-primary">"Start free trial"</A>
                <button class="landing-btn-secondary" on:click=move |_| controls.prev.run(())>
                    "Back"
                </button>
                <button class="btn-ghost" on:click=move |_| controls.restart.run(())>
                    "Restart tour"
                </button>
            </div>
        </section>
    }
}
