//! Guided product demo page

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use super::landing::Logo;
use crate::ui::walkthrough::Walkthrough;

#[component]
pub fn DemoPage() -> impl IntoView {
    view! {
        <Title text="Product tour - Campusly"/>
        <Meta name="description" content="A two-minute guided tour of Campusly: onboarding, plans, the dashboard and roles."/>

        <div class="min-h-screen bg-theme-primary flex flex-col">
            <header class="h-16 px-4 sm:px-6 flex items-center justify-between border-b border-theme">
                <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                    <Logo />
                    <span class="text-xl font-bold text-theme-primary">"Campusly"</span>
                </A>
                <A href="/#pricing" attr:class="text-sm font-medium text-theme-secondary hover:text-theme-primary">
                    "Pricing"
                </A>
            </header>

            <main class="flex-1 w-full max-w-5xl mx-auto px-4 py-10">
                <Walkthrough/>
            </main>
        </div>
    }
}
