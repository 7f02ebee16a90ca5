use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::{A, Outlet};

use super::provide_admin_context;
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::NotificationsContainer;
use crate::ui::pages::landing::Logo;
use crate::ui::theme::{ThemeMode, use_theme_context};

const NAV: [(&str, &str, &str); 6] = [
    ("/admin", "Overview", icons::HOME),
    ("/admin/plans", "Plans", icons::LAYERS),
    ("/admin/domains", "Domains", icons::GLOBE),
    ("/admin/payments", "Payments", icons::CREDIT_CARD),
    ("/admin/activity", "Activity", icons::ACTIVITY),
    ("/admin/settings", "Settings", icons::SETTINGS),
];

/// Sidebar shell around every console page
#[component]
pub fn AdminLayout() -> impl IntoView {
    let ctx = provide_admin_context();
    let theme = use_theme_context();
    let maintenance = move || ctx.store.with(|s| s.settings.maintenance_mode);

    view! {
        <Title text="Console - Campusly"/>
        <div class="admin-shell">
            <aside class="admin-sidebar">
                <A href="/" attr:class="flex items-center gap-3 px-4 py-5">
                    <Logo />
                    <span class="text-lg font-bold text-theme-primary">
                        {move || ctx.store.with(|s| s.settings.platform_name.clone())}
                    </span>
                </A>
                <nav class="flex flex-col gap-1 px-2" aria-label="Console">
                    {NAV
                        .iter()
                        .map(|(href, label, icon)| view! {
                            // Overview must not stay active on nested pages
                            <A href=*href exact=*href == "/admin" attr:class="admin-nav-link">
                                <Icon name=*icon class="icon-text"/>
                                {*label}
                            </A>
                        })
                        .collect_view()}
                </nav>
                <div class="mt-auto p-4 flex gap-1" role="radiogroup" aria-label="Colour scheme">
                    {[ThemeMode::Auto, ThemeMode::Light, ThemeMode::Dark]
                        .into_iter()
                        .map(|mode| view! {
                            <button
                                class="chip"
                                class:chip-active=move || theme.mode.get() == mode
                                role="radio"
                                aria-checked=move || (theme.mode.get() == mode).to_string()
                                on:click=move |_| theme.set_mode(mode)
                            >
                                {mode.display_name()}
                            </button>
                        })
                        .collect_view()}
                </div>
            </aside>

            <main class="admin-main">
                <Show when=maintenance>
                    <div class="admin-banner" role="status">
                        <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                        "Maintenance mode is on. Tenant sites show a maintenance page."
                    </div>
                </Show>
                <Outlet/>
            </main>
        </div>
        <NotificationsContainer/>
    }
}
