//! Fallback for unknown routes

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::ui::icon::{Icon, icons};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Real 404 on the server render so crawlers drop the URL
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    let path = use_location().pathname;

    view! {
        <Title text="Page not found - Campusly"/>
        <Meta name="robots" content="noindex"/>
        <main class="not-found">
            <Icon name=icons::ALERT_CIRCLE class="not-found-icon"/>
            <p class="not-found-code">"404"</p>
            <h1 class="title-lg">"Nothing lives here"</h1>
            <p class="text-theme-secondary">
                "No page matches " <code class="font-mono">{move || path.get()}</code> "."
            </p>
            <nav class="not-found-links">
                <A href="/" attr:class="landing-btn-primary">"Back to Campusly"</A>
                <A href="/demo" attr:class="landing-btn-secondary">"Take the product tour"</A>
            </nav>
        </main>
    }
}
