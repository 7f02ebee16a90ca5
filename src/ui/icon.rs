//! Monochrome SVG icons served from `public/icons`

use leptos::prelude::*;

/// Decorative icon; the surrounding control carries the accessible label
#[component]
pub fn Icon(
    /// File stem under `/icons`
    name: &'static str,
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <img
            src=format!("/icons/{name}.svg")
            class=format!("icon {class}")
            alt=""
            aria-hidden="true"
            draggable="false"
        />
    }
}

/// Icon names shipped in `public/icons`
pub mod icons {
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const TRASH: &str = "trash";
    pub const CHECK: &str = "check";
    pub const X: &str = "x";
    pub const MENU: &str = "menu";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const SUN: &str = "sun";
    pub const MOON: &str = "moon";
    pub const PLAY: &str = "play";
    pub const PAUSE: &str = "pause";
    pub const DOWNLOAD: &str = "download";
    pub const SEARCH: &str = "search";
    pub const HOME: &str = "home";
    pub const LAYERS: &str = "layers";
    pub const GLOBE: &str = "globe";
    pub const CREDIT_CARD: &str = "credit-card";
    pub const ACTIVITY: &str = "activity";
    pub const SETTINGS: &str = "settings";
    pub const QUOTE: &str = "quote";
}
