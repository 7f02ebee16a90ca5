//! Dark, light and automatic colour schemes
//!
//! Server and client both render the first frame in `Auto` with a light
//! system preference, so hydration sees identical markup. Once mounted, the
//! client reads the stored choice and the `prefers-color-scheme` query and
//! keeps the `dark` class on `<html>` in sync.

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// localStorage key holding the chosen mode
#[cfg_attr(feature = "ssr", allow(dead_code))]
const THEME_STORAGE_KEY: &str = "campusly-theme";

#[cfg_attr(feature = "ssr", allow(dead_code))]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Follow the operating system
    #[default]
    Auto,
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Auto => "auto",
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Unknown or missing values mean `Auto`
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            "light" => ThemeMode::Light,
            _ => ThemeMode::Auto,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeMode::Auto => "Automatic",
            ThemeMode::Dark => "Dark",
            ThemeMode::Light => "Light",
        }
    }

    /// Whether this mode renders dark given the system preference
    pub fn resolves_dark(self, system_prefers_dark: bool) -> bool {
        match self {
            ThemeMode::Dark => true,
            ThemeMode::Light => false,
            ThemeMode::Auto => system_prefers_dark,
        }
    }

    /// Explicit mode that flips the currently rendered scheme
    pub fn opposite_of(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub mode: RwSignal<ThemeMode>,
    /// Effective scheme after resolving `Auto`
    pub is_dark: Memo<bool>,
    pub system_prefers_dark: RwSignal<bool>,
}

impl ThemeContext {
    /// Choose a mode and remember it
    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
        store_mode(mode);
    }

    /// Flip between dark and light, leaving automatic mode
    pub fn toggle(&self) {
        self.set_mode(ThemeMode::opposite_of(self.is_dark.get_untracked()));
    }
}

#[cfg(not(feature = "ssr"))]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(not(feature = "ssr"))]
fn dark_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_QUERY).ok().flatten()
}

fn store_mode(mode: ThemeMode) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(THEME_STORAGE_KEY, mode.as_str());
        }
    }
    #[cfg(feature = "ssr")]
    let _ = mode;
}

pub fn provide_theme_context() -> ThemeContext {
    let mode = RwSignal::new(ThemeMode::Auto);
    let system_prefers_dark = RwSignal::new(false);
    let is_dark = Memo::new(move |_| mode.get().resolves_dark(system_prefers_dark.get()));

    let ctx = ThemeContext {
        mode,
        is_dark,
        system_prefers_dark,
    };

    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        // Effects only run in the browser, after hydration
        Effect::new(move |_| {
            if let Some(stored) = local_storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten()) {
                mode.set(ThemeMode::parse(&stored));
            }

            if let Some(query) = dark_query() {
                system_prefers_dark.set(query.matches());

                let on_change = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                    move |e: web_sys::MediaQueryListEvent| {
                        system_prefers_dark.try_set(e.matches());
                    },
                );
                let _ = query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
                // Lives as long as the page
                on_change.forget();
            }
        });

        Effect::new(move |_| {
            let dark = is_dark.get();
            let root = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element());
            if let Some(root) = root {
                let classes = root.class_list();
                let _ = if dark {
                    classes.add_1("dark")
                } else {
                    classes.remove_1("dark")
                };
            }
        });
    }

    provide_context(ctx);
    ctx
}

pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trips_through_storage_string() {
        for mode in [ThemeMode::Auto, ThemeMode::Dark, ThemeMode::Light] {
            assert_eq!(ThemeMode::parse(mode.as_str()), mode);
        }
    }

    #[test]
    fn test_unknown_value_falls_back_to_auto() {
        assert_eq!(ThemeMode::parse("sepia"), ThemeMode::Auto);
        assert_eq!(ThemeMode::parse(""), ThemeMode::Auto);
    }

    #[test]
    fn test_auto_follows_system() {
        assert!(ThemeMode::Auto.resolves_dark(true));
        assert!(!ThemeMode::Auto.resolves_dark(false));
        assert!(ThemeMode::Dark.resolves_dark(false));
        assert!(!ThemeMode::Light.resolves_dark(true));
    }

    #[test]
    fn test_toggle_target_is_explicit() {
        assert_eq!(ThemeMode::opposite_of(true), ThemeMode::Light);
        assert_eq!(ThemeMode::opposite_of(false), ThemeMode::Dark);
    }
}
