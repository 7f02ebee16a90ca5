//! Keyboard routing for the walkthrough
//!
//! Maps `KeyboardEvent.key` values to controller commands. Keys without a
//! binding return `None` and must keep their default browser behaviour.

use super::Command;

/// Binding shown in the shortcut legend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub label: &'static str,
    pub action: &'static str,
}

/// Legend entries, in display order
pub const KEY_BINDINGS: &[KeyBinding] = &[
    KeyBinding {
        label: "→ / Space",
        action: "next",
    },
    KeyBinding {
        label: "←",
        action: "back",
    },
    KeyBinding {
        label: "A",
        action: "autoplay",
    },
    KeyBinding {
        label: "Esc",
        action: "stop",
    },
];

/// Translate a key into a command
pub fn route_key(key: &str) -> Option<Command> {
    match key {
        "ArrowRight" | " " => Some(Command::Next),
        "ArrowLeft" => Some(Command::Prev),
        "a" | "A" => Some(Command::ToggleAutoplay),
        "Escape" => Some(Command::Stop),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_keys() {
        assert_eq!(route_key("ArrowRight"), Some(Command::Next));
        assert_eq!(route_key(" "), Some(Command::Next));
        assert_eq!(route_key("ArrowLeft"), Some(Command::Prev));
    }

    #[test]
    fn test_autoplay_key_is_case_insensitive() {
        assert_eq!(route_key("a"), Some(Command::ToggleAutoplay));
        assert_eq!(route_key("A"), Some(Command::ToggleAutoplay));
    }

    #[test]
    fn test_escape_stops() {
        assert_eq!(route_key("Escape"), Some(Command::Stop));
    }

    #[test]
    fn test_pre_standard_key_names_are_unbound() {
        // Only `KeyboardEvent.key` values from current browsers are routed
        assert_eq!(route_key("Esc"), None);
        assert_eq!(route_key("Spacebar"), None);
    }

    #[test]
    fn test_unbound_keys_pass_through() {
        for key in ["ArrowUp", "ArrowDown", "Enter", "Tab", "b", "Shift", ""] {
            assert_eq!(route_key(key), None, "key {key:?} should be unbound");
        }
    }

    #[test]
    fn test_legend_covers_every_command() {
        assert_eq!(KEY_BINDINGS.len(), 4);
        assert!(KEY_BINDINGS.iter().any(|b| b.action == "stop"));
    }
}
