//! Platform-aware hint text for a key set (⌘D on macOS, Ctrl+D on Windows/Linux).

use super::normalize::{normalize_key, ALT, CMD, CTRL};
use super::types::Platform;

/// Render a combination for display, modifiers first in platform order.
pub fn hint_text<S: AsRef<str>>(keys: &[S], platform: Platform) -> String {
    let mut cmd = false;
    let mut ctrl = false;
    let mut alt = false;
    let mut shift = false;
    let mut rest: Vec<&str> = Vec::new();

    for key in keys {
        match normalize_key(key.as_ref()) {
            CMD => cmd = true,
            CTRL => ctrl = true,
            ALT => alt = true,
            "ShiftLeft" | "ShiftRight" | "Shift" => shift = true,
            other => rest.push(other),
        }
    }

    match platform {
        Platform::MacOS => {
            let mut s = String::new();
            if ctrl {
                s.push('⌃');
            }
            if alt {
                s.push('⌥');
            }
            if shift {
                s.push('⇧');
            }
            if cmd {
                s.push('⌘');
            }
            for key in rest {
                s.push_str(&key_glyph(key));
            }
            s
        }
        Platform::Windows | Platform::Linux => {
            let mut parts: Vec<String> = Vec::new();
            if ctrl {
                parts.push("Ctrl".to_string());
            }
            if alt {
                parts.push("Alt".to_string());
            }
            if shift {
                parts.push("Shift".to_string());
            }
            if cmd {
                parts.push("Super".to_string());
            }
            parts.extend(rest.into_iter().map(key_label));
            parts.join("+")
        }
    }
}

fn key_glyph(code: &str) -> String {
    match code {
        "Enter" | "NumpadEnter" => "↵",
        "Escape" => "⎋",
        "Tab" => "⇥",
        "Space" => "␣",
        "Backspace" => "⌫",
        "Delete" => "⌦",
        "ArrowUp" => "↑",
        "ArrowDown" => "↓",
        "ArrowLeft" => "←",
        "ArrowRight" => "→",
        "Home" => "↖",
        "End" => "↘",
        "PageUp" => "⇞",
        "PageDown" => "⇟",
        _ => return key_label(code),
    }
    .to_string()
}

fn key_label(code: &str) -> String {
    let stripped = code
        .strip_prefix("Key")
        .or_else(|| code.strip_prefix("Digit"))
        .filter(|s| !s.is_empty())
        .unwrap_or(code);
    match stripped {
        "Escape" => "Esc".to_string(),
        "ArrowUp" => "Up".to_string(),
        "ArrowDown" => "Down".to_string(),
        "ArrowLeft" => "Left".to_string(),
        "ArrowRight" => "Right".to_string(),
        s if s.chars().count() == 1 => s.to_uppercase(),
        s => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macos_uses_glyphs_in_modifier_order() {
        assert_eq!(hint_text(&["Cmd", "KeyD"], Platform::MacOS), "⌘D");
        assert_eq!(
            hint_text(&["KeyK", "ShiftLeft", "MetaRight"], Platform::MacOS),
            "⇧⌘K"
        );
        assert_eq!(hint_text(&["Cmd", "Enter"], Platform::MacOS), "⌘↵");
        assert_eq!(hint_text(&["Alt", "Ctrl", "Digit1"], Platform::MacOS), "⌃⌥1");
    }

    #[test]
    fn other_platforms_use_words() {
        assert_eq!(hint_text(&["Ctrl", "KeyD"], Platform::Linux), "Ctrl+D");
        assert_eq!(
            hint_text(&["Enter", "ControlLeft", "AltRight"], Platform::Windows),
            "Ctrl+Alt+Enter"
        );
        assert_eq!(hint_text(&["Cmd", "Escape"], Platform::Linux), "Super+Esc");
        assert_eq!(hint_text(&["ArrowUp"], Platform::Linux), "Up");
    }

    #[test]
    fn unknown_codes_are_shown_verbatim() {
        assert_eq!(hint_text(&["F5"], Platform::Windows), "F5");
        assert_eq!(hint_text(&["Key"], Platform::Windows), "Key");
    }
}
