//! Raw key code to canonical token mapping.

pub const CMD: &str = "Cmd";
pub const ALT: &str = "Alt";
pub const CTRL: &str = "Ctrl";

/// Collapse left/right modifier codes onto their logical name.
///
/// Every other code passes through unchanged.
pub fn normalize_key(raw: &str) -> &str {
    match raw {
        "MetaLeft" | "MetaRight" | "OSLeft" | "OSRight" => CMD,
        "AltLeft" | "AltRight" => ALT,
        "ControlLeft" | "ControlRight" => CTRL,
        _ => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_sides_collapse_to_logical_modifier() {
        for raw in ["MetaLeft", "MetaRight", "OSLeft", "OSRight"] {
            assert_eq!(normalize_key(raw), CMD, "{raw}");
        }
        assert_eq!(normalize_key("AltLeft"), ALT);
        assert_eq!(normalize_key("AltRight"), ALT);
        assert_eq!(normalize_key("ControlLeft"), CTRL);
        assert_eq!(normalize_key("ControlRight"), CTRL);
    }

    #[test]
    fn other_codes_pass_through() {
        assert_eq!(normalize_key("KeyD"), "KeyD");
        assert_eq!(normalize_key("Enter"), "Enter");
        assert_eq!(normalize_key("ShiftLeft"), "ShiftLeft");
        assert_eq!(normalize_key("Cmd"), "Cmd");
        assert_eq!(normalize_key(""), "");
    }
}
