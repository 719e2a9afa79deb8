use crossterm::style::Color;

use farmbook::domain::value_objects::Tint;

/// Design tokens for the farmbook terminal UI.
///
/// Design constraints:
/// - 5 semantic colors (`colors::*`) plus the category tints (`tint_color`)
/// - All icons and borders must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

/// Color of a category tint (diary categories, event kinds).
pub fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Blue => Color::Blue,
        Tint::Green => Color::Green,
        Tint::Yellow => Color::Yellow,
        Tint::Purple => Color::Magenta,
        Tint::Red => Color::Red,
        Tint::Grey => Color::Grey,
    }
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PENDING: &str = "○";
    pub const ARROW: &str = "↳";
    pub const BULLET: &str = "•";

    // Command identifiers (used in headers).
    pub const FIELD: &str = "🌾";
    pub const ANIMAL: &str = "🐄";
    pub const GREENHOUSE: &str = "🏡";
    pub const DIARY: &str = "📓";
    pub const CALENDAR: &str = "📅";
    pub const WEATHER: &str = "🌤";
    pub const ADVICE: &str = "💡";
    pub const DASHBOARD: &str = "📊";
    pub const STORE: &str = "🗄";
    pub const USER: &str = "👤";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PENDING: &str = "[ ]";
    pub const ARROW: &str = "[>]";
    pub const BULLET: &str = "*";

    pub const FIELD: &str = "[FIELD]";
    pub const ANIMAL: &str = "[ANIMAL]";
    pub const GREENHOUSE: &str = "[GREENHOUSE]";
    pub const DIARY: &str = "[DIARY]";
    pub const CALENDAR: &str = "[CALENDAR]";
    pub const WEATHER: &str = "[WEATHER]";
    pub const ADVICE: &str = "[ADVICE]";
    pub const DASHBOARD: &str = "[FARM]";
    pub const STORE: &str = "[STORE]";
    pub const USER: &str = "[USER]";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";

    // Grid joints for the calendar.
    pub const TEE_DOWN: &str = "┬";
    pub const TEE_UP: &str = "┴";
    pub const TEE_RIGHT: &str = "├";
    pub const TEE_LEFT: &str = "┤";
    pub const CROSS: &str = "┼";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";

    pub const TEE_DOWN: &str = "+";
    pub const TEE_UP: &str = "+";
    pub const TEE_RIGHT: &str = "+";
    pub const TEE_LEFT: &str = "+";
    pub const CROSS: &str = "+";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_borders_are_single_column() {
        for s in [
            borders_ascii::TOP_LEFT,
            borders_ascii::HORIZONTAL,
            borders_ascii::VERTICAL,
            borders_ascii::CROSS,
        ] {
            assert_eq!(s.len(), 1);
        }
    }

    #[test]
    fn purple_tint_maps_to_magenta() {
        assert_eq!(tint_color(Tint::Purple), Color::Magenta);
    }
}
