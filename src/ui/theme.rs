use crossterm::style::Color;

/// Design tokens for the vanillafy CLI.
///
/// Only 5 semantic colors; every icon comes from this module.
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

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const ARROW: &str = "↳";
    pub const BULLET: &str = "-";

    // Command identifiers (used in headers).
    pub const CLEAN: &str = "🧹";
    pub const CHECK: &str = "🔍";
    pub const SHIELD: &str = "🛡";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const ARROW: &str = "[>]";
    pub const BULLET: &str = "-";

    pub const CLEAN: &str = "[CLEAN]";
    pub const CHECK: &str = "[CHECK]";
    pub const SHIELD: &str = "[ZONES]";
}
