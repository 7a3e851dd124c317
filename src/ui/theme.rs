use crossterm::style::Color;

/// Design tokens for the verifier's terminal output.
///
/// Every icon, color and border drawn by `ui` comes from this module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const ARROW: &str = "↳";
    pub const VERIFY: &str = "🔐";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const ARROW: &str = "[>]";
    pub const VERIFY: &str = "[SSO]";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}
