use crossterm::style::{Color, Stylize};

use crate::ui::theme::{colors, icons, icons_ascii};

/// Semantic icon; the glyph depends on unicode support, the tint on color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Arrow,
    Bullet,
    Clean,
    Check,
    Shield,
}

impl Icon {
    /// (unicode, ascii)
    fn glyphs(self) -> (&'static str, &'static str) {
        match self {
            Icon::Success => (icons::SUCCESS, icons_ascii::SUCCESS),
            Icon::Error => (icons::ERROR, icons_ascii::ERROR),
            Icon::Warning => (icons::WARNING, icons_ascii::WARNING),
            Icon::Progress => (icons::PROGRESS, icons_ascii::PROGRESS),
            Icon::Arrow => (icons::ARROW, icons_ascii::ARROW),
            Icon::Bullet => (icons::BULLET, icons_ascii::BULLET),
            Icon::Clean => (icons::CLEAN, icons_ascii::CLEAN),
            Icon::Check => (icons::CHECK, icons_ascii::CHECK),
            Icon::Shield => (icons::SHIELD, icons_ascii::SHIELD),
        }
    }

    fn tint(self) -> Color {
        match self {
            Icon::Success => colors::SUCCESS,
            Icon::Error => colors::ERROR,
            Icon::Warning | Icon::Progress => colors::WARNING,
            Icon::Arrow | Icon::Bullet => colors::DIM,
            Icon::Clean | Icon::Check | Icon::Shield => colors::INFO,
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        let (unicode, ascii) = self.glyphs();
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let glyph = self.render(supports_unicode);
        if supports_color {
            glyph.with(self.tint()).to_string()
        } else {
            glyph.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_fallbacks() {
        assert_eq!(Icon::Success.render(false), "[OK]");
        assert_eq!(Icon::Shield.render(false), "[ZONES]");
    }

    #[test]
    fn color_only_when_asked() {
        assert_eq!(Icon::Error.colored(false, true), "✗");
        assert!(Icon::Error.colored(true, true).contains("\u{1b}["));
    }
}
