use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Arrow,
    Verify,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Progress) => theme::icons::PROGRESS,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Verify) => theme::icons::VERIFY,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Progress) => theme::icons_ascii::PROGRESS,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Verify) => theme::icons_ascii::VERIFY,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Progress | Icon::Verify => theme::colors::INFO,
            Icon::Arrow => theme::colors::DIM,
        };
        format!("{}", s.with(color))
    }
}
