use sso_verify::Counts;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// Final totals box
#[derive(Debug, Clone, Copy)]
pub struct ResultSummary {
    counts: Counts,
}

impl ResultSummary {
    pub fn new(counts: Counts) -> Self {
        Self { counts }
    }

    /// Headline shown in the box title
    pub fn headline(&self) -> String {
        if self.counts.is_success() {
            "All tests passed!".to_string()
        } else {
            format!("{} test(s) failed", self.counts.failed)
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let success = self.counts.is_success();
        let (style, icon, title) = if !success {
            (
                PanelStyle::Error,
                Icon::Error,
                ColoredText::error(self.headline()),
            )
        } else if self.counts.warnings > 0 {
            (
                PanelStyle::Warning,
                Icon::Success,
                ColoredText::success(self.headline()),
            )
        } else {
            (
                PanelStyle::Success,
                Icon::Success,
                ColoredText::success(self.headline()),
            )
        };

        let header = format!(
            "{} {}",
            icon.colored(supports_color, supports_unicode),
            title.bold().render(supports_color)
        );

        let mut panel = Panel::with_title(header).style(style);
        panel.add_empty();
        panel.add_line(format!("Passed: {}", self.counts.passed));
        panel.add_line(format!("Failed: {}", self.counts.failed));
        let warnings = format!("Warnings: {}", self.counts.warnings);
        if self.counts.warnings > 0 {
            panel.add_line(ColoredText::warning(warnings).render(supports_color));
        } else {
            panel.add_line(warnings);
        }

        panel.render(supports_color, supports_unicode)
    }
}
