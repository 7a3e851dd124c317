use sso_verify::CheckOutcome;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Result line for one finished check
#[derive(Debug, Clone)]
pub struct CheckItem<'a> {
    pub name: &'a str,
    pub outcome: &'a CheckOutcome,
}

impl CheckItem<'_> {
    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (icon, label, detail) = match self.outcome {
            CheckOutcome::Passed => (Icon::Success, ColoredText::success("PASSED"), None),
            CheckOutcome::Failed(message) => (
                Icon::Error,
                ColoredText::error("FAILED"),
                Some(message.clone()),
            ),
            CheckOutcome::Error(message) => (
                Icon::Error,
                ColoredText::error("ERROR"),
                Some(format!("Unexpected error: {}", message)),
            ),
        };

        let mut out = format!(
            "{} {}: {}\n",
            icon.colored(supports_color, supports_unicode),
            label.bold().render(supports_color),
            self.name
        );

        if let Some(detail) = detail {
            for line in detail.lines() {
                out.push_str(&format!(
                    "  {} {}\n",
                    Icon::Arrow.colored(supports_color, supports_unicode),
                    line
                ));
            }
        }

        out
    }
}
