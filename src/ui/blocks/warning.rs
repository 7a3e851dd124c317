use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// Boxed list of warnings under one heading
#[derive(Debug, Clone)]
pub struct WarningBlock {
    title: String,
    lines: Vec<String>,
}

impl WarningBlock {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let header = format!(
            "{} {}",
            Icon::Warning.colored(supports_color, supports_unicode),
            self.title
        );
        let mut panel = Panel::with_title(header).style(PanelStyle::Warning);
        for line in &self.lines {
            panel.add_line(line.as_str());
        }
        panel.render(supports_color, supports_unicode)
    }
}
