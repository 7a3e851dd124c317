use std::borrow::Cow;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::border::BorderChar;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStyle {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Bordered block of lines, sized to its widest line
#[derive(Debug, Default, Clone)]
pub struct Panel {
    title: Option<String>,
    content: Vec<String>,
    style: PanelStyle,
}

impl Panel {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: PanelStyle) -> Self {
        self.style = style;
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        self.content.extend(line.lines().map(str::to_string));
    }

    pub fn add_empty(&mut self) {
        self.content.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let lines: Vec<&str> = self
            .title
            .iter()
            .chain(self.content.iter())
            .map(String::as_str)
            .collect();

        // One space of padding on each side
        let inner = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0) + 2;

        let h = BorderChar::Horizontal.render(supports_unicode).repeat(inner);
        let v = self.paint(BorderChar::Vertical.render(supports_unicode), supports_color);

        let mut out = String::new();
        let top = format!(
            "{}{}{}",
            BorderChar::TopLeft.render(supports_unicode),
            h,
            BorderChar::TopRight.render(supports_unicode)
        );
        out.push_str(&self.paint(&top, supports_color));
        out.push('\n');

        for line in lines {
            let pad = inner.saturating_sub(1 + visible_width(line));
            out.push_str(&format!("{} {}{}{}\n", v, line, " ".repeat(pad), v));
        }

        let bottom = format!(
            "{}{}{}",
            BorderChar::BottomLeft.render(supports_unicode),
            h,
            BorderChar::BottomRight.render(supports_unicode)
        );
        out.push_str(&self.paint(&bottom, supports_color));
        out.push('\n');
        out
    }

    fn paint(&self, s: &str, supports_color: bool) -> String {
        if !supports_color {
            return s.to_string();
        }

        let color = match self.style {
            PanelStyle::Info => theme::colors::INFO,
            PanelStyle::Success => theme::colors::SUCCESS,
            PanelStyle::Warning => theme::colors::WARNING,
            PanelStyle::Error => theme::colors::ERROR,
        };
        format!("{}", s.with(color))
    }
}

/// Display width, ignoring ANSI escapes
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\u{1b}' {
            out.push(c);
            continue;
        }
        // ESC [ ... <final letter>
        if matches!(chars.peek(), Some('[') | Some(']')) {
            chars.next();
        }
        for next in chars.by_ref() {
            if next.is_ascii_alphabetic() {
                break;
            }
        }
    }

    Cow::Owned(out)
}
