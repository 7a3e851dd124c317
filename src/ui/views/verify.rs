//! Report sinks for the verification run, plus the `--list` table.

use std::io::{self, Write};

use sso_verify::{CheckId, CheckOutcome, ConfigWarning, Counts, ReportSink};

use crate::ui::blocks::check_item::CheckItem;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::blocks::warning::WarningBlock;
use crate::ui::context::UiContext;
use crate::ui::json::events::{
    CheckEvent, CheckStartEvent, CompleteEvent, MessageEvent, StartEvent,
};
use crate::ui::json::write_event;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_verify_header(home: &str, ui: &UiContext) -> String {
    let mut header = CommandHeader::new(Icon::Verify, "AWS SSO Login Verification");
    header.add("Home", home);
    header.render(ui.color, ui.unicode)
}

pub fn render_check_list(ui: &UiContext) -> String {
    let width = CheckId::ALL
        .iter()
        .map(|id| id.slug().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for id in CheckId::ALL {
        let slug = format!("{:width$}", id.slug(), width = width);
        out.push_str(&format!(
            "{}  {}\n",
            ColoredText::info(slug).render(ui.color),
            id.title()
        ));
    }
    out
}

pub fn render_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) -> String {
    let mut block = WarningBlock::new("Configuration warnings");
    for warning in warnings {
        block.add_line(warning.to_string());
    }
    if block.is_empty() {
        return String::new();
    }
    block.render(ui.color, ui.unicode)
}

/// Human-readable output. Keeps the first write error for [`HumanSink::finish`].
pub struct HumanSink<W: Write> {
    out: W,
    ui: UiContext,
    error: Option<io::Error>,
}

impl<W: Write> HumanSink<W> {
    pub fn new(out: W, ui: UiContext) -> Self {
        Self {
            out,
            ui,
            error: None,
        }
    }

    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.out),
        }
    }

    fn emit(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.out.write_all(text.as_bytes()) {
            self.error = Some(err);
        }
    }
}

impl<W: Write> ReportSink for HumanSink<W> {
    fn check_started(&mut self, name: &str) {
        let line = format!(
            "\n{} Testing: {}\n",
            Icon::Progress.colored(self.ui.color, self.ui.unicode),
            ColoredText::info(name).bold().render(self.ui.color)
        );
        self.emit(&line);
    }

    fn note(&mut self, line: &str) {
        self.emit(&format!("  {}\n", line));
    }

    fn warning(&mut self, message: &str) {
        let line = format!(
            "  {} {} {}\n",
            Icon::Warning.colored(self.ui.color, self.ui.unicode),
            ColoredText::warning("WARNING:").render(self.ui.color),
            message
        );
        self.emit(&line);
    }

    fn check_finished(&mut self, name: &str, outcome: &CheckOutcome) {
        let item = CheckItem { name, outcome };
        let rendered = item.render(self.ui.color, self.ui.unicode);
        self.emit(&rendered);
    }

    fn summary(&mut self, counts: &Counts) {
        let rendered = ResultSummary::new(*counts).render(self.ui.color, self.ui.unicode);
        self.emit("\n");
        self.emit(&rendered);
    }
}

/// NDJSON output. Keeps the first write error for [`JsonSink::finish`].
pub struct JsonSink<W: Write> {
    out: W,
    current: Option<String>,
    error: Option<io::Error>,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            current: None,
            error: None,
        }
    }

    pub fn start(&mut self, checks: &[CheckId]) {
        let titles = checks.iter().map(|id| id.title()).collect();
        self.write(&StartEvent::new(titles));
    }

    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.out),
        }
    }

    fn write<T: serde::Serialize>(&mut self, event: &T) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = write_event(&mut self.out, event) {
            self.error = Some(err);
        }
    }
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn check_started(&mut self, name: &str) {
        self.current = Some(name.to_string());
        self.write(&CheckStartEvent::new(name));
    }

    fn note(&mut self, line: &str) {
        let check = self.current.clone();
        self.write(&MessageEvent::note(check.as_deref(), line));
    }

    fn warning(&mut self, message: &str) {
        let check = self.current.clone();
        self.write(&MessageEvent::warning(check.as_deref(), message));
    }

    fn check_finished(&mut self, name: &str, outcome: &CheckOutcome) {
        self.current = None;
        self.write(&CheckEvent::new(name, outcome));
    }

    fn summary(&mut self, counts: &Counts) {
        self.write(&CompleteEvent::new(counts));
    }
}
