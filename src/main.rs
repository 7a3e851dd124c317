//! sso-verify CLI
//!
//! Usage: sso-verify [--config FILE] [--json] [--color WHEN] [-v...] [--skip CHECK]... [--list]

mod ui;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use sso_verify::presentation::Cli;
use sso_verify::{
    run_checks, selected_checks, CheckId, Config, ConfigWarning, RunSummary, Settings, Tracker,
};

use ui::context::UiContext;
use ui::views::verify::{
    render_check_list, render_config_warnings, render_verify_header, HumanSink, JsonSink,
};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.json)?;

    let (config, warnings) = Config::load_or_default(cli.config.as_deref())?;
    let ui = UiContext::new(cli.json, cli.color, &config.output);

    if cli.list {
        print!("{}", render_check_list(&ui));
        return Ok(ExitCode::SUCCESS);
    }

    report_config_warnings(&warnings, &ui);

    let settings = config.settings()?;
    let checks = selected_checks(&cli.skip);
    tracing::info!(
        home = %settings.home.display(),
        checks = checks.len(),
        skipped = cli.skip.len(),
        "starting verification"
    );

    let summary = if ui.json {
        run_json(&settings, &checks)?
    } else {
        run_human(&settings, &checks, ui)?
    };

    tracing::debug!(?summary, "verification finished");
    Ok(ExitCode::from(summary.exit_code()))
}

fn run_human(
    settings: &Settings,
    checks: &[CheckId],
    ui: UiContext,
) -> Result<RunSummary> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", render_verify_header(&settings.home.display().to_string(), &ui))?;

    let mut tracker = Tracker::new(HumanSink::new(stdout, ui));
    let summary = run_checks(settings, checks, &mut tracker);
    let mut stdout = tracker
        .into_sink()
        .finish()
        .context("failed to write report")?;
    stdout.flush()?;
    Ok(summary)
}

fn run_json(settings: &Settings, checks: &[CheckId]) -> Result<RunSummary> {
    let mut sink = JsonSink::new(io::stdout().lock());
    sink.start(checks);

    let mut tracker = Tracker::new(sink);
    let summary = run_checks(settings, checks, &mut tracker);
    let mut stdout = tracker
        .into_sink()
        .finish()
        .context("failed to write report")?;
    stdout.flush()?;
    Ok(summary)
}

/// Unknown config keys are reported on stderr and never stop the run.
fn report_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    if warnings.is_empty() {
        return;
    }
    if ui.json {
        for warning in warnings {
            eprintln!("Warning: {}", warning);
        }
    } else {
        eprint!("{}", render_config_warnings(warnings, ui));
    }
}

fn init_logging(verbose: u8, json: bool) -> Result<()> {
    if json {
        // Keep stdout and stderr free of log lines for machine consumers
        let subscriber = FmtSubscriber::builder()
            .with_max_level(tracing::Level::ERROR)
            .with_writer(io::empty)
            .without_time()
            .finish();
        return tracing::subscriber::set_global_default(subscriber)
            .context("Failed to set silent tracing subscriber");
    }

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set global default tracing subscriber")
}
