use sso_verify::config::{ColorMode, OutputConfig};
use sso_verify::presentation::ColorWhen;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Resolved rendering choices for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>, output: &OutputConfig) -> Self {
        Self::from_caps(json, cli_color, output, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        output: &OutputConfig,
        caps: TerminalCapabilities,
    ) -> Self {
        // The flag wins over the config file and SSO_VERIFY_COLOR
        let mode = cli_color.map(ColorMode::from).unwrap_or(output.color);
        let color = !json
            && match mode {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            };

        Self {
            json,
            color,
            unicode: output.unicode && caps.supports_unicode,
        }
    }
}
