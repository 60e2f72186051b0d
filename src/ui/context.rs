use gearplan::config::{ColorMode, Config};

use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Resolved output settings for one command run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, verbose, cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            verbose,
            color: color && !json,
            unicode: config.output.unicode && caps.supports_unicode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty_caps(is_ci: bool) -> TerminalCapabilities {
        TerminalCapabilities {
            supports_color: true,
            supports_unicode: true,
            is_ci,
        }
    }

    #[test]
    fn auto_color_on_plain_tty() {
        let ui = UiContext::from_caps(false, 0, None, &Config::default(), tty_caps(false));
        assert!(ui.color);
        assert!(ui.unicode);
    }

    #[test]
    fn ci_defaults_to_no_color_when_auto() {
        let ui = UiContext::from_caps(false, 0, None, &Config::default(), tty_caps(true));
        assert!(!ui.color);
    }

    #[test]
    fn ci_allows_explicit_color_always_flag() {
        let ui = UiContext::from_caps(
            false,
            0,
            Some(ColorWhen::Always),
            &Config::default(),
            tty_caps(true),
        );
        assert!(ui.color);
    }

    #[test]
    fn config_can_disable_color_and_unicode() {
        let mut config = Config::default();
        config.output.color = ColorMode::Never;
        config.output.unicode = false;

        let ui = UiContext::from_caps(false, 0, None, &config, tty_caps(false));
        assert!(!ui.color);
        assert!(!ui.unicode);
    }

    #[test]
    fn json_output_is_never_colored() {
        let ui = UiContext::from_caps(true, 0, Some(ColorWhen::Always), &Config::default(), tty_caps(false));
        assert!(!ui.color);
    }
}
