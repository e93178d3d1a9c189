use clap::Parser;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Interactive hospital intake desk simulation
#[derive(Parser, Debug, Clone)]
#[command(
    name = "hospital-desk",
    about = "Interactive hospital intake desk simulation",
    version
)]
pub struct Settings {
    /// Colour theme for status messages
    #[arg(long, default_value = "auto", value_parser = ["auto", "color", "plain"])]
    pub theme: String,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments and apply the `--debug` override.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`Settings::load`] but with an explicit argument list, so tests
    /// do not depend on the real command line.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut settings = Settings::parse_from(args);
        // --debug overrides log level.
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }

    /// Resolve the `"auto"` theme against whether stdout is a terminal.
    ///
    /// Returns `true` when ANSI colours should be emitted.
    pub fn use_color(&self, stdout_is_terminal: bool) -> bool {
        match self.theme.as_str() {
            "color" => true,
            "plain" => false,
            _ => stdout_is_terminal,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
