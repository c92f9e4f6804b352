//! Options shared by every command, resolved once in `main`

use crate::cli::Cli;
use crate::config::Settings;
use anyhow::Result;
use std::path::PathBuf;

/// Resolved settings plus the global output flags
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    pub settings: Settings,
    pub verbose: bool,
    pub quiet: bool,
}

impl CommandContext {
    /// Load configuration and apply command-line overrides
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut settings = Settings::load(cli.config.as_deref())?;
        if let Some(dir) = &cli.output_dir {
            settings.output.dir = Some(dir.clone());
        }

        Ok(Self {
            settings,
            verbose: cli.verbose,
            quiet: cli.quiet,
        })
    }

    /// Build a context directly from settings
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Whether human-oriented output should be printed
    pub fn is_chatty(&self) -> bool {
        !self.quiet
    }

    pub fn output_dir(&self) -> PathBuf {
        self.settings.output_dir()
    }
}
