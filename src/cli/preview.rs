//! Terminal preview command.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::preview::{render_preview, PreviewMode};
use clap::Args;
use std::io;

/// Show sample key markers in the configured colors
#[derive(Debug, Clone, Args)]
pub struct PreviewArgs {
    /// Color pair to show (light, dark, both, or auto). Defaults to the
    /// configured theme mode.
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,
}

impl PreviewArgs {
    /// Execute the preview command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load settings: {e:#}")))?;

        let mode = match &self.mode {
            Some(mode) => mode
                .parse::<PreviewMode>()
                .map_err(|e| CliError::validation(e.to_string()))?,
            None => PreviewMode::from(config.ui.theme_mode),
        };

        let pairs = mode.resolve();
        tracing::debug!(%mode, ?pairs, "rendering preview");

        render_preview(&mut io::stdout().lock(), &config.colors, &pairs)
            .map_err(|e| CliError::io(format!("{e:#}")))
    }
}
