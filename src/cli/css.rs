//! Stylesheet output command.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::style::{CssDocument, StyleGuard};
use clap::Args;

/// Print the key marker stylesheet for the configured colors
#[derive(Debug, Clone, Args)]
pub struct CssArgs {
    /// Also emit the settings preview properties
    #[arg(long)]
    pub preview: bool,
}

impl CssArgs {
    /// Execute the css command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load settings: {e:#}")))?;

        print!("{}", stylesheet(&config, self.preview));
        Ok(())
    }
}

/// Renders the document while the styling guard is held.
fn stylesheet(config: &Config, preview: bool) -> String {
    let mut document = CssDocument::new();
    let mut guard = StyleGuard::acquire(&mut document, &config.colors);
    if preview {
        guard.apply_preview(&config.colors);
    }
    guard.sink().render()
}
