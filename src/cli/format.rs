//! Format keyboard text command.

use crate::cli::common::{CliError, CliResult};
use crate::constants::FORMAT_COMMAND_ID;
use crate::host::{format_selection, SelectionHost, StdioHost, TextHost};
use clap::Args;
use std::io;

/// Turn key names into decorated key markers
///
/// Reads the text from the arguments, from the clipboard with --clipboard,
/// or from standard input.
#[derive(Debug, Clone, Args)]
pub struct FormatArgs {
    /// Text to format (words are joined with single spaces)
    #[arg(value_name = "TEXT", conflicts_with = "clipboard")]
    pub text: Vec<String>,

    /// Format the clipboard contents in place
    #[arg(long)]
    pub clipboard: bool,
}

impl FormatArgs {
    /// Execute the format command
    pub fn execute(&self) -> CliResult<()> {
        tracing::debug!(command = FORMAT_COMMAND_ID, "running");

        if self.clipboard {
            return format_clipboard();
        }

        if !self.text.is_empty() {
            let mut host = TextHost::new(self.text.join(" "));
            run(&mut host)?;
            if let Some(replacement) = host.replacement() {
                println!("{replacement}");
            }
            return Ok(());
        }

        let mut host = StdioHost::new(io::stdin().lock(), io::stdout().lock());
        run(&mut host)
    }
}

fn run<H: SelectionHost + ?Sized>(host: &mut H) -> CliResult<()> {
    format_selection(host).map_err(|e| CliError::io(format!("{e:#}")))?;
    Ok(())
}

#[cfg(feature = "clipboard")]
fn format_clipboard() -> CliResult<()> {
    let mut host = crate::host::ClipboardHost::open()
        .map_err(|e| CliError::io(format!("{e:#}")))?;
    run(&mut host)?;
    eprintln!("Clipboard formatted.");
    Ok(())
}

#[cfg(not(feature = "clipboard"))]
fn format_clipboard() -> CliResult<()> {
    Err(CliError::validation(
        "Clipboard support is not available in this build",
    ))
}
