//! Keyboard Formatter - key markers for notes from the command line
//!
//! Formats text given as arguments, piped on stdin, or held in the clipboard,
//! and manages the marker color settings.

use clap::{Parser, Subcommand};
use kbdfmt::cli::{CssArgs, ExitCode, FormatArgs, KeysArgs, PreviewArgs, SettingsArgs};
use kbdfmt::constants::{APP_BINARY_NAME, FORMAT_COMMAND_NAME};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Keyboard Formatter - turn key names into decorated key markers
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = FORMAT_COMMAND_NAME)]
    Format(FormatArgs),
    /// List and search the recognized key names
    Keys(KeysArgs),
    /// Show or change the key marker colors
    Settings(SettingsArgs),
    /// Show sample key markers in the configured colors
    Preview(PreviewArgs),
    /// Print the key marker stylesheet
    Css(CssArgs),
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays the formatted output
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Commands::Format(args) => args.execute(),
        Commands::Keys(args) => args.execute(),
        Commands::Settings(args) => args.execute(),
        Commands::Preview(args) => args.execute(),
        Commands::Css(args) => args.execute(),
    };

    let code = match result {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            tracing::debug!(?e, "command failed");
            eprintln!("Error: {e}");
            e.exit_code()
        }
    };

    std::process::exit(code.code());
}
