//! CLI command handlers for kbdfmt.
//!
//! Each subcommand is a clap `Args` struct with an `execute` method returning
//! [`common::CliResult`]; `main.rs` maps failures to exit codes.

pub mod common;
pub mod css;
pub mod format;
pub mod keys;
pub mod preview;
pub mod settings;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use css::CssArgs;
pub use format::FormatArgs;
pub use keys::KeysArgs;
pub use preview::PreviewArgs;
pub use settings::SettingsArgs;
