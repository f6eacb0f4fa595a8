//! Marker color settings commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::{ColorField, Config, ThemeMode};
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Show or change the key marker colors
#[derive(Args, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    command: SettingsCommand,
}

#[derive(Subcommand, Debug)]
enum SettingsCommand {
    /// Display current settings
    Show(SettingsShowArgs),
    /// Set one or more settings
    Set(SettingsSetArgs),
    /// Restore the default colors
    Reset(SettingsResetArgs),
}

/// Display current settings
#[derive(Args, Debug)]
pub struct SettingsShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set one or more settings
#[derive(Args, Debug)]
pub struct SettingsSetArgs {
    /// Marker background in light mode (hex, e.g. #e3e6e8)
    #[arg(long, value_name = "COLOR")]
    light_bg: Option<String>,

    /// Marker text in light mode
    #[arg(long, value_name = "COLOR")]
    light_text: Option<String>,

    /// Marker background in dark mode
    #[arg(long, value_name = "COLOR")]
    dark_bg: Option<String>,

    /// Marker text in dark mode
    #[arg(long, value_name = "COLOR")]
    dark_text: Option<String>,

    /// Default preview theme (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,
}

/// Restore the default colors
#[derive(Args, Debug)]
pub struct SettingsResetArgs {}

/// JSON-serializable settings for output
#[derive(Serialize, Debug)]
struct SettingsOutput<'a> {
    colors: ColorsOutput<'a>,
    ui: UiOutput,
    saved: bool,
}

#[derive(Serialize, Debug)]
struct ColorsOutput<'a> {
    light_bg: &'a str,
    light_text: &'a str,
    dark_bg: &'a str,
    dark_text: &'a str,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: &'static str,
}

impl SettingsArgs {
    /// Execute settings subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            SettingsCommand::Show(args) => args.execute(),
            SettingsCommand::Set(args) => args.execute(),
            SettingsCommand::Reset(args) => args.execute(),
        }
    }
}

fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load settings: {e:#}")))
}

fn save_config(config: &Config) -> CliResult<()> {
    config
        .save()
        .map_err(|e| CliError::io(format!("Failed to save settings: {e:#}")))
}

impl SettingsShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let saved = Config::exists();

        if self.json {
            output_json(&config, saved)?;
        } else {
            output_human_readable(&config, saved);
        }

        Ok(())
    }
}

impl SettingsSetArgs {
    fn updates(&self) -> [(ColorField, Option<&String>); 4] {
        [
            (ColorField::LightBackground, self.light_bg.as_ref()),
            (ColorField::LightText, self.light_text.as_ref()),
            (ColorField::DarkBackground, self.dark_bg.as_ref()),
            (ColorField::DarkText, self.dark_text.as_ref()),
        ]
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.updates().iter().all(|(_, value)| value.is_none()) && self.theme.is_none() {
            return Err(CliError::validation(
                "At least one setting must be specified: --light-bg, --light-text, --dark-bg, --dark-text, or --theme",
            ));
        }

        let mut config = load_config()?;

        // Validate everything before anything is written
        for (field, value) in self.updates() {
            if let Some(value) = value {
                config
                    .colors
                    .set(field, value)
                    .map_err(|e| CliError::validation(format!("{field}: {e:#}")))?;
            }
        }

        if let Some(theme) = &self.theme {
            config.ui.theme_mode = theme
                .parse::<ThemeMode>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        save_config(&config)?;
        println!("Settings updated successfully.");

        Ok(())
    }
}

impl SettingsResetArgs {
    /// Execute reset command
    pub fn execute(&self) -> CliResult<()> {
        let mut config = load_config().unwrap_or_else(|e| {
            tracing::warn!("{e}; resetting every setting to its default");
            Config::default()
        });
        config.colors.reset();
        save_config(&config)?;
        println!("Colors restored to defaults.");
        Ok(())
    }
}

/// Output settings in JSON format
fn output_json(config: &Config, saved: bool) -> CliResult<()> {
    let colors = &config.colors;
    let output = SettingsOutput {
        colors: ColorsOutput {
            light_bg: &colors.light_bg,
            light_text: &colors.light_text,
            dark_bg: &colors.dark_bg,
            dark_text: &colors.dark_text,
        },
        ui: UiOutput {
            theme: config.ui.theme_mode.as_str(),
        },
        saved,
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize settings to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output settings in human-readable format
fn output_human_readable(config: &Config, saved: bool) {
    let title = format!("{APP_NAME} Settings");
    println!("{title}");
    println!("{}", "=".repeat(title.chars().count()));
    println!();

    println!("Colors:");
    for field in ColorField::ALL {
        println!(
            "  {:<11} {:<10} {}",
            field.key(),
            config.colors.get(field),
            field.description()
        );
    }
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", config.ui.theme_mode.as_str());
    println!();

    if !saved {
        println!("(defaults, no settings file yet)");
    }
}
