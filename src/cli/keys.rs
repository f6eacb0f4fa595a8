//! Key name listing and search command.

use crate::cli::common::{CliError, CliResult};
use crate::key_names::{KeyCategory, KeyNameTable, KeyRule};
use clap::Args;
use serde::Serialize;

/// List the recognized key names
#[derive(Debug, Clone, Args)]
pub struct KeysArgs {
    /// Only show keys whose alias or label contains this text
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Only show keys of this category (modifier, system, function,
    /// navigation, arrow, mouse)
    #[arg(short, long, value_name = "CAT")]
    pub category: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct KeyItem {
    category: KeyCategory,
    label: &'static str,
    aliases: &'static [&'static str],
}

#[derive(Debug, Serialize)]
struct KeysResponse {
    keys: Vec<KeyItem>,
    count: usize,
}

impl KeysArgs {
    /// Execute the keys command
    pub fn execute(&self) -> CliResult<()> {
        let category = self
            .category
            .as_deref()
            .map(|id| {
                KeyCategory::from_id(id).ok_or_else(|| {
                    let valid: Vec<_> = KeyCategory::ALL.iter().map(|c| c.id()).collect();
                    CliError::validation(format!(
                        "Unknown category '{id}'. Valid categories: {}",
                        valid.join(", ")
                    ))
                })
            })
            .transpose()?;

        let rules = select_rules(
            KeyNameTable::global(),
            self.query.as_deref().unwrap_or(""),
            category,
        );

        let response = KeysResponse {
            count: rules.len(),
            keys: rules
                .into_iter()
                .map(|rule| KeyItem {
                    category: rule.category,
                    label: rule.label,
                    aliases: rule.aliases,
                })
                .collect(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.count == 0 {
            println!("No matching keys.");
        } else {
            println!("Keys ({}):", response.count);
            println!();
            for key in &response.keys {
                println!(
                    "  {:<12} {:<16} {}",
                    key.category.id(),
                    key.label,
                    key.aliases.join(", ")
                );
            }
        }

        Ok(())
    }
}

/// Applies the query and category filters in search order.
fn select_rules<'a>(
    table: &'a KeyNameTable,
    query: &str,
    category: Option<KeyCategory>,
) -> Vec<&'a KeyRule> {
    table
        .search(query)
        .into_iter()
        .filter(|rule| category.is_none_or(|c| rule.category == c))
        .collect()
}
