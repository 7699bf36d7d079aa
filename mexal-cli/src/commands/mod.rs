//! CLI command implementations.

pub mod categories;
pub mod config;
pub mod customers;
pub mod deliveries;
pub mod movements;
pub mod referees;

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use console::style;

use mexal_api::{MexalClient, Record};
use mexal_core::config::MexalConfig;
use mexal_core::error::{MexalError, MexalResult};

use crate::OutputFormat;

/// Helper to create an API client from configuration.
pub fn create_client(config: &MexalConfig) -> MexalResult<MexalClient> {
    if !config.is_configured() {
        return Err(MexalError::MissingConfig(
            "domain, username, password, company, and company_year must all be set; \
             run `mexal config init` and edit the file"
                .into(),
        ));
    }
    MexalClient::new(&config.server)
}

/// Build a table with the standard presets.
pub fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

/// Print records either as a dynamic-column table or as pretty JSON.
pub fn print_records(records: &[Record], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(records).unwrap_or_default()
            );
        }
        OutputFormat::Text => {
            if records.is_empty() {
                println!("No records.");
                return;
            }

            // Column set is the union of the record keys.
            let mut columns: Vec<&str> = Vec::new();
            for record in records {
                for key in record.keys() {
                    if !columns.contains(&key.as_str()) {
                        columns.push(key);
                    }
                }
            }

            let mut table = new_table(columns.clone());
            for record in records {
                table.add_row(
                    columns
                        .iter()
                        .map(|c| record.get(*c).cloned().unwrap_or_else(|| "-".into()))
                        .collect::<Vec<_>>(),
                );
            }
            println!("{table}");
            println!("\n{} record(s)", records.len());
        }
    }
}

/// Print a styled no-data notice and exit nonzero.
///
/// When the absence came from a failure, the accessor has already logged
/// the cause.
pub fn absent(what: &str) -> ! {
    eprintln!("  {} no {what} returned", style("!").yellow().bold());
    std::process::exit(1);
}
