//! Statistical category commands.

use std::collections::BTreeMap;

use mexal_core::config::MexalConfig;
use mexal_core::error::MexalResult;

use crate::OutputFormat;

pub async fn run(config: &MexalConfig, format: OutputFormat) -> MexalResult<()> {
    let client = super::create_client(config)?;

    let Some(categories) = client.get_all_categories().await else {
        super::absent("categories");
    };

    print_categories(&categories, format);
    Ok(())
}

fn print_categories(categories: &BTreeMap<String, String>, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(categories).unwrap_or_default()
            );
        }
        OutputFormat::Text => {
            let mut table = super::new_table(vec!["Id", "Description"]);
            for (id, description) in categories {
                table.add_row(vec![id.clone(), description.clone()]);
            }
            println!("{table}");
            println!("\n{} categories", categories.len());
        }
    }
}
