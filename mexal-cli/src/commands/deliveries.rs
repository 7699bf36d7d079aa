//! Last delivery date commands.

use mexal_core::config::MexalConfig;
use mexal_core::error::MexalResult;

use crate::OutputFormat;

pub async fn run(config: &MexalConfig, format: OutputFormat) -> MexalResult<()> {
    let client = super::create_client(config)?;

    let Some(dates) = client.get_last_delivery_dates().await else {
        super::absent("delivery dates");
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&dates).unwrap_or_default());
        }
        OutputFormat::Text => {
            let mut table = super::new_table(vec!["Customer", "Last delivery"]);
            for (code, date) in &dates {
                table.add_row(vec![code.clone(), date.clone()]);
            }
            println!("{table}");
            println!("\n{} customer(s)", dates.len());
        }
    }

    Ok(())
}
