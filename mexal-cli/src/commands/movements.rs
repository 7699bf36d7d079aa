//! Warehouse movement commands.

use clap::Subcommand;

use mexal_core::config::MexalConfig;
use mexal_core::error::MexalResult;

use crate::OutputFormat;

#[derive(Subcommand)]
pub enum MovementsAction {
    /// List movements for a single fiscal year.
    List {
        /// Fiscal year, e.g. 2024.
        #[arg(short, long)]
        year: String,
        /// Comma-separated field names to fetch (default: all fields).
        #[arg(short = 'F', long, value_delimiter = ',')]
        fields: Vec<String>,
    },
    /// List movements across every recorded fiscal year.
    All {
        /// Comma-separated field names to fetch (default: all fields).
        #[arg(short = 'F', long, value_delimiter = ',')]
        fields: Vec<String>,
    },
}

pub async fn run(
    config: &MexalConfig,
    action: MovementsAction,
    format: OutputFormat,
) -> MexalResult<()> {
    let client = super::create_client(config)?;

    match action {
        MovementsAction::List { year, fields } => {
            let Some(movements) = client.get_warehouse_movements(&year, &fields).await else {
                super::absent("movements");
            };
            super::print_records(&movements, format);
        }
        MovementsAction::All { fields } => {
            let Some(movements) = client.get_all_warehouse_movements(&fields).await else {
                super::absent("movements");
            };
            super::print_records(&movements, format);
        }
    }

    Ok(())
}
