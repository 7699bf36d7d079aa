//! Customer commands.

use clap::Subcommand;

use mexal_core::config::MexalConfig;
use mexal_core::error::MexalResult;

use crate::OutputFormat;

#[derive(Subcommand)]
pub enum CustomersAction {
    /// List customers.
    List {
        /// Comma-separated field names to fetch (default: all fields).
        #[arg(short = 'F', long, value_delimiter = ',')]
        fields: Vec<String>,
        /// Include accounts marked as pre-deleted.
        #[arg(long)]
        include_predeleted: bool,
    },
    /// Show the field descriptors exposed by the customer resource.
    Fields,
    /// Fetch a single customer by Mexal account code.
    Get {
        /// Mexal account code.
        code: String,
        /// Comma-separated field names to fetch (default: all fields).
        #[arg(short = 'F', long, value_delimiter = ',')]
        fields: Vec<String>,
    },
}

pub async fn run(
    config: &MexalConfig,
    action: CustomersAction,
    format: OutputFormat,
) -> MexalResult<()> {
    let client = super::create_client(config)?;

    match action {
        CustomersAction::List {
            fields,
            include_predeleted,
        } => {
            let Some(customers) = client.get_all_customers(&fields, include_predeleted).await
            else {
                super::absent("customers");
            };
            super::print_records(&customers, format);
        }
        CustomersAction::Fields => {
            let Some(fields) = client.get_all_customer_fields().await else {
                super::absent("customer fields");
            };
            super::print_records(&fields, format);
        }
        CustomersAction::Get { code, fields } => {
            let Some(customer) = client.get_customer_by_code(&code, &fields).await else {
                super::absent("customer");
            };
            super::print_records(std::slice::from_ref(&customer), format);
        }
    }

    Ok(())
}
