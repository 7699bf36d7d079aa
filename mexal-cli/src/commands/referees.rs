//! Customer referee commands.

use mexal_core::config::MexalConfig;
use mexal_core::error::MexalResult;

use crate::OutputFormat;

pub async fn run(config: &MexalConfig, fields: &[String], format: OutputFormat) -> MexalResult<()> {
    let client = super::create_client(config)?;

    let Some(referees) = client.get_all_referees(fields).await else {
        super::absent("referees");
    };

    super::print_records(&referees, format);
    Ok(())
}
