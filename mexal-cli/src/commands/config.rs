//! Configuration commands.

use clap::Subcommand;
use console::style;

use mexal_core::config::MexalConfig;
use mexal_core::error::{MexalError, MexalResult};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the active configuration (password redacted).
    Show,
    /// Write a configuration template to the default path.
    Init,
    /// Print the default configuration file path.
    Path,
}

pub fn run(config: &MexalConfig, action: ConfigAction) -> MexalResult<()> {
    match action {
        ConfigAction::Show => {
            let mut shown = config.clone();
            if !shown.server.password.is_empty() {
                shown.server.password = "********".into();
            }
            let rendered = toml::to_string_pretty(&shown)
                .map_err(|e| MexalError::Config(format!("failed to render config: {e}")))?;
            println!("{rendered}");
        }
        ConfigAction::Init => {
            let path = MexalConfig::default_config_path()?;
            if path.exists() {
                println!(
                    "  {} config already exists at {}",
                    style("!").yellow().bold(),
                    path.display()
                );
            } else {
                MexalConfig::default().save_to_file(&path)?;
                println!(
                    "  {} wrote config template to {}",
                    style("OK").green().bold(),
                    path.display()
                );
            }
        }
        ConfigAction::Path => {
            println!("{}", MexalConfig::default_config_path()?.display());
        }
    }

    Ok(())
}
