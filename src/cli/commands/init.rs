use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command: write the default configuration file.
pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        if path.exists() && !*force {
            warning(format!(
                "Configuration file already exists: {} (use --force to overwrite)",
                path.display()
            ));
            return Ok(());
        }

        Config::default().save_to(path)?;
        success(format!("Configuration written to {}", path.display()));
    }
    Ok(())
}
