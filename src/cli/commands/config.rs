use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if !*print_config && !*edit_config {
            warning("Nothing to do: use --print or --edit.");
            return Ok(());
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            info(format!("Current configuration ({}):", path.display()));
            println!("{}", ConfigLogic::render(cfg)?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !path.exists() {
                cfg.save_to(path)?;
                info(format!("Created {}", path.display()));
            }
            let used = ConfigLogic::edit(path, editor.as_deref())?;
            success(format!("Configuration file edited successfully using '{}'", used));
        }
    }

    Ok(())
}
