use std::fs;
use std::path::Path;

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::ui::prompt;

/// Make `path` ready to receive the report.
///
/// A directory is refused. An existing file is replaced only with `force`
/// or after the user agrees. Missing parent directories are created.
pub(crate) fn prepare_output(path: &Path, force: bool) -> AppResult<()> {
    if path.is_dir() {
        return Err(AppError::Other(format!(
            "'{}' is a directory, not an output file",
            path.display()
        )));
    }

    if path.exists() && !force {
        warning(format!("The file '{}' already exists.", path.display()));
        if !prompt::ask_yes_no("Overwrite? [y/N]: ")? {
            return Err(AppError::Other(
                "Report not written: existing file not overwritten".into(),
            ));
        }
        info("Existing file will be overwritten.");
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
