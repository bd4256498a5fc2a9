use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Effective configuration rendered as YAML.
    pub fn render(cfg: &Config) -> AppResult<String> {
        serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigSave)
    }

    /// Editor from `$EDITOR`, then `$VISUAL`, then the platform default.
    pub fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    /// Open `path` in `editor` (or the default one). When the requested
    /// editor fails, the default editor is tried once more.
    /// Returns the editor that succeeded.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<String> {
        let default_editor = Self::default_editor();
        let requested = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        if Self::launch(&requested, path) {
            return Ok(requested);
        }
        if requested != default_editor {
            tracing::warn!(editor = %requested, fallback = %default_editor, "editor failed");
            if Self::launch(&default_editor, path) {
                return Ok(default_editor);
            }
        }
        Err(AppError::Config(format!(
            "failed to edit '{}' with '{}'",
            path.display(),
            requested
        )))
    }

    fn launch(editor: &str, path: &Path) -> bool {
        Command::new(editor)
            .arg(path)
            .status()
            .is_ok_and(|s| s.success())
    }
}
