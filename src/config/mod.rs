use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Encoding of the input files (and of a verbatim header file).
    #[serde(default = "default_encoding")]
    pub encoding: String,
    /// Unset means "ask every run".
    #[serde(default)]
    pub team_mode: Option<bool>,
    /// Contributor used for filtering in individual mode.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub line_ending: LineEnding,
    #[serde(default)]
    pub header: HeaderConfig,
}

/// Values of the default header block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub name: String,
    pub program: String,
    pub language: String,
    pub instructor: String,
    pub actual_added_lines: u32,
    pub actual_base_lines: u32,
    pub actual_modified_lines: u32,
    pub actual_removed_lines: u32,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            name: placeholder(),
            program: placeholder(),
            language: placeholder(),
            instructor: placeholder(),
            actual_added_lines: 0,
            actual_base_lines: 0,
            actual_modified_lines: 0,
            actual_removed_lines: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Native,
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Native if cfg!(windows) => "\r\n",
            LineEnding::Native | LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

fn default_encoding() -> String {
    "utf-8".to_string()
}

fn placeholder() -> String {
    "_".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            encoding: default_encoding(),
            team_mode: None,
            name: None,
            line_ending: LineEnding::default(),
            header: HeaderConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".psplog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("psplog.conf")
    }

    /// Load configuration from `path`, or return defaults if the file does
    /// not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write this configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }
}
