use crate::errors::{AppError, AppResult};
use crate::formatters::FormatterKind;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_formatter")]
    pub default_formatter: String,
    #[serde(default = "default_confirm_kill")]
    pub confirm_kill: bool,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_formatter() -> String {
    FormatterKind::default().as_str().to_string()
}
fn default_confirm_kill() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_formatter: default_formatter(),
            confirm_kill: default_confirm_kill(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimesheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimesheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Missing fields fall back to their defaults.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Database path with `~/` expanded.
    pub fn database_path(&self) -> String {
        expand_tilde(&self.database).to_string_lossy().to_string()
    }

    pub fn formatter(&self) -> AppResult<FormatterKind> {
        FormatterKind::parse(&self.default_formatter)
    }

    /// Write this configuration to the config file, creating the directory.
    pub fn save(&self) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir).map_err(|_| AppError::ConfigSave)?;

        let yaml = self.to_yaml()?;
        let path = Self::config_file();
        let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(path)
    }
}

/// Expand a leading `~` to the home directory.
fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix('~'), dirs::home_dir()) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) if rest.starts_with('/') => home.join(&rest[1..]),
        _ => PathBuf::from(path),
    }
}
