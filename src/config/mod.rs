use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_link_base")]
    pub link_base: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Directory used when `render --file` gets a relative path.
    /// Empty means "resolve against the current directory".
    #[serde(default)]
    pub default_output: String,
}

fn default_endpoint() -> String {
    "https://query.wikidata.org/sparql".to_string()
}
fn default_link_base() -> String {
    "https://www.acmi.net.au/".to_string()
}
fn default_user_agent() -> String {
    format!(
        "biotimeline/{} (https://github.com/umpire274/biotimeline)",
        env!("CARGO_PKG_VERSION")
    )
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            link_base: default_link_base(),
            user_agent: default_user_agent(),
            default_output: String::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("biotimeline")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".biotimeline")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("biotimeline.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A file that fails to parse falls back to defaults with a warning
    /// rather than aborting the run.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!(
                        "Failed to parse {} ({}), using defaults",
                        path.display(),
                        e
                    ));
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Write this configuration to the config file.
    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize the configuration directory and file with defaults.
    /// An existing file is left untouched.
    pub fn init_all() -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        if !path.exists() {
            let config = Config::default();
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("serialize error: {}", e)))?;
            let mut file = fs::File::create(&path)?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(path)
    }

    /// Report configuration keys missing from the file on disk.
    pub fn missing_keys() -> AppResult<Vec<String>> {
        let path = Self::config_file();
        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;

        let yaml: serde_yaml::Value =
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)?;

        let mut missing = Vec::new();
        if let Some(map) = yaml.as_mapping() {
            for key in ["endpoint", "link_base", "user_agent", "default_output"] {
                if !map.contains_key(&serde_yaml::Value::String(key.to_string())) {
                    missing.push(key.to_string());
                }
            }
        }

        Ok(missing)
    }

    /// Rewrite the file with defaults filled in for any missing key.
    /// Values already present are preserved.
    pub fn repair() -> AppResult<Vec<String>> {
        let missing = Self::missing_keys()?;
        if !missing.is_empty() {
            let merged = Self::load();
            merged.save()?;
        }
        Ok(missing)
    }
}
