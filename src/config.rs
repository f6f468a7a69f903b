//! Run Configuration
//!
//! Defaults mirror the conventional snapshot and credential file names. An
//! optional TOML file and `REMEXT_`-prefixed environment variables override
//! them.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemextConfig {
    /// SQLite snapshot of the remote filesystem's metadata
    #[serde(default = "default_store_file")]
    pub store_file: PathBuf,

    /// File holding the opaque session cookie for the remote client
    #[serde(default = "default_cookies_file")]
    pub cookies_file: PathBuf,

    /// Where the id -> path listing is written
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    /// Remote rename endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_store_file() -> PathBuf {
    PathBuf::from("115-115104115.db")
}

fn default_cookies_file() -> PathBuf {
    PathBuf::from("115-cookies.txt")
}

fn default_output_file() -> PathBuf {
    PathBuf::from("file_paths.txt")
}

fn default_endpoint() -> String {
    "https://webapi.115.com/files/rename".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RemextConfig {
    fn default() -> Self {
        Self {
            store_file: default_store_file(),
            cookies_file: default_cookies_file(),
            output_file: default_output_file(),
            endpoint: default_endpoint(),
            log_level: default_log_level(),
        }
    }
}

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with precedence: defaults, optional `remext.toml`
    /// (or an explicit file), then `REMEXT_` environment variables.
    pub fn load(file: Option<&Path>) -> Result<RemextConfig, ConfigError> {
        let mut builder = Config::builder();
        builder = match file {
            Some(path) => builder.add_source(File::from(path.to_path_buf())),
            None => builder.add_source(File::with_name("remext").required(false)),
        };
        builder = builder.add_source(Environment::with_prefix("REMEXT"));
        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_conventional_file_names() {
        let config = RemextConfig::default();
        assert_eq!(config.store_file, PathBuf::from("115-115104115.db"));
        assert_eq!(config.cookies_file, PathBuf::from("115-cookies.txt"));
        assert_eq!(config.output_file, PathBuf::from("file_paths.txt"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn file_values_override_defaults() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("remext.toml");
        fs::write(
            &config_path,
            "store_file = \"snapshot.db\"\nlog_level = \"debug\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load(Some(&config_path)).unwrap();
        assert_eq!(config.store_file, PathBuf::from("snapshot.db"));
        assert_eq!(config.log_level, "debug");
        // untouched fields keep their defaults
        assert_eq!(config.output_file, PathBuf::from("file_paths.txt"));
    }

    #[test]
    fn missing_explicit_config_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("absent.toml");
        assert!(ConfigLoader::load(Some(&missing)).is_err());
    }
}
