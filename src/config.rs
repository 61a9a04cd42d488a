use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const CONFIG_PATH_ENV: &str = "ROBUSTCAR_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the JSON array of records is written. Overwritten on every run.
    pub output_path: PathBuf,
    /// Origin prepended to the site-relative detail paths.
    pub base_url: String,
    /// How many records the report prints as examples.
    pub sample_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("robustcar-vehicles.json"),
            base_url: "https://robustcar.com.br".to_string(),
            sample_size: 3,
        }
    }
}

impl AppConfig {
    /// Falls back to the defaults when no file exists at `path`.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            load_config(path)
        } else {
            Ok(Self::default())
        }
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let config: AppConfig = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(dir.path().join("absent.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "output_path": "out/vehicles.json" }"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.output_path, PathBuf::from("out/vehicles.json"));
        assert_eq!(config.base_url, "https://robustcar.com.br");
        assert_eq!(config.sample_size, 3);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::load_or_default(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
