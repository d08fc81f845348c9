// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing::level_filters::LevelFilter;

use crate::error::ConfigError;
use crate::performance::Timeframe;
use crate::table::PAGE_SIZE_OPTIONS;
use crate::table::query::DEFAULT_PAGE_SIZE;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Folioview", "folioview"));

pub const CONFIG_ENV: &str = "FOLIOVIEW_CONFIG";
pub const LOG_ENV: &str = "FOLIOVIEW_LOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub default_page_size: usize,
    pub currency_symbol: String,
    pub log_level: String,
    pub performance_timeframe: Timeframe,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_page_size: DEFAULT_PAGE_SIZE,
            currency_symbol: "$".to_string(),
            log_level: "warn".to_string(),
            performance_timeframe: Timeframe::OneYear,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !PAGE_SIZE_OPTIONS.contains(&self.default_page_size) {
            return Err(ConfigError::Invalid(format!(
                "default_page_size must be one of {:?}, got {}",
                PAGE_SIZE_OPTIONS, self.default_page_size
            )));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::Invalid(format!("unknown log_level '{}'", self.log_level)))
    }
}

/// `$FOLIOVIEW_CONFIG`, else `config.json` in the platform config dir.
pub fn config_path() -> Option<PathBuf> {
    if let Ok(p) = env::var(CONFIG_ENV) {
        return Some(PathBuf::from(p));
    }
    ProjectDirs::from(APP.0, APP.1, APP.2).map(|proj| proj.config_dir().join("config.json"))
}

pub fn load() -> Result<Settings, ConfigError> {
    match config_path() {
        Some(path) => load_from(&path),
        None => Ok(Settings::default()),
    }
}

pub fn load_from(path: &Path) -> Result<Settings, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Settings::default());
    }
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: Settings = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let s = load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "default_page_size": 20, "currency_symbol": "€" }"#).unwrap();
        let s = load_from(&path).unwrap();
        assert_eq!(s.default_page_size, 20);
        assert_eq!(s.currency_symbol, "€");
        assert_eq!(s.log_level, "warn");
    }

    #[test]
    fn rejects_unknown_keys_and_bad_page_size() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "theme": "dark" }"#).unwrap();
        assert!(matches!(load_from(&path), Err(ConfigError::Parse { .. })));

        fs::write(&path, r#"{ "default_page_size": 7 }"#).unwrap();
        assert!(matches!(load_from(&path), Err(ConfigError::Invalid(_))));
    }
}
