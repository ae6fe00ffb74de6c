//! Runtime configuration
//!
//! Read once at startup from environment variables.

use std::path::PathBuf;

use thiserror::Error;

use crate::units::{normalize_language, UnitSystem};

pub const CATALOG_PATH_VAR: &str = "ANIME_KITCHEN_CATALOG_PATH";
pub const LANGUAGE_VAR: &str = "ANIME_KITCHEN_LANGUAGE";
pub const UNIT_SYSTEM_VAR: &str = "ANIME_KITCHEN_UNIT_SYSTEM";

pub const DEFAULT_LANGUAGE: &str = "en";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid unit system '{0}' (expected 'metric' or 'imperial')")]
    InvalidUnitSystem(String),
}

/// Service configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub catalog_path: PathBuf,
    /// Display language when a request does not name one
    pub language: String,
    /// Unit system when a request does not name one; `None` keeps recipe units
    pub unit_system: Option<UnitSystem>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_path = lookup(CATALOG_PATH_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_catalog_path);

        let language = lookup(LANGUAGE_VAR)
            .map(|l| normalize_language(&l))
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let unit_system = match lookup(UNIT_SYSTEM_VAR) {
            Some(raw) if !raw.trim().is_empty() => Some(
                UnitSystem::from_str(&raw).ok_or(ConfigError::InvalidUnitSystem(raw))?,
            ),
            _ => None,
        };

        Ok(Self {
            catalog_path,
            language,
            unit_system,
        })
    }
}

/// `data/catalog.json` under the project root, found relative to the executable
fn default_catalog_path() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    // Go up from target/release or target/debug to project root
    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(parent) = path.parent() {
            if let Some(grandparent) = parent.parent() {
                path = grandparent.to_path_buf();
            }
        }
    }

    path.push("data");
    path.push("catalog.json");
    path
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.language, "en");
        assert_eq!(config.unit_system, None);
        assert!(config.catalog_path.ends_with("data/catalog.json"));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (CATALOG_PATH_VAR, "/srv/kitchen/catalog.json"),
            (LANGUAGE_VAR, "pt-BR"),
            (UNIT_SYSTEM_VAR, "Imperial"),
        ])
        .unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("/srv/kitchen/catalog.json"));
        assert_eq!(config.language, "pt");
        assert_eq!(config.unit_system, Some(UnitSystem::Imperial));
    }

    #[test]
    fn test_blank_unit_system_means_none() {
        let config = config_from(&[(UNIT_SYSTEM_VAR, " ")]).unwrap();
        assert_eq!(config.unit_system, None);
    }

    #[test]
    fn test_invalid_unit_system() {
        let err = config_from(&[(UNIT_SYSTEM_VAR, "cubits")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUnitSystem(ref s) if s == "cubits"));
    }
}
