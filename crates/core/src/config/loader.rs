//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result};
use std::path::Path;

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed and validated settings
    pub schema: ConfigSchema,
    /// File the settings came from, if any
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit path must exist; otherwise the standard locations are
    /// searched and defaults are used if none is found.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !Path::new(p).exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_string()),
            None => find_config_file(),
        };

        let schema = if let Some(ref p) = config_path {
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };
        schema.validate()?;

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<String> {
    let candidates = [".beanlink.toml", "beanlink.toml", ".config/beanlink.toml"];

    candidates
        .into_iter()
        .find(|candidate| Path::new(candidate).exists())
        .map(String::from)
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &str) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::from(e).with_context(format!("Reading config file {}", path)))?;

    toml::from_str(&content)
        .map_err(|e| Error::from(e).with_context(format!("Parsing config file {}", path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.schema.webhook.max_skew_seconds, 300);
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[digital_link]\nbase = \"https://trace.beanlink.coffee\"").unwrap();

        let config = Config::load(Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(config.schema.digital_link.base, "https://trace.beanlink.coffee");
        assert!(config.path.is_some());
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::load(Some("/nonexistent/beanlink.toml")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[webhook\nmax_skew_seconds = ").unwrap();

        let err = Config::load(Some(file.path().to_str().unwrap())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
        assert!(err.context.is_some());
    }

    #[test]
    fn test_invalid_value_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[webhook]\nsecret_length = 0").unwrap();

        let err = Config::load(Some(file.path().to_str().unwrap())).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidConfigValue);
    }
}
