use std::path::Path;

use log::warn;

use crate::error::ConfigError;
use crate::game::{DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_WIN_LENGTH};

/// Round dimensions and win length, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    pub rows: usize,
    pub columns: usize,
    pub win_length: usize,
}

impl Default for RoundConfig {
    fn default() -> Self {
        RoundConfig {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            win_length: DEFAULT_WIN_LENGTH,
        }
    }
}

impl RoundConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: RoundConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::Validation("rows must be > 0".into()));
        }
        if self.columns == 0 {
            return Err(ConfigError::Validation("columns must be > 0".into()));
        }
        // A line longer than the board is allowed; such rounds can only tie.
        if self.win_length == 0 {
            return Err(ConfigError::Validation("win_length must be > 0".into()));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&RoundConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = RoundConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!((config.rows, config.columns, config.win_length), (6, 7, 4));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: RoundConfig = toml::from_str("win_length = 5").unwrap();
        assert_eq!(config.win_length, 5);
        assert_eq!(config.rows, 6);
        assert_eq!(config.columns, 7);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: RoundConfig = toml::from_str("").unwrap();
        assert_eq!(config, RoundConfig::default());
    }

    #[test]
    fn test_validation_rejects_zero_dimensions() {
        let mut config = RoundConfig::default();
        config.rows = 0;
        assert!(config.validate().is_err());

        let mut config = RoundConfig::default();
        config.columns = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_win_length() {
        let mut config = RoundConfig::default();
        config.win_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_allows_unreachable_win_length() {
        let config = RoundConfig {
            rows: 2,
            columns: 2,
            win_length: 3,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = RoundConfig::load_or_default(Path::new("nonexistent_round.toml")).unwrap();
        assert_eq!(config, RoundConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("round.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
rows = 8
columns = 9
"#
        )
        .unwrap();

        let config = RoundConfig::load(&path).unwrap();
        assert_eq!(config.rows, 8);
        assert_eq!(config.columns, 9);
        assert_eq!(config.win_length, 4);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("round.toml");
        std::fs::write(&path, "rows = 0\n").unwrap();

        let err = RoundConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = RoundConfig::default_toml();
        let config: RoundConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, RoundConfig::default());
    }
}
