//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::TickerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<TickerConfig, ConfigError> {
    let config: TickerConfig = toml::from_str(content).map_err(ConfigError::Parse)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<TickerConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&content)?;

    tracing::debug!(path = %path.display(), timers = config.timers.len(), "Configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
[observability]
log_level = "debug"

[timing]
poll_quantum_ms = 25

[[timers]]
name = "poll-jobs"
interval_ms = 1500

[[timers]]
name = "heartbeat"
interval_ms = 10000
sleep_first = true
"#;

    #[test]
    fn parses_full_config() {
        let config = parse_config(SAMPLE).unwrap();

        assert_eq!(config.observability.log_level, "debug");
        assert_eq!(config.timing.poll_quantum_ms, 25);
        assert_eq!(config.shutdown.grace_secs, 5);
        assert_eq!(config.timers.len(), 2);
        assert_eq!(config.timers[0].name, "poll-jobs");
        assert!(!config.timers[0].sleep_first);
        assert!(config.timers[1].sleep_first);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.timers.len(), 1);
        assert_eq!(config.timers[0].name, "heartbeat");
        assert_eq!(config.timing.poll_quantum_ms, 50);
    }

    #[test]
    fn rejects_invalid_values() {
        let err = parse_config("[[timers]]\nname = \"zero\"\ninterval_ms = 0\n").unwrap_err();
        match err {
            ConfigError::Validation(errors) => {
                assert_eq!(errors, vec![ValidationError::ZeroInterval("zero".into())]);
            }
            other => panic!("expected validation error, got {}", other),
        }
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = parse_config("[[timers]\nname=").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.timers.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn validation_display_joins_errors() {
        let err = ConfigError::Validation(vec![
            ValidationError::ZeroPollQuantum,
            ValidationError::ZeroGracePeriod,
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: timing.poll_quantum_ms must be greater than zero, \
             shutdown.grace_secs must be greater than zero"
        );
    }
}
