//! Configuration for the scrub controller and the headless demo.

use std::path::Path;

use serde::Deserialize;

use crate::core::time::Seconds;
use crate::error::ConfigError;

/// Controller behaviour around the player.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrubConfig {
    /// Start playing as soon as the player reports it is ready
    pub autoplay_on_ready: bool,
    /// Restart from the beginning when playback reaches the end
    pub looping: bool,
    pub simulation: SimulationConfig,
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            autoplay_on_ready: true,
            looping: true,
            simulation: SimulationConfig::default(),
        }
    }
}

/// Settings for the simulated player driven by the demo binary
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Media duration reported once metadata loads
    pub duration_secs: Seconds,
    /// Ticks of the demo loop before metadata loads; the duration is
    /// unknown until then
    pub load_after_ticks: u32,
    /// Interval between player time ticks (milliseconds)
    pub tick_interval_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            duration_secs: 120.0,
            load_after_ticks: 2,
            tick_interval_ms: 250,
        }
    }
}

impl ScrubConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: ScrubConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "Loaded scrub config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "simulation.tick_interval_ms must be greater than 0".to_string(),
            ));
        }
        let duration = self.simulation.duration_secs;
        if !duration.is_finite() || duration <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "simulation.duration_secs must be a positive number, got {duration}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ScrubConfig::default();
        assert!(config.autoplay_on_ready);
        assert!(config.looping);
        assert_eq!(config.simulation.duration_secs, 120.0);
        assert_eq!(config.simulation.load_after_ticks, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = ScrubConfig::from_toml_str("").unwrap();
        assert_eq!(config, ScrubConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = ScrubConfig::from_toml_str(
            r#"
            looping = false

            [simulation]
            tick_interval_ms = 16
            "#,
        )
        .unwrap();
        assert!(!config.looping);
        assert!(config.autoplay_on_ready);
        assert_eq!(config.simulation.tick_interval_ms, 16);
        assert_eq!(config.simulation.duration_secs, 120.0);
    }

    #[test]
    fn test_zero_tick_interval_rejected() {
        let err = ScrubConfig::from_toml_str("[simulation]\ntick_interval_ms = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_non_positive_duration_rejected() {
        let err = ScrubConfig::from_toml_str("[simulation]\nduration_secs = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = ScrubConfig::from_toml_str("looping = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "autoplay_on_ready = false").unwrap();
        writeln!(file, "[simulation]").unwrap();
        writeln!(file, "duration_secs = 42.5").unwrap();

        let config = ScrubConfig::load(file.path()).unwrap();
        assert!(!config.autoplay_on_ready);
        assert_eq!(config.simulation.duration_secs, 42.5);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ScrubConfig::load(Path::new("/nonexistent/scrubsync.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
