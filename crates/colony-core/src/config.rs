//! Configuration loading and typed config structures for the colony
//! simulation.
//!
//! The canonical configuration lives in `colony-config.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure, and provides a loader that reads and validates the file.
//! Every field has a default, so an empty file is a valid configuration.

use std::path::Path;

use serde::Deserialize;

use crate::params::{ParameterError, SimulationParameters};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A simulation parameter is out of range.
    #[error("invalid simulation parameters: {source}")]
    Parameter {
        /// The underlying parameter error.
        #[from]
        source: ParameterError,
    },

    /// A geometry value is out of range.
    #[error("invalid geometry: {reason}")]
    Geometry {
        /// Explanation of what is wrong with the geometry.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `colony-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// World-level settings (random seed).
    #[serde(default)]
    pub world: WorldConfig,

    /// Parameters used for the first run and for every parameterless reset.
    #[serde(default)]
    pub parameters: SimulationParameters,

    /// Fixed distances that shape agent behavior.
    #[serde(default)]
    pub geometry: GeometryConfig,

    /// Observer HTTP server settings.
    #[serde(default)]
    pub observer: ObserverConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or a
    /// validation error if a parameter or geometry value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or a
    /// validation error if a parameter or geometry value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check parameters and geometry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parameter`] or [`ConfigError::Geometry`] for
    /// the first value that is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parameters.validate()?;
        self.geometry.validate()
    }

    /// Override settings with environment variables when set.
    ///
    /// - `PORT` overrides `observer.port`
    pub fn apply_env_overrides(&mut self) {
        self.observer.apply_env_overrides();
    }
}

/// World-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Random seed for reproducibility.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

/// Distances that shape agent behavior.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GeometryConfig {
    /// Agents closer than this to the hive center are at the hive.
    #[serde(default = "default_hive_radius")]
    pub hive_radius: f64,

    /// Display size of the queen marker.
    #[serde(default = "default_queen_size")]
    pub queen_size: f64,

    /// Deposits are placed at least this far from every field edge.
    #[serde(default = "default_deposit_margin")]
    pub deposit_margin: f64,

    /// An exploring scout this close to its target picks a new one.
    #[serde(default = "default_scout_arrival_radius")]
    pub scout_arrival_radius: f64,

    /// A scout detects deposits closer than this.
    #[serde(default = "default_scout_detection_radius")]
    pub scout_detection_radius: f64,

    /// A forager this close to its deposit harvests it.
    #[serde(default = "default_forager_arrival_radius")]
    pub forager_arrival_radius: f64,
}

impl GeometryConfig {
    /// Check that every radius is positive and the margin is non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Geometry`] naming the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let radii = [
            ("hive_radius", self.hive_radius),
            ("queen_size", self.queen_size),
            ("scout_arrival_radius", self.scout_arrival_radius),
            ("scout_detection_radius", self.scout_detection_radius),
            ("forager_arrival_radius", self.forager_arrival_radius),
        ];
        for (name, value) in radii {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Geometry {
                    reason: format!("{name} must be positive, got {value}"),
                });
            }
        }
        if !self.deposit_margin.is_finite() || self.deposit_margin < 0.0 {
            return Err(ConfigError::Geometry {
                reason: format!(
                    "deposit_margin must not be negative, got {}",
                    self.deposit_margin
                ),
            });
        }
        Ok(())
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            hive_radius: default_hive_radius(),
            queen_size: default_queen_size(),
            deposit_margin: default_deposit_margin(),
            scout_arrival_radius: default_scout_arrival_radius(),
            scout_detection_radius: default_scout_detection_radius(),
            forager_arrival_radius: default_forager_arrival_radius(),
        }
    }
}

/// Observer HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ObserverConfig {
    /// Address to bind.
    #[serde(default = "default_observer_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_observer_port")]
    pub port: u16,
}

impl ObserverConfig {
    /// Override the port with the `PORT` environment variable when it holds
    /// a valid port number.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("PORT") {
            match val.parse() {
                Ok(port) => self.port = port,
                Err(e) => tracing::warn!(value = val, error = %e, "Ignoring unparseable PORT"),
            }
        }
    }
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            host: default_observer_host(),
            port: default_observer_port(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error), used when `RUST_LOG`
    /// is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_seed() -> u64 {
    42
}

const fn default_hive_radius() -> f64 {
    50.0
}

const fn default_queen_size() -> f64 {
    20.0
}

const fn default_deposit_margin() -> f64 {
    100.0
}

const fn default_scout_arrival_radius() -> f64 {
    5.0
}

const fn default_scout_detection_radius() -> f64 {
    30.0
}

const fn default_forager_arrival_radius() -> f64 {
    15.0
}

fn default_observer_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_observer_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.world.seed, 42);
        assert_eq!(config.parameters.scout_count, 3);
        assert_eq!(config.geometry.hive_radius, 50.0);
        assert_eq!(config.observer.port, 5000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
world:
  seed: 123

parameters:
  scout_count: 1
  forager_count: 2
  papers_found: 4
  scout_speed: 1000
  forager_speed: 1000
  field_richness: 10
  paper_analysis_rate: 10
  width: 200
  height: 300

geometry:
  hive_radius: 40
  queen_size: 10
  deposit_margin: 20
  scout_arrival_radius: 2
  scout_detection_radius: 25
  forager_arrival_radius: 12

observer:
  host: "127.0.0.1"
  port: 9090

logging:
  level: "debug"
"#;

        let config = SimulationConfig::parse(yaml).unwrap();
        assert_eq!(config.world.seed, 123);
        assert_eq!(config.parameters.scout_count, 1);
        assert_eq!(config.parameters.deposit_count, 4);
        assert_eq!(config.parameters.harvest_rate, 10.0);
        assert_eq!(config.parameters.height, 300.0);
        assert_eq!(config.geometry.hive_radius, 40.0);
        assert_eq!(config.geometry.forager_arrival_radius, 12.0);
        assert_eq!(config.observer.host, "127.0.0.1");
        assert_eq!(config.observer.port, 9090);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn parse_minimal_yaml() {
        let config = SimulationConfig::parse("world:\n  seed: 7\n").unwrap();

        // Seed is overridden
        assert_eq!(config.world.seed, 7);
        // Everything else uses defaults
        assert_eq!(config.parameters, SimulationParameters::default());
        assert_eq!(config.geometry, GeometryConfig::default());
    }

    #[test]
    fn parse_empty_yaml() {
        let config = SimulationConfig::parse("");
        assert!(config.is_ok());
    }

    #[test]
    fn invalid_parameter_is_rejected() {
        let yaml = "parameters:\n  scout_speed: -1\n";
        let result = SimulationConfig::parse(yaml);
        assert!(matches!(result, Err(ConfigError::Parameter { .. })));
    }

    #[test]
    fn invalid_geometry_is_rejected() {
        let yaml = "geometry:\n  hive_radius: 0\n";
        let result = SimulationConfig::parse(yaml);
        assert!(matches!(result, Err(ConfigError::Geometry { .. })));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let result = SimulationConfig::parse("parameters: [1, 2");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("colony-config.yaml");
        if path.exists() {
            let config = SimulationConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
