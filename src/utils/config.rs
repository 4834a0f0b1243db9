use crate::algorithms::SectionContinuity;
use crate::core::{DEFAULT_SCALING_FACTOR, DESTINATION_MARKER_SIZE};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Overlay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Multiplier from degree deltas to local units. Larger values spread
    /// the route further across the scene.
    pub scaling_factor: f32,
    /// Whether a section starts where the previous one ended
    pub section_continuity: SectionContinuity,
    /// Width and height of the destination marker (local units)
    pub destination_marker_size: f32,
    /// Put the user's location in front of a decoded directions route
    pub prepend_origin: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            scaling_factor: DEFAULT_SCALING_FACTOR,
            section_continuity: SectionContinuity::Continuous,
            destination_marker_size: DESTINATION_MARKER_SIZE,
            prepend_origin: true,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter { parameter: String, value: String, reason: String },
    #[error("I/O error: {message}")]
    IoError { message: String },
    #[error("serialization error: {message}")]
    SerializationError { message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration validation result
#[derive(Debug)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ConfigError>,
    pub warnings: Vec<String>,
}

/// Holds the active configuration and its backing file
pub struct ConfigurationManager {
    config: OverlayConfig,
    config_file_path: Option<String>,
    is_modified: bool,
}

impl Default for ConfigurationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationManager {
    pub fn new() -> Self {
        Self {
            config: OverlayConfig::default(),
            config_file_path: None,
            is_modified: false,
        }
    }

    /// Create configuration manager and load from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let mut manager = Self::new();
        manager.load_from_file(path)?;
        Ok(manager)
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Replace the configuration after validating it
    pub fn update_config(&mut self, config: OverlayConfig) -> ConfigResult<()> {
        Self::apply_validation(Self::validate_config(&config))?;
        self.config = config;
        self.is_modified = true;
        Ok(())
    }

    /// Load configuration from a JSON file. Missing fields take defaults.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> ConfigResult<()> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            message: format!("failed to read config file '{}': {}", path_str, e),
        })?;

        let config: OverlayConfig = serde_json::from_str(&content).map_err(|e| ConfigError::SerializationError {
            message: format!("failed to parse config file '{}': {}", path_str, e),
        })?;

        Self::apply_validation(Self::validate_config(&config))?;

        info!("loaded overlay configuration from {}", path_str);
        debug!("{:?}", config);
        self.config = config;
        self.config_file_path = Some(path_str);
        self.is_modified = false;
        Ok(())
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> ConfigResult<()> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = serde_json::to_string_pretty(&self.config).map_err(|e| ConfigError::SerializationError {
            message: format!("failed to serialize config: {}", e),
        })?;

        fs::write(&path, content).map_err(|e| ConfigError::IoError {
            message: format!("failed to write config file '{}': {}", path_str, e),
        })?;

        self.config_file_path = Some(path_str);
        self.is_modified = false;
        Ok(())
    }

    /// Save to the file the configuration was last loaded from or saved to
    pub fn save(&mut self) -> ConfigResult<()> {
        match self.config_file_path.clone() {
            Some(path) => self.save_to_file(path),
            None => Err(ConfigError::IoError {
                message: "no file path set for saving configuration".to_string(),
            }),
        }
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Change the scaling factor, returning the previous one.
    ///
    /// Anything mapped with the old factor must be recomputed.
    pub fn set_scaling_factor(&mut self, scaling_factor: f32) -> ConfigResult<f32> {
        let old_value = self.config.scaling_factor;
        Self::check_positive("scaling_factor", scaling_factor)?;

        self.config.scaling_factor = scaling_factor;
        self.is_modified = true;
        Ok(old_value)
    }

    pub fn set_section_continuity(&mut self, continuity: SectionContinuity) -> SectionContinuity {
        let old_value = self.config.section_continuity;
        self.config.section_continuity = continuity;
        self.is_modified = true;
        old_value
    }

    pub fn set_destination_marker_size(&mut self, size: f32) -> ConfigResult<f32> {
        let old_value = self.config.destination_marker_size;
        Self::check_positive("destination_marker_size", size)?;

        self.config.destination_marker_size = size;
        self.is_modified = true;
        Ok(old_value)
    }

    pub fn validate_config(config: &OverlayConfig) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if let Err(e) = Self::check_positive("scaling_factor", config.scaling_factor) {
            errors.push(e);
        } else if config.scaling_factor < 1000.0 {
            warnings.push("small scaling factor; a walking route will collapse to a few units".to_string());
        } else if config.scaling_factor > 10_000_000.0 {
            warnings.push("very large scaling factor; points may exceed f32 precision".to_string());
        }

        if let Err(e) = Self::check_positive("destination_marker_size", config.destination_marker_size) {
            errors.push(e);
        }

        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    fn apply_validation(validation: ValidationResult) -> ConfigResult<()> {
        for warning in &validation.warnings {
            warn!("{}", warning);
        }
        match validation.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn check_positive(parameter: &str, value: f32) -> ConfigResult<()> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: parameter.to_string(),
                value: value.to_string(),
                reason: "must be a finite positive number".to_string(),
            });
        }
        Ok(())
    }
}
