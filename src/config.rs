/// GLIDE Project
/// `File` config.rs
/// `Description` Simulation configuration module
/// `Author` TioT2
/// `Last changed` 18.10.2026

use serde::Deserialize;

/// Simulation and view configuration.
///
/// Velocities and accelerations are per simulation step, one step per rendered frame.
/// Angles are degrees.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Agent collision radius
    pub radius: f32,
    /// Contact offset along contact normal
    pub epsilon: f32,
    /// Nested slide passes per resolution
    pub max_slide_depth: u32,

    /// Velocity divisor applied every step
    pub damping: f32,
    /// Walk acceleration
    pub move_acceleration: f32,
    /// Descend key acceleration
    pub descend_acceleration: f32,
    /// Jump acceleration, applied once while grounded
    pub jump_acceleration: f32,
    /// Constant downward displacement added every step
    pub gravity_bias: f32,

    /// Ground probe length
    pub probe_distance: f32,
    /// Probe drop shorter than `probe_distance - probe_tolerance` means ground
    pub probe_tolerance: f32,

    /// Degrees per mouse motion unit
    pub mouse_sensitivity: f32,
    pub fov_degrees: f32,
    pub z_near: f32,
    pub z_far: f32,
} // struct SimulationConfig

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            radius: 0.1,
            epsilon: 0.001,
            max_slide_depth: 4,

            damping: 10.0,
            move_acceleration: 0.6,
            descend_acceleration: 0.6,
            jump_acceleration: 4.0,
            gravity_bias: 0.03,

            probe_distance: 0.05,
            probe_tolerance: 0.001,

            mouse_sensitivity: 0.15,
            fov_degrees: 100.0,
            z_near: 0.01,
            z_far: 100.0,
        }
    }
}

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file reading error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parsing error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config value: {0}")]
    Invalid(&'static str),
} // enum ConfigError

impl SimulationConfig {
    /// Configuration from TOML text parsing function
    /// * `source` - TOML text, missing keys take defaults
    /// * Returns validated configuration
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;

        config.validate()?;
        Ok(config)
    } // fn from_toml

    /// Configuration file loading function
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        Self::from_toml(&std::fs::read_to_string(path)?)
    } // fn load

    /// Value sanity checking function
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.radius > 0.0) {
            return Err(ConfigError::Invalid("radius must be positive"));
        }
        if !(self.epsilon > 0.0 && self.epsilon < self.radius) {
            return Err(ConfigError::Invalid("epsilon must be positive and less than radius"));
        }
        if !(self.damping >= 1.0) {
            return Err(ConfigError::Invalid("damping must be at least 1"));
        }
        if !(self.probe_distance > self.probe_tolerance && self.probe_tolerance >= 0.0) {
            return Err(ConfigError::Invalid("probe distance must exceed probe tolerance"));
        }
        if !(self.z_near > 0.0 && self.z_far > self.z_near) {
            return Err(ConfigError::Invalid("clip planes must satisfy 0 < z_near < z_far"));
        }

        Ok(())
    } // fn validate
} // impl SimulationConfig


// file config.rs
