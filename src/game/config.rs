//! Physics Configuration
//!
//! Tunable movement constants. Defaults reproduce the reference feel at
//! 60 FPS in pixel units (1 unit = 1 screen pixel, +Y down).

use serde::{Serialize, Deserialize};

use crate::error::ConfigError;

/// Dash timing and charge limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashConfig {
    /// How long a dash keeps its velocity (seconds).
    pub duration_secs: f64,

    /// Delay after a dash ends before the next can start (seconds).
    pub cooldown_secs: f64,

    /// Charges restored on landing.
    pub max_dashes: u32,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            duration_secs: 0.1,
            cooldown_secs: 0.2,
            max_dashes: 2,
        }
    }
}

/// Configuration for a physics entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration while airborne (units/second²).
    pub gravity: f32,

    /// Walking displacement rate (units/second).
    pub movement_speed: f32,

    /// Upward speed set by a jump (units/second).
    pub jumping_speed: f32,

    /// Horizontal speed set by a dash (units/second).
    pub dashing_speed: f32,

    /// Airborne jumps restored on landing. The ground jump is free.
    pub max_extra_jumps: u32,

    /// Resting penetration into floors and corner inset of wall probes.
    pub clip: f32,

    /// Dash settings.
    pub dash: DashConfig,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 1000.0,
            movement_speed: 500.0,
            jumping_speed: 700.0,
            dashing_speed: 2000.0,
            max_extra_jumps: 1,
            clip: 1.0,
            dash: DashConfig::default(),
        }
    }
}

impl PhysicsConfig {
    /// Parse a JSON document and validate it.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PhysicsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every value is usable by the integrator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("gravity", self.gravity as f64)?;
        positive("movement_speed", self.movement_speed as f64)?;
        positive("jumping_speed", self.jumping_speed as f64)?;
        positive("dashing_speed", self.dashing_speed as f64)?;
        non_negative("clip", self.clip as f64)?;
        positive("dash.duration_secs", self.dash.duration_secs)?;
        non_negative("dash.cooldown_secs", self.dash.cooldown_secs)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PhysicsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dash.max_dashes, 2);
        assert_eq!(config.max_extra_jumps, 1);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = PhysicsConfig::from_json(r#"{ "gravity": 1500.0, "dash": { "max_dashes": 1 } }"#)
            .unwrap();

        assert_eq!(config.gravity, 1500.0);
        assert_eq!(config.movement_speed, 500.0);
        assert_eq!(config.dash.max_dashes, 1);
        assert_eq!(config.dash.duration_secs, 0.1);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = PhysicsConfig {
            max_extra_jumps: 3,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(PhysicsConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = PhysicsConfig::from_json(r#"{ "jumping_speed": 0.0 }"#).unwrap_err();
        assert_eq!(err, ConfigError::NonPositive { field: "jumping_speed", value: 0.0 });

        let err = PhysicsConfig::from_json(r#"{ "clip": -1.0 }"#).unwrap_err();
        assert_eq!(err, ConfigError::Negative { field: "clip", value: -1.0 });
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = PhysicsConfig::from_json("{ gravity: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
