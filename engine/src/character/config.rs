//! Character Configuration
//!
//! Every tunable of the character with its shipped default. Loaded from JSON;
//! missing fields fall back to the defaults so a config file only needs the
//! values it changes.
//!
//! ```json
//! { "zoom_step": 40.0, "max_follow_distance": 1200.0 }
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::Projection;
use crate::math::Rotator;
use crate::player::MovementSettings;

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors that can occur while loading a character config.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON deserialization error.
    JsonError(serde_json::Error),
    /// A value is outside its allowed range.
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::JsonError(e) => write!(f, "JSON error: {e}"),
            ConfigError::Invalid(reason) => write!(f, "invalid character config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}

// ============================================================================
// CONFIG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    /// Yaw rate for full `TurnRate` input, deg/s
    pub base_turn_rate: f32,
    /// Pitch rate for full `LookUpRate` input, deg/s
    pub base_look_up_rate: f32,

    /// Follow boom length at spawn
    pub initial_follow_distance: f32,
    /// Scroll-in at or below this distance switches to first-person
    pub min_follow_distance: f32,
    /// Scroll-out above this distance is ignored
    pub max_follow_distance: f32,
    /// Boom length change per scroll notch
    pub zoom_step: f32,

    /// Follow boom offset from the character root
    pub follow_offset: Vec3,
    /// First-person boom offset from the head
    pub first_person_offset: Vec3,
    /// First-person boom length (negative places the camera ahead)
    pub first_person_arm: f32,

    /// World location of the overhead map camera
    pub map_camera_location: Vec3,
    /// Fixed rotation of the overhead map camera
    pub map_camera_rotation: Rotator,
    /// Lens of the overhead map camera, used to deproject the cursor
    pub map_projection: Projection,

    /// Minimap capture boom offset
    pub minimap_offset: Vec3,
    /// Minimap capture boom length
    pub minimap_arm: f32,

    /// Waypoint pointer boom length in third-person
    pub pointer_arm_third_person: f32,
    /// Waypoint pointer boom length in first-person
    pub pointer_arm_first_person: f32,

    /// Length of the cursor trace from the map camera
    pub trace_length: f32,
    /// Horizontal distance on each axis within which a click deletes the waypoint
    pub delete_tolerance: f32,
    /// Movement scale while not sprinting
    pub walk_scale: f32,

    /// Movement component tunables
    pub movement: MovementSettings,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            base_turn_rate: 45.0,
            base_look_up_rate: 45.0,
            initial_follow_distance: 300.0,
            min_follow_distance: 300.0,
            max_follow_distance: 1000.0,
            zoom_step: 20.0,
            follow_offset: Vec3::new(0.0, 0.0, 50.0),
            first_person_offset: Vec3::new(12.0, 5.0, 0.0),
            first_person_arm: -20.0,
            map_camera_location: Vec3::new(6000.0, 10000.0, 30000.0),
            map_camera_rotation: Rotator::new(-90.0, 0.0, 0.0),
            map_projection: Projection::default(),
            minimap_offset: Vec3::new(0.0, 0.0, 300.0),
            minimap_arm: 300.0,
            pointer_arm_third_person: -100.0,
            pointer_arm_first_person: -200.0,
            trace_length: 100_000.0,
            delete_tolerance: 200.0,
            walk_scale: 0.5,
            movement: MovementSettings::default(),
        }
    }
}

impl CharacterConfig {
    /// Read a config from a JSON file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&text)?;
        log::debug!("Loaded character config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse a config from JSON text and validate it.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => config,
            Err(ConfigError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(e) => {
                log::warn!(
                    "Ignoring character config {}: {}",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the camera and waypoint logic cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check_finite()?;

        if self.min_follow_distance > self.max_follow_distance {
            return Err(ConfigError::Invalid(format!(
                "min_follow_distance {} exceeds max_follow_distance {}",
                self.min_follow_distance, self.max_follow_distance
            )));
        }
        if self.zoom_step <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "zoom_step must be positive, got {}",
                self.zoom_step
            )));
        }
        if self.trace_length <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "trace_length must be positive, got {}",
                self.trace_length
            )));
        }
        if self.delete_tolerance <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "delete_tolerance must be positive, got {}",
                self.delete_tolerance
            )));
        }
        if self.walk_scale <= 0.0 || self.walk_scale > 1.0 {
            return Err(ConfigError::Invalid(format!(
                "walk_scale must be in (0, 1], got {}",
                self.walk_scale
            )));
        }
        if self.map_projection.aspect_ratio <= 0.0
            || !(1.0..180.0).contains(&self.map_projection.fov_degrees)
        {
            return Err(ConfigError::Invalid(format!(
                "map projection out of range: aspect {} fov {}",
                self.map_projection.aspect_ratio, self.map_projection.fov_degrees
            )));
        }
        Ok(())
    }

    /// Every tunable must be finite; NaN passes no range check below.
    fn check_finite(&self) -> Result<(), ConfigError> {
        let movement = &self.movement;
        let scalars = [
            ("base_turn_rate", self.base_turn_rate),
            ("base_look_up_rate", self.base_look_up_rate),
            ("initial_follow_distance", self.initial_follow_distance),
            ("min_follow_distance", self.min_follow_distance),
            ("max_follow_distance", self.max_follow_distance),
            ("zoom_step", self.zoom_step),
            ("first_person_arm", self.first_person_arm),
            ("map_camera_rotation.pitch", self.map_camera_rotation.pitch),
            ("map_camera_rotation.yaw", self.map_camera_rotation.yaw),
            ("map_camera_rotation.roll", self.map_camera_rotation.roll),
            ("map_projection.aspect_ratio", self.map_projection.aspect_ratio),
            ("map_projection.fov_degrees", self.map_projection.fov_degrees),
            ("minimap_arm", self.minimap_arm),
            ("pointer_arm_third_person", self.pointer_arm_third_person),
            ("pointer_arm_first_person", self.pointer_arm_first_person),
            ("trace_length", self.trace_length),
            ("delete_tolerance", self.delete_tolerance),
            ("walk_scale", self.walk_scale),
            ("movement.max_walk_speed", movement.max_walk_speed),
            ("movement.max_acceleration", movement.max_acceleration),
            ("movement.braking_deceleration", movement.braking_deceleration),
            ("movement.jump_z_velocity", movement.jump_z_velocity),
            ("movement.air_control", movement.air_control),
            ("movement.gravity", movement.gravity),
            ("movement.rotation_rate", movement.rotation_rate),
            ("movement.capsule_radius", movement.capsule_radius),
            ("movement.capsule_half_height", movement.capsule_half_height),
        ];
        let vectors = [
            ("follow_offset", self.follow_offset),
            ("first_person_offset", self.first_person_offset),
            ("map_camera_location", self.map_camera_location),
            ("minimap_offset", self.minimap_offset),
        ];

        let bad_scalar = scalars
            .iter()
            .find(|(_, value)| !value.is_finite())
            .map(|(name, value)| format!("{name} must be finite, got {value}"));
        let bad_vector = vectors
            .iter()
            .find(|(_, value)| !value.is_finite())
            .map(|(name, value)| format!("{name} must be finite, got {value:?}"));

        match bad_scalar.or(bad_vector) {
            Some(reason) => Err(ConfigError::Invalid(reason)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = CharacterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.zoom_step, 20.0);
        assert_eq!(config.min_follow_distance, 300.0);
        assert_eq!(config.max_follow_distance, 1000.0);
        assert_eq!(config.trace_length, 100_000.0);
        assert_eq!(config.delete_tolerance, 200.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = CharacterConfig::from_json(r#"{ "zoom_step": 40.0 }"#).unwrap();
        assert_eq!(config.zoom_step, 40.0);
        assert_eq!(config.base_turn_rate, 45.0);
        assert_eq!(config.map_camera_location, Vec3::new(6000.0, 10000.0, 30000.0));
    }

    #[test]
    fn test_json_roundtrip_preserves_nested() {
        let mut config = CharacterConfig::default();
        config.movement.jump_z_velocity = 500.0;
        config.map_camera_rotation = Rotator::new(-80.0, 10.0, 0.0);
        let parsed = CharacterConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_invalid_range_rejected() {
        let err = CharacterConfig::from_json(
            r#"{ "min_follow_distance": 900.0, "max_follow_distance": 500.0 }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("min_follow_distance"));
    }

    #[test]
    fn test_non_positive_step_rejected() {
        let config = CharacterConfig {
            zoom_step: 0.0,
            ..CharacterConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let nan_aspect = CharacterConfig {
            map_projection: Projection {
                aspect_ratio: f32::NAN,
                ..Projection::default()
            },
            ..CharacterConfig::default()
        };
        let err = nan_aspect.validate().unwrap_err();
        assert!(err.to_string().contains("aspect_ratio"));

        let nan_distance = CharacterConfig {
            max_follow_distance: f32::NAN,
            ..CharacterConfig::default()
        };
        assert!(matches!(nan_distance.validate(), Err(ConfigError::Invalid(_))));

        let infinite_offset = CharacterConfig {
            map_camera_location: Vec3::new(0.0, f32::INFINITY, 0.0),
            ..CharacterConfig::default()
        };
        assert!(matches!(infinite_offset.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_walk_scale_range() {
        for bad in [0.0, -0.5, 1.5] {
            let config = CharacterConfig {
                walk_scale: bad,
                ..CharacterConfig::default()
            };
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("walk_scale"), "{bad} accepted");
        }

        let full = CharacterConfig {
            walk_scale: 1.0,
            ..CharacterConfig::default()
        };
        assert!(full.validate().is_ok());
    }

    #[test]
    fn test_bad_json() {
        let err = CharacterConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::JsonError(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = CharacterConfig::load_or_default("/nonexistent/wayfinder/character.json");
        assert_eq!(config, CharacterConfig::default());

        let err = CharacterConfig::load("/nonexistent/wayfinder/character.json").unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
