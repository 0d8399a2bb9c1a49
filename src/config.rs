//! Field configuration
//!
//! Every field has a default matching the stock portfolio background, so an
//! empty JSON object (or no config at all) gives the standard look.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};
use crate::theme::{colors, Rgb};

/// Tunables for one particle field
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldConfig {
    /// Number of particles created on (re)initialization
    pub particle_count: usize,
    /// Upper bound of |vx| and |vy|, units per frame
    pub max_speed: f32,
    /// Particle radius is drawn from [0, max_radius)
    pub max_radius: f32,
    /// Fill alpha for particle dots
    pub particle_alpha: f32,
    /// Pairs closer than this are linked
    pub link_distance: f32,
    /// Link alpha at distance zero, fading linearly to 0 at link_distance
    pub link_alpha: f32,
    /// Stroke width of link lines
    pub link_width: f32,
    /// Particle colors, one picked uniformly per particle
    pub palette: Vec<Rgb>,
    /// Native runner frame rate
    pub target_fps: u32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 50,
            max_speed: 0.25,
            max_radius: 2.0,
            particle_alpha: 0.5,
            link_distance: 100.0,
            link_alpha: 0.1,
            link_width: 0.5,
            palette: colors::PALETTE.to_vec(),
            target_fps: 60,
        }
    }
}

impl FieldConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        debug!(path = %path.display(), ?config, "Loaded field config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        non_negative("max_speed", self.max_speed)?;
        non_negative("max_radius", self.max_radius)?;
        unit_interval("particle_alpha", self.particle_alpha)?;
        unit_interval("link_alpha", self.link_alpha)?;
        positive("link_distance", self.link_distance)?;
        positive("link_width", self.link_width)?;

        if self.palette.is_empty() {
            return Err(invalid("palette", "must contain at least one color"));
        }
        if self.target_fps == 0 {
            return Err(invalid("target_fps", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> Error {
    Error::InvalidConfig {
        field,
        reason: reason.into(),
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be finite and >= 0, got {value}")))
    }
}

fn positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be finite and > 0, got {value}")))
    }
}

fn unit_interval(field: &'static str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, format!("must be within [0, 1], got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FieldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.particle_count, 50);
        assert_eq!(config.palette, colors::PALETTE.to_vec());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = FieldConfig::from_json(r##"{"particle_count": 12, "palette": ["#ffffff"]}"##)
            .unwrap();
        assert_eq!(config.particle_count, 12);
        assert_eq!(config.palette, vec![Rgb::new(255, 255, 255)]);
        assert_eq!(config.link_distance, 100.0);
        assert_eq!(config.target_fps, 60);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(FieldConfig::from_json("{}").unwrap(), FieldConfig::default());
    }

    #[test]
    fn test_rejects_unknown_field() {
        let err = FieldConfig::from_json(r#"{"particles": 10}"#).unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_rejects_bad_values() {
        let cases = [
            r#"{"max_speed": -1.0}"#,
            r#"{"link_distance": 0.0}"#,
            r#"{"link_alpha": 1.5}"#,
            r#"{"particle_alpha": -0.1}"#,
            r#"{"link_width": 0.0}"#,
            r#"{"palette": []}"#,
            r#"{"target_fps": 0}"#,
        ];
        for json in cases {
            let err = FieldConfig::from_json(json).unwrap_err();
            assert!(matches!(err, Error::InvalidConfig { .. }), "{json} -> {err}");
        }
    }

    #[test]
    fn test_rejects_bad_palette_entry() {
        let err = FieldConfig::from_json(r#"{"palette": ["blue"]}"#).unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_rejects_signed_hex_palette() {
        let err = FieldConfig::from_json(r##"{"palette": ["#+f+f+f"]}"##).unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = FieldConfig::load("/nonexistent/particle-field.json").unwrap_err();
        assert!(matches!(err, Error::ConfigIo { .. }));
    }
}
