//! Node descriptor files (`*.toml`)
//!
//! A `PolyNodeConfig` is what an editor or asset pipeline stores for one
//! poly-prism node: angles in degrees and band limits relative to the
//! tallest corner. `to_polygon_spec` turns it into generator parameters.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::procedural::{GeneratedMesh, PolygonSpec};

/// Error type for node descriptor loading and saving.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolyNodeConfig {
    #[serde(default = "default_corner_count")]
    pub corner_count: u32,
    #[serde(default = "default_sampling")]
    pub sampling: u32,
    #[serde(default)]
    pub floret_factor: f32,
    #[serde(default)]
    pub base_sizes: Vec<f32>,
    #[serde(default)]
    pub top_sizes: Vec<f32>,
    /// Corner angles in degrees; empty spaces the corners evenly
    #[serde(default)]
    pub summit_angles_deg: Vec<f32>,
    #[serde(default)]
    pub poly_heights: Vec<f32>,
    #[serde(default)]
    pub slope: f32,
    #[serde(default)]
    pub curving: bool,
    #[serde(default = "default_cut_off")]
    pub cut_off: f32,
    /// Band limits as a fraction of the tallest corner height
    #[serde(default)]
    pub band_limits: Vec<f32>,
    #[serde(default)]
    pub band_blend_factor: f32,
}

fn default_corner_count() -> u32 { 6 }
fn default_sampling() -> u32 { 7 }
fn default_cut_off() -> f32 { 0.25 }

impl Default for PolyNodeConfig {
    fn default() -> Self {
        Self {
            corner_count: default_corner_count(),
            sampling: default_sampling(),
            floret_factor: 0.0,
            base_sizes: Vec::new(),
            top_sizes: Vec::new(),
            summit_angles_deg: Vec::new(),
            poly_heights: Vec::new(),
            slope: 0.0,
            curving: false,
            cut_off: default_cut_off(),
            band_limits: Vec::new(),
            band_blend_factor: 0.0,
        }
    }
}

impl PolyNodeConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load a descriptor from disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded poly node from {} ({} corners, sampling {})",
            path.display(),
            config.corner_count,
            config.sampling
        );
        Ok(config)
    }

    /// Write a descriptor to disk, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Normalized generator parameters for this node
    pub fn to_polygon_spec(&self) -> PolygonSpec {
        let mut spec = PolygonSpec::default();

        if self.summit_angles_deg.is_empty() {
            spec.set_to_regular_polygon(
                self.corner_count,
                self.sampling,
                self.floret_factor,
                1.0,
                1.0,
                0.0,
            );
        }

        let angles: Vec<f32> = if self.summit_angles_deg.is_empty() {
            spec.summit_angles().to_vec()
        } else {
            self.summit_angles_deg.iter().map(|a| a.to_radians()).collect()
        };

        spec.configure(
            self.corner_count,
            self.sampling,
            self.floret_factor,
            &self.base_sizes,
            &self.top_sizes,
            &angles,
        );
        spec.set_heights(&self.poly_heights, self.slope, self.curving, self.cut_off);

        let max_height = spec.poly_heights().iter().copied().fold(0.0, f32::max);
        let thresholds: Vec<f32> = self
            .band_limits
            .iter()
            .map(|limit| limit.clamp(0.0, 1.0) * max_height)
            .collect();
        spec.set_bands(&thresholds, self.band_blend_factor);

        spec
    }

    /// Generate the mesh for this node
    pub fn generate(&self) -> GeneratedMesh {
        self.to_polygon_spec().generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    // =============================================================
    // Default value tests
    // =============================================================

    #[test]
    fn test_config_default() {
        let config = PolyNodeConfig::default();
        assert_eq!(config.corner_count, 6);
        assert_eq!(config.sampling, 7);
        assert!((config.cut_off - 0.25).abs() < f32::EPSILON);
        assert!(config.band_limits.is_empty());
    }

    #[test]
    fn test_default_helper_functions() {
        assert_eq!(default_corner_count(), 6);
        assert_eq!(default_sampling(), 7);
        assert!((default_cut_off() - 0.25).abs() < f32::EPSILON);
    }

    // =============================================================
    // TOML tests
    // =============================================================

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = PolyNodeConfig::from_toml_str("").unwrap();
        assert_eq!(config, PolyNodeConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = PolyNodeConfig::from_toml_str(
            r#"
            corner_count = 4
            poly_heights = [1.0, 2.0]
            curving = true
            band_limits = [0.5]
            "#,
        )
        .unwrap();

        assert_eq!(config.corner_count, 4);
        assert_eq!(config.sampling, 7);
        assert_eq!(config.poly_heights, vec![1.0, 2.0]);
        assert!(config.curving);
        assert_eq!(config.band_limits, vec![0.5]);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let result = PolyNodeConfig::from_toml_str("corner_count = \"six\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_serialize_roundtrip() {
        let config = PolyNodeConfig {
            corner_count: 5,
            summit_angles_deg: vec![0.0, 72.0, 144.0, 216.0, 288.0],
            band_limits: vec![0.25, 0.75],
            ..Default::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(PolyNodeConfig::from_toml_str(&text).unwrap(), config);
    }

    // =============================================================
    // Conversion tests
    // =============================================================

    #[test]
    fn test_empty_angles_space_evenly() {
        let spec = PolyNodeConfig::default().to_polygon_spec();
        assert_eq!(spec.effective_corner_count(), 6);
        for (i, angle) in spec.summit_angles().iter().enumerate() {
            assert!((angle - i as f32 * PI / 3.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_degrees_become_radians() {
        let config = PolyNodeConfig {
            corner_count: 3,
            summit_angles_deg: vec![90.0, 180.0, 270.0],
            ..Default::default()
        };
        let spec = config.to_polygon_spec();
        assert!((spec.summit_angles()[0] - PI / 2.0).abs() < 1e-6);
        assert!((spec.summit_angles()[2] - 1.5 * PI).abs() < 1e-5);
    }

    #[test]
    fn test_band_limits_scale_with_tallest_corner() {
        let config = PolyNodeConfig {
            poly_heights: vec![1.0, 4.0, 2.0],
            band_limits: vec![0.25, 1.5],
            ..Default::default()
        };
        let spec = config.to_polygon_spec();
        assert_eq!(spec.band_thresholds(), &[1.0, 4.0]);
        assert_eq!(spec.band_count(), 4);
    }

    #[test]
    fn test_cut_off_clamped_against_heights() {
        let config = PolyNodeConfig {
            poly_heights: vec![0.1],
            ..Default::default()
        };
        let spec = config.to_polygon_spec();
        assert!((spec.cut_off() - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn test_generate_default_node() {
        let mesh = PolyNodeConfig::default().generate();
        let layout = crate::procedural::VertexLayout::new(6, 7);
        assert_eq!(mesh.vertex_count(), layout.vertices_len());
        assert_eq!(mesh.band_count(), 2);
    }
}
