//! Serializable shape descriptions and the demo gallery.

use std::path::Path;

use lathe_core::{DifferenceStep, LatheError, Result};
use lathe_geometry::{profile_winding, Profile, ProfileKind, Revolution};
use lathe_math::{Point2, Transform, Vector3};
use serde::{Deserialize, Serialize};

use crate::normals::orient_outward;
use crate::{MeshBuilder, TriangleMesh};

/// Samples used to classify a profile's winding.
const WINDING_SAMPLES: usize = 256;

/// One revolved shape: profile, tessellation density and placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeConfig {
    pub name: String,
    pub profile: ProfileKind,
    pub vertical_segments: usize,
    pub rotation_segments: usize,
    #[serde(default)]
    pub step: DifferenceStep,
    #[serde(default)]
    pub center: Vector3,
    /// Orient normals per vertex so they face out of the revolved solid.
    #[serde(default)]
    pub outward_normals: bool,
}

impl ShapeConfig {
    pub fn new(
        name: impl Into<String>,
        profile: ProfileKind,
        vertical_segments: usize,
        rotation_segments: usize,
    ) -> Self {
        Self {
            name: name.into(),
            profile,
            vertical_segments,
            rotation_segments,
            step: DifferenceStep::default(),
            center: Vector3::ZERO,
            outward_normals: false,
        }
    }

    pub fn with_outward_normals(mut self, outward: bool) -> Self {
        self.outward_normals = outward;
        self
    }

    pub fn build(&self) -> Result<TriangleMesh> {
        let profile = self.profile.to_profile()?;
        let builder = MeshBuilder::new(self.vertical_segments, self.rotation_segments)?
            .with_step(self.step)?;

        let surface = Revolution::new(profile);
        let mut mesh = builder.build(&surface);

        if self.outward_normals {
            let profile: &dyn Profile = &**surface.profile();
            let winding = profile_winding(profile, WINDING_SAMPLES);
            tracing::debug!(shape = %self.name, ?winding, "orienting normals outward");
            orient_outward(&mut mesh.normals, &builder.layout(), profile, winding);
        }
        if self.center != Vector3::ZERO {
            mesh.transform(&Transform::from_translation(self.center));
        }
        Ok(mesh)
    }
}

/// A named set of shapes, loadable from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    pub shapes: Vec<ShapeConfig>,
}

impl GalleryConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LatheError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), shapes = config.shapes.len(), "loaded gallery config");
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| LatheError::Serialization(e.to_string()))
    }

    pub fn shape(&self, name: &str) -> Result<&ShapeConfig> {
        self.shapes
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| LatheError::NotFound(format!("shape `{name}`")))
    }
}

impl Default for GalleryConfig {
    /// Sphere, spikes, torus and ripple heart at the demo's original densities,
    /// all with outward-facing normals.
    fn default() -> Self {
        let shapes = vec![
            ShapeConfig::new("sphere", ProfileKind::HalfCircle { radius: 0.3 }, 16, 16),
            ShapeConfig::new(
                "spikes",
                ProfileKind::Spikes {
                    radius: 0.3,
                    frequency: 12,
                },
                16,
                16,
            ),
            ShapeConfig::new(
                "torus",
                ProfileKind::Circle {
                    center: Point2::new(0.21, 0.0),
                    radius: 0.09,
                },
                16,
                16,
            ),
            ShapeConfig::new("ripple_heart", ProfileKind::RippleHeart, 50, 50),
        ];
        Self {
            shapes: shapes
                .into_iter()
                .map(|shape| shape.with_outward_normals(true))
                .collect(),
        }
    }
}
