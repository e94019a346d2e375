//! Serializable simulation configuration.
//!
//! The driver owns the wall catalog, box and move sizes; this module is how it reads them
//! from a JSON document and turns them into validated core types.

use crate::core::{
    BoxDim, CylinderWall, Dimensions, MoveSizes, PlaneWall, SphereWall, Vec3, WallField,
};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

fn default_true() -> bool {
    true
}

fn default_periodic() -> [bool; 3] {
    [true; 3]
}

/// Sphere wall entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereConfig {
    pub radius: f64,
    #[serde(default)]
    pub origin: [f64; 3],
    #[serde(default = "default_true")]
    pub inside: bool,
}

/// Cylinder wall entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CylinderConfig {
    pub radius: f64,
    #[serde(default)]
    pub origin: [f64; 3],
    pub axis: [f64; 3],
    #[serde(default = "default_true")]
    pub inside: bool,
}

/// Plane wall entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneConfig {
    #[serde(default)]
    pub origin: [f64; 3],
    pub normal: [f64; 3],
}

/// Wall catalog description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallConfig {
    pub spheres: Vec<SphereConfig>,
    pub cylinders: Vec<CylinderConfig>,
    pub planes: Vec<PlaneConfig>,
}

impl WallConfig {
    /// Validate every wall and fill a [`WallField`].
    ///
    /// Errors:
    /// - `Error::CapacityExceeded` when a list is longer than its fixed capacity.
    /// - wall constructor errors for invalid geometry.
    pub fn build(&self) -> Result<WallField> {
        let mut field = WallField::new();
        for s in &self.spheres {
            field.add_sphere(SphereWall::new(s.radius, Vec3::from(s.origin), s.inside)?)?;
        }
        for c in &self.cylinders {
            field.add_cylinder(CylinderWall::new(
                c.radius,
                Vec3::from(c.origin),
                Vec3::from(c.axis),
                c.inside,
            )?)?;
        }
        for p in &self.planes {
            field.add_plane(PlaneWall::new(Vec3::from(p.normal), Vec3::from(p.origin))?)?;
        }
        debug!(
            spheres = field.spheres().len(),
            cylinders = field.cylinders().len(),
            planes = field.planes().len(),
            "wall field configured"
        );
        Ok(field)
    }
}

/// Trial move step sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveConfig {
    #[serde(default)]
    pub max_displacement: f64,
    #[serde(default)]
    pub max_angle: f64,
    pub dimensions: Dimensions,
}

impl MoveConfig {
    pub fn build(&self) -> Result<MoveSizes> {
        MoveSizes::new(self.max_displacement, self.max_angle, self.dimensions)
    }
}

/// Simulation box description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxConfig {
    pub lengths: [f64; 3],
    #[serde(default)]
    pub tilts: [f64; 3],
    #[serde(default = "default_periodic")]
    pub periodic: [bool; 3],
}

impl BoxConfig {
    pub fn build(&self) -> Result<BoxDim> {
        let [xy, xz, yz] = self.tilts;
        Ok(BoxDim::new(self.lengths)?
            .with_tilts(xy, xz, yz)?
            .with_periodic(self.periodic))
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Global seed for move streams and sweep ordering.
    pub seed: u32,
    pub moves: MoveConfig,
    #[serde(rename = "box")]
    pub box_dim: BoxConfig,
    #[serde(default)]
    pub walls: WallConfig,
}

impl Config {
    /// Parse a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
