use crate::core::math::{Quat, Vec3};
use crate::core::moves::Dimensions;
use crate::error::{Error, Result};

/// Tolerance on |q|^2 - 1 accepted for an orientation.
pub const UNIT_NORM_TOL: f64 = 1e-6;

/// Trial configuration of a single particle: the state a move mutates.
///
/// Fields:
/// - `id`: stable identifier (also used to key the particle's random stream)
/// - `position`: center of mass; `z == 0` exactly in 2D
/// - `orientation`: unit quaternion; pure z-rotation in 2D
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Stable particle identifier.
    pub id: u32,
    /// Position (x, y, z).
    pub position: Vec3,
    /// Orientation quaternion.
    pub orientation: Quat,
}

impl Particle {
    /// Create a new particle after validating invariants.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if the position is not finite, the orientation is not a unit
    ///   quaternion, or a 2D particle leaves the xy plane.
    pub fn new(id: u32, position: Vec3, orientation: Quat, dim: Dimensions) -> Result<Self> {
        if !position.is_finite() {
            return Err(Error::InvalidParam("position must be finite".into()));
        }
        if !orientation.s.is_finite() || !orientation.v.is_finite() {
            return Err(Error::InvalidParam("orientation must be finite".into()));
        }
        if (orientation.norm2() - 1.0).abs() > UNIT_NORM_TOL {
            return Err(Error::InvalidParam(
                "orientation must be a unit quaternion".into(),
            ));
        }
        if dim == Dimensions::Two {
            if position.z != 0.0 {
                return Err(Error::InvalidParam(
                    "2D particles must have position.z == 0".into(),
                ));
            }
            if orientation.v.x != 0.0 || orientation.v.y != 0.0 {
                return Err(Error::InvalidParam(
                    "2D orientations may only rotate about z".into(),
                ));
            }
        }
        Ok(Self {
            id,
            position,
            orientation,
        })
    }

    /// Particle at `position` with the identity orientation.
    pub fn at(id: u32, position: Vec3, dim: Dimensions) -> Result<Self> {
        Self::new(id, position, Quat::identity(), dim)
    }
}
