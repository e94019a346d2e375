//! Wall geometries and the fixed-capacity wall catalog.
//!
//! Each wall kind reports the offset `dx` from a particle to its closest point on the
//! wall, but only when the particle sits on the side of the wall it is not allowed on.
//! On the allowed side the offset is exactly zero and the wall does not interact.

use crate::core::boxdim::BoxDim;
use crate::core::math::{Quat, Vec3};
use crate::error::{Error, Result};
use tracing::debug;

/// Maximum number of sphere walls.
pub const MAX_SPHERE_WALLS: usize = 20;
/// Maximum number of cylinder walls.
pub const MAX_CYLINDER_WALLS: usize = 20;
/// Maximum number of plane walls.
pub const MAX_PLANE_WALLS: usize = 40;

const Z_AXIS: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Particle is on the disallowed side of a curved wall of radius `r` at distance `dist`.
///
/// A particle exactly at the center has no direction to the surface and is never pushed.
#[inline]
fn outside_allowed(dist: f64, r: f64, inside: bool) -> bool {
    dist > 0.0 && ((inside && dist > r) || (!inside && dist < r))
}

/// Spherical wall.
///
/// With `inside == true` particles are confined to the ball of radius `radius`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SphereWall {
    /// Sphere radius (> 0).
    pub radius: f64,
    /// Center of the sphere.
    pub origin: Vec3,
    /// True when particles are confined inside, false when they are kept out.
    pub inside: bool,
}

impl SphereWall {
    /// Sphere of `radius` centered at `origin`.
    ///
    /// Errors:
    /// - `Error::InvalidParam` on a non-positive radius or non-finite origin.
    pub fn new(radius: f64, origin: Vec3, inside: bool) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParam(
                "sphere wall radius must be finite and > 0".into(),
            ));
        }
        if !origin.is_finite() {
            return Err(Error::InvalidParam("sphere wall origin must be finite".into()));
        }
        Ok(Self {
            radius,
            origin,
            inside,
        })
    }

    /// Radial projection from `position` onto the sphere surface.
    ///
    /// No periodic wrapping is applied: sphere walls are treated as confining containers
    /// in the unwrapped frame.
    #[inline]
    pub fn offset(&self, position: Vec3) -> Vec3 {
        let t = position - self.origin;
        let dist = t.norm();
        if outside_allowed(dist, self.radius, self.inside) {
            t * (self.radius / dist) - t
        } else {
            Vec3::zero()
        }
    }
}

/// Cylindrical wall of infinite length.
///
/// `orientation` rotates global vectors into the cylinder frame, where the axis is +z.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CylinderWall {
    /// Cylinder radius (> 0).
    pub radius: f64,
    /// A point on the axis.
    pub origin: Vec3,
    /// Unit quaternion taking the axis onto +z.
    pub orientation: Quat,
    /// True when particles are confined inside, false when they are kept out.
    pub inside: bool,
}

impl CylinderWall {
    /// Cylinder of `radius` through `origin` along `axis` (need not be normalized).
    ///
    /// Errors:
    /// - `Error::InvalidParam` on a non-positive radius or non-finite input.
    /// - `Error::MathError` on a zero-length axis.
    pub fn new(radius: f64, origin: Vec3, axis: Vec3, inside: bool) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParam(
                "cylinder wall radius must be finite and > 0".into(),
            ));
        }
        if !origin.is_finite() || !axis.is_finite() {
            return Err(Error::InvalidParam(
                "cylinder wall origin and axis must be finite".into(),
            ));
        }
        let len = axis.norm();
        if len < 1e-12 {
            return Err(Error::MathError("cylinder wall axis has zero length".into()));
        }
        Ok(Self {
            radius,
            origin,
            orientation: Quat::rotation_between(axis / len, Z_AXIS),
            inside,
        })
    }

    /// Unit axis direction in the global frame.
    pub fn axis(&self) -> Vec3 {
        self.orientation.conj().rotate(Z_AXIS)
    }

    /// Radial projection onto the cylinder surface, perpendicular to the axis.
    #[inline]
    pub fn offset(&self, position: Vec3, box_dim: &BoxDim) -> Vec3 {
        let mut t = position;
        box_dim.min_image(&mut t);
        t -= self.origin;
        let mut local = self.orientation.rotate(t);
        local.z = 0.0;
        let dist = local.norm();
        if outside_allowed(dist, self.radius, self.inside) {
            let dx = local * (self.radius / dist) - local;
            self.orientation.conj().rotate(dx)
        } else {
            Vec3::zero()
        }
    }
}

/// Planar wall; the half space the normal points into is disallowed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaneWall {
    /// Unit normal pointing into the disallowed half space.
    pub normal: Vec3,
    /// A point on the plane.
    pub origin: Vec3,
}

impl PlaneWall {
    /// Plane through `origin` with `normal` (normalized here).
    ///
    /// Errors:
    /// - `Error::MathError` on a zero-length normal.
    pub fn new(normal: Vec3, origin: Vec3) -> Result<Self> {
        if !origin.is_finite() || !normal.is_finite() {
            return Err(Error::InvalidParam(
                "plane wall origin and normal must be finite".into(),
            ));
        }
        let len = normal.norm();
        if len < 1e-12 {
            return Err(Error::MathError("plane wall normal has zero length".into()));
        }
        Ok(Self {
            normal: normal / len,
            origin,
        })
    }

    /// Displacement along the normal separating the plane from `position`.
    #[inline]
    pub fn offset(&self, position: Vec3, box_dim: &BoxDim) -> Vec3 {
        let mut t = position;
        box_dim.min_image(&mut t);
        let dist = self.normal.dot(t) - self.normal.dot(self.origin);
        if dist > 0.0 {
            self.normal * dist
        } else {
            Vec3::zero()
        }
    }
}

/// Fixed-capacity catalog of walls.
///
/// Only the first `num_*` entries of each array are active. Shrinking a count leaves the
/// dropped entries in place; they are ignored until overwritten or re-activated.
#[derive(Debug, Clone, PartialEq)]
pub struct WallField {
    spheres: [SphereWall; MAX_SPHERE_WALLS],
    cylinders: [CylinderWall; MAX_CYLINDER_WALLS],
    planes: [PlaneWall; MAX_PLANE_WALLS],
    num_spheres: usize,
    num_cylinders: usize,
    num_planes: usize,
}

impl Default for WallField {
    fn default() -> Self {
        Self::new()
    }
}

impl WallField {
    /// Empty catalog.
    pub fn new() -> Self {
        Self {
            spheres: [SphereWall::default(); MAX_SPHERE_WALLS],
            cylinders: [CylinderWall::default(); MAX_CYLINDER_WALLS],
            planes: [PlaneWall::default(); MAX_PLANE_WALLS],
            num_spheres: 0,
            num_cylinders: 0,
            num_planes: 0,
        }
    }

    /// Append a sphere wall and activate it.
    ///
    /// Errors:
    /// - `Error::CapacityExceeded` when [`MAX_SPHERE_WALLS`] sphere walls are already active.
    pub fn add_sphere(&mut self, wall: SphereWall) -> Result<()> {
        if self.num_spheres == MAX_SPHERE_WALLS {
            return Err(Error::CapacityExceeded {
                kind: "sphere",
                capacity: MAX_SPHERE_WALLS,
            });
        }
        self.spheres[self.num_spheres] = wall;
        self.num_spheres += 1;
        debug!(count = self.num_spheres, "sphere wall added");
        Ok(())
    }

    /// Append a cylinder wall and activate it.
    ///
    /// Errors:
    /// - `Error::CapacityExceeded` when [`MAX_CYLINDER_WALLS`] cylinder walls are already active.
    pub fn add_cylinder(&mut self, wall: CylinderWall) -> Result<()> {
        if self.num_cylinders == MAX_CYLINDER_WALLS {
            return Err(Error::CapacityExceeded {
                kind: "cylinder",
                capacity: MAX_CYLINDER_WALLS,
            });
        }
        self.cylinders[self.num_cylinders] = wall;
        self.num_cylinders += 1;
        debug!(count = self.num_cylinders, "cylinder wall added");
        Ok(())
    }

    /// Append a plane wall and activate it.
    ///
    /// Errors:
    /// - `Error::CapacityExceeded` when [`MAX_PLANE_WALLS`] plane walls are already active.
    pub fn add_plane(&mut self, wall: PlaneWall) -> Result<()> {
        if self.num_planes == MAX_PLANE_WALLS {
            return Err(Error::CapacityExceeded {
                kind: "plane",
                capacity: MAX_PLANE_WALLS,
            });
        }
        self.planes[self.num_planes] = wall;
        self.num_planes += 1;
        debug!(count = self.num_planes, "plane wall added");
        Ok(())
    }

    /// Set the number of active sphere walls.
    pub fn set_num_spheres(&mut self, n: usize) -> Result<()> {
        if n > MAX_SPHERE_WALLS {
            return Err(Error::CapacityExceeded {
                kind: "sphere",
                capacity: MAX_SPHERE_WALLS,
            });
        }
        self.num_spheres = n;
        Ok(())
    }

    /// Set the number of active cylinder walls.
    pub fn set_num_cylinders(&mut self, n: usize) -> Result<()> {
        if n > MAX_CYLINDER_WALLS {
            return Err(Error::CapacityExceeded {
                kind: "cylinder",
                capacity: MAX_CYLINDER_WALLS,
            });
        }
        self.num_cylinders = n;
        Ok(())
    }

    /// Set the number of active plane walls.
    pub fn set_num_planes(&mut self, n: usize) -> Result<()> {
        if n > MAX_PLANE_WALLS {
            return Err(Error::CapacityExceeded {
                kind: "plane",
                capacity: MAX_PLANE_WALLS,
            });
        }
        self.num_planes = n;
        Ok(())
    }

    /// Deactivate every wall.
    pub fn clear(&mut self) {
        self.num_spheres = 0;
        self.num_cylinders = 0;
        self.num_planes = 0;
    }

    /// Active sphere walls.
    #[inline]
    pub fn spheres(&self) -> &[SphereWall] {
        debug_assert!(self.num_spheres <= MAX_SPHERE_WALLS);
        &self.spheres[..self.num_spheres]
    }

    /// Active cylinder walls.
    #[inline]
    pub fn cylinders(&self) -> &[CylinderWall] {
        debug_assert!(self.num_cylinders <= MAX_CYLINDER_WALLS);
        &self.cylinders[..self.num_cylinders]
    }

    /// Active plane walls.
    #[inline]
    pub fn planes(&self) -> &[PlaneWall] {
        debug_assert!(self.num_planes <= MAX_PLANE_WALLS);
        &self.planes[..self.num_planes]
    }

    /// Total number of active walls.
    pub fn len(&self) -> usize {
        self.num_spheres + self.num_cylinders + self.num_planes
    }

    /// True when no wall of any kind is active.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
