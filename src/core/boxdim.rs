use crate::core::math::Vec3;
use crate::error::{Error, Result};

/// Periodic simulation box.
///
/// The box is triclinic in general: lattice vectors are
/// `a1 = (Lx, 0, 0)`, `a2 = (xy*Ly, Ly, 0)`, `a3 = (xz*Lz, yz*Lz, Lz)`, centered on the origin.
/// Each axis may independently be periodic or not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxDim {
    l: Vec3,
    xy: f64,
    xz: f64,
    yz: f64,
    periodic: [bool; 3],
}

impl BoxDim {
    /// Orthorhombic, fully periodic box with edge lengths `l`.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if any edge length is non-positive or not finite.
    pub fn new(l: [f64; 3]) -> Result<Self> {
        if !l.iter().all(|&x| x.is_finite() && x > 0.0) {
            return Err(Error::InvalidParam(
                "box edge lengths must be finite and > 0".into(),
            ));
        }
        Ok(Self {
            l: Vec3::from(l),
            xy: 0.0,
            xz: 0.0,
            yz: 0.0,
            periodic: [true; 3],
        })
    }

    /// Cubic, fully periodic box.
    pub fn cube(l: f64) -> Result<Self> {
        Self::new([l, l, l])
    }

    /// Set tilt factors.
    pub fn with_tilts(mut self, xy: f64, xz: f64, yz: f64) -> Result<Self> {
        if !(xy.is_finite() && xz.is_finite() && yz.is_finite()) {
            return Err(Error::InvalidParam("tilt factors must be finite".into()));
        }
        self.xy = xy;
        self.xz = xz;
        self.yz = yz;
        Ok(self)
    }

    /// Set per-axis periodicity.
    pub fn with_periodic(mut self, periodic: [bool; 3]) -> Self {
        self.periodic = periodic;
        self
    }

    /// Edge lengths.
    #[inline]
    pub fn lengths(&self) -> Vec3 {
        self.l
    }

    /// Tilt factors (xy, xz, yz).
    #[inline]
    pub fn tilts(&self) -> (f64, f64, f64) {
        (self.xy, self.xz, self.yz)
    }

    #[inline]
    pub fn periodic(&self) -> [bool; 3] {
        self.periodic
    }

    /// Replace `v` in place by its shortest periodic image.
    ///
    /// Axes are wrapped z first, then y, then x so that tilt shifts from the upper
    /// lattice vectors are folded back into the lower components.
    #[inline]
    pub fn min_image(&self, v: &mut Vec3) {
        if self.periodic[2] {
            let img = (v.z / self.l.z).round();
            if img != 0.0 {
                v.z -= img * self.l.z;
                v.y -= img * self.yz * self.l.z;
                v.x -= img * self.xz * self.l.z;
            }
        }
        if self.periodic[1] {
            let img = (v.y / self.l.y).round();
            if img != 0.0 {
                v.y -= img * self.l.y;
                v.x -= img * self.xy * self.l.y;
            }
        }
        if self.periodic[0] {
            let img = (v.x / self.l.x).round();
            if img != 0.0 {
                v.x -= img * self.l.x;
            }
        }
    }
}
