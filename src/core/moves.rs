//! Trial move proposals for hard-particle Monte Carlo.
//!
//! All functions here are pure apart from the random draws: they read their explicit
//! inputs, consume deviates from the supplied generator and write only the state passed
//! by `&mut`. Callers key a fresh [`CounterRng`](crate::core::CounterRng) per particle and
//! sweep so that results never depend on execution order.

use crate::core::math::{Quat, Vec3};
use crate::core::particle::Particle;
use crate::error::{Error, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Spatial dimensionality of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Dimensions {
    /// Particles live in the xy plane; z components are held at exactly zero.
    Two,
    /// Unconstrained 3D positions and orientations.
    Three,
}

impl TryFrom<u32> for Dimensions {
    type Error = Error;

    fn try_from(dim: u32) -> Result<Self> {
        match dim {
            2 => Ok(Dimensions::Two),
            3 => Ok(Dimensions::Three),
            other => Err(Error::InvalidParam(format!(
                "dimensions must be 2 or 3, got {other}"
            ))),
        }
    }
}

impl From<Dimensions> for u32 {
    fn from(dim: Dimensions) -> u32 {
        match dim {
            Dimensions::Two => 2,
            Dimensions::Three => 3,
        }
    }
}

/// Uniform real in [-half_width, half_width).
#[inline]
fn symmetric<R: Rng + ?Sized>(rng: &mut R, half_width: f64) -> f64 {
    half_width * (2.0 * rng.random::<f64>() - 1.0)
}

/// Random point on the unit sphere (Marsaglia 1972).
fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    loop {
        let u1 = symmetric(rng, 1.0);
        let u2 = symmetric(rng, 1.0);
        let s = u1 * u1 + u2 * u2;
        if s < 1.0 {
            let k = 2.0 * (1.0 - s).sqrt();
            return Vec3::new(u1 * k, u2 * k, 1.0 - 2.0 * s);
        }
    }
}

/// Rotate `orientation` by a random step of at most `max_angle` radians.
///
/// In 3D the step is a rotation about a uniformly random axis by an angle uniform in
/// `[-max_angle, max_angle]`. In 2D the rotation is about z only, so the x and y
/// components of the quaternion are written as exact zeros.
pub fn move_rotate<R: Rng + ?Sized>(
    orientation: &mut Quat,
    rng: &mut R,
    max_angle: f64,
    dim: Dimensions,
) {
    debug_assert!(max_angle > 0.0, "max_angle must be > 0");
    match dim {
        Dimensions::Two => {
            debug_assert!(orientation.v.x == 0.0 && orientation.v.y == 0.0);
            // half-angle of the z rotation
            let alpha = symmetric(rng, 0.5 * max_angle);
            let (sin, cos) = alpha.sin_cos();
            let s = orientation.s * cos - orientation.v.z * sin;
            let z = orientation.s * sin + orientation.v.z * cos;
            let inv = 1.0 / (s * s + z * z).sqrt();
            *orientation = Quat::new(s * inv, Vec3::new(0.0, 0.0, z * inv));
        }
        Dimensions::Three => {
            let axis = random_unit_vector(rng);
            let angle = symmetric(rng, max_angle);
            *orientation = (*orientation * Quat::from_axis_angle(axis, angle)).normalized();
        }
    }
}

/// Displace `position` by a vector drawn uniformly from the ball (3D) or disk (2D) of
/// radius `max_displacement`.
///
/// In 2D the z component is never written.
pub fn move_translate<R: Rng + ?Sized>(
    position: &mut Vec3,
    rng: &mut R,
    max_displacement: f64,
    dim: Dimensions,
) {
    debug_assert!(max_displacement > 0.0, "max_displacement must be > 0");
    let d2 = max_displacement * max_displacement;
    match dim {
        Dimensions::Two => {
            debug_assert!(position.z == 0.0);
            let (dx, dy) = loop {
                let dx = symmetric(rng, max_displacement);
                let dy = symmetric(rng, max_displacement);
                if dx * dx + dy * dy <= d2 {
                    break (dx, dy);
                }
            };
            position.x += dx;
            position.y += dy;
        }
        Dimensions::Three => {
            let delta = loop {
                let delta = Vec3::new(
                    symmetric(rng, max_displacement),
                    symmetric(rng, max_displacement),
                    symmetric(rng, max_displacement),
                );
                if delta.norm_sq() <= d2 {
                    break delta;
                }
            };
            *position += delta;
        }
    }
}

/// Uniform integer in `[0, max_inclusive]`.
#[inline]
pub fn rand_select<R: Rng + ?Sized>(rng: &mut R, max_inclusive: u32) -> u32 {
    rng.random_range(0..=max_inclusive)
}

/// Kind of trial move applied by [`propose_trial`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Position displaced by [`move_translate`].
    Translate,
    /// Orientation turned by [`move_rotate`].
    Rotate,
}

/// Maximum step sizes for trial moves.
///
/// A zero step disables that move kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveSizes {
    max_displacement: f64,
    max_angle: f64,
    dim: Dimensions,
}

impl MoveSizes {
    /// Validated step sizes.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if a step is negative or not finite, or both steps are zero.
    pub fn new(max_displacement: f64, max_angle: f64, dim: Dimensions) -> Result<Self> {
        if !max_displacement.is_finite() || max_displacement < 0.0 {
            return Err(Error::InvalidParam(
                "max_displacement must be finite and >= 0".into(),
            ));
        }
        if !max_angle.is_finite() || max_angle < 0.0 {
            return Err(Error::InvalidParam(
                "max_angle must be finite and >= 0".into(),
            ));
        }
        if max_displacement == 0.0 && max_angle == 0.0 {
            return Err(Error::InvalidParam(
                "at least one of max_displacement and max_angle must be > 0".into(),
            ));
        }
        Ok(Self {
            max_displacement,
            max_angle,
            dim,
        })
    }

    /// Largest translation distance; zero disables translations.
    #[inline]
    pub fn max_displacement(&self) -> f64 {
        self.max_displacement
    }

    /// Largest rotation angle in radians; zero disables rotations.
    #[inline]
    pub fn max_angle(&self) -> f64 {
        self.max_angle
    }

    /// Dimensionality the moves are drawn in.
    #[inline]
    pub fn dim(&self) -> Dimensions {
        self.dim
    }
}

/// Apply one randomly chosen trial move to `particle` and report which kind it was.
///
/// When both kinds are enabled each is picked with probability 1/2.
pub fn propose_trial<R: Rng + ?Sized>(
    particle: &mut Particle,
    sizes: &MoveSizes,
    rng: &mut R,
) -> MoveKind {
    let kind = match (sizes.max_displacement > 0.0, sizes.max_angle > 0.0) {
        (true, true) => {
            if rand_select(rng, 1) == 0 {
                MoveKind::Translate
            } else {
                MoveKind::Rotate
            }
        }
        (true, false) => MoveKind::Translate,
        _ => MoveKind::Rotate,
    };
    match kind {
        MoveKind::Translate => {
            move_translate(&mut particle.position, rng, sizes.max_displacement, sizes.dim)
        }
        MoveKind::Rotate => {
            move_rotate(&mut particle.orientation, rng, sizes.max_angle, sizes.dim)
        }
    }
    kind
}
