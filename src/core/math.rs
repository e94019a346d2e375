//! Small vector and quaternion value types used by moves and walls.
//!
//! Convention: q = [s; v] where s is the scalar part and v = (x, y, z) the vector part.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 3-component real vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn norm_sq(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn norm(self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// True when every component is exactly zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(a: [f64; 3]) -> Self {
        Vec3::new(a[0], a[1], a[2])
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, k: f64) -> Vec3 {
        Vec3::new(self.x * k, self.y * k, self.z * k)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        v * self
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn div(self, k: f64) -> Vec3 {
        Vec3::new(self.x / k, self.y / k, self.z / k)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl MulAssign<f64> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, k: f64) {
        self.x *= k;
        self.y *= k;
        self.z *= k;
    }
}

/// A quaternion; unit quaternions represent orientations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quat {
    /// Scalar part.
    pub s: f64,
    /// Vector part.
    pub v: Vec3,
}

impl Default for Quat {
    fn default() -> Self {
        Quat::identity()
    }
}

impl Quat {
    #[inline]
    pub const fn new(s: f64, v: Vec3) -> Self {
        Self { s, v }
    }

    /// Identity quaternion (no rotation).
    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, Vec3::zero())
    }

    /// Rotation by `angle` radians about the unit vector `axis`.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle: f64) -> Self {
        let (sin, cos) = (0.5 * angle).sin_cos();
        Self::new(cos, axis * sin)
    }

    /// Shortest rotation taking unit vector `from` onto unit vector `to`.
    ///
    /// Antiparallel inputs rotate by pi about any axis perpendicular to `from`.
    pub fn rotation_between(from: Vec3, to: Vec3) -> Self {
        let c = from.dot(to);
        if c < -1.0 + 1e-12 {
            // pick the coordinate axis least aligned with `from`
            let helper = if from.x.abs() < 0.9 {
                Vec3::new(1.0, 0.0, 0.0)
            } else {
                Vec3::new(0.0, 1.0, 0.0)
            };
            let axis = from.cross(helper);
            return Quat::new(0.0, axis / axis.norm());
        }
        Quat::new(1.0 + c, from.cross(to)).normalized()
    }

    /// Squared norm.
    #[inline]
    pub fn norm2(self) -> f64 {
        self.s * self.s + self.v.norm_sq()
    }

    /// Conjugate (inverse for unit quaternions).
    #[inline]
    pub fn conj(self) -> Quat {
        Quat::new(self.s, -self.v)
    }

    /// Rescale to unit norm.
    #[inline]
    pub fn normalized(self) -> Quat {
        let inv = 1.0 / self.norm2().sqrt();
        Quat::new(self.s * inv, self.v * inv)
    }

    /// Rotate `b` by this unit quaternion: q b q*.
    #[inline]
    pub fn rotate(self, b: Vec3) -> Vec3 {
        (self.s * self.s - self.v.norm_sq()) * b
            + 2.0 * self.v.dot(b) * self.v
            + 2.0 * self.s * self.v.cross(b)
    }
}

impl Mul for Quat {
    type Output = Quat;
    #[inline]
    fn mul(self, b: Quat) -> Quat {
        Quat::new(
            self.s * b.s - self.v.dot(b.v),
            self.s * b.v + b.s * self.v + self.v.cross(b.v),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPS: f64 = 1e-12;

    #[test]
    fn cross_follows_right_hand_rule() {
        let z = Vec3::new(1.0, 0.0, 0.0).cross(Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(z, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn axis_angle_rotates_x_onto_y() {
        let q = Quat::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), std::f64::consts::FRAC_PI_2);
        let r = q.rotate(Vec3::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(r.x, 0.0, epsilon = EPS);
        assert_abs_diff_eq!(r.y, 1.0, epsilon = EPS);
        assert_abs_diff_eq!(r.z, 0.0, epsilon = EPS);
    }

    #[test]
    fn conj_undoes_rotation() {
        let axis = Vec3::new(1.0, 2.0, -0.5);
        let q = Quat::from_axis_angle(axis / axis.norm(), 1.3);
        let b = Vec3::new(0.3, -4.0, 2.5);
        let back = q.conj().rotate(q.rotate(b));
        assert_abs_diff_eq!((back - b).norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn product_composes_rotations() {
        let z = Vec3::new(0.0, 0.0, 1.0);
        let a = Quat::from_axis_angle(z, 0.4);
        let b = Quat::from_axis_angle(z, 0.7);
        let ab = a * b;
        let c = Quat::from_axis_angle(z, 1.1);
        assert_abs_diff_eq!(ab.s, c.s, epsilon = EPS);
        assert_abs_diff_eq!(ab.v.z, c.v.z, epsilon = EPS);
    }

    #[test]
    fn rotation_between_maps_from_to_to() {
        let from = Vec3::new(1.0, 1.0, 0.0) / 2f64.sqrt();
        let to = Vec3::new(0.0, 0.0, 1.0);
        let q = Quat::rotation_between(from, to);
        assert_abs_diff_eq!(q.norm2(), 1.0, epsilon = EPS);
        assert_abs_diff_eq!((q.rotate(from) - to).norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn rotation_between_antiparallel() {
        let from = Vec3::new(0.0, 0.0, -1.0);
        let to = Vec3::new(0.0, 0.0, 1.0);
        let q = Quat::rotation_between(from, to);
        assert_abs_diff_eq!((q.rotate(from) - to).norm(), 0.0, epsilon = 1e-12);
    }
}
