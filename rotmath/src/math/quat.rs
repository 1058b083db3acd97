use super::error::*;
use super::mat33::*;
use bytemuck::{Pod, Zeroable};

/// Quaternion `w + xi + yj + zk`.
///
/// Not required to be unit length. Equality is exact, component by component.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(C)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion { w: 1.0, x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Quaternion {
        Quaternion { w, x, y, z }
    }

    pub fn norm(self) -> f64 {
        self.norm_squared().sqrt()
    }

    fn norm_squared(self) -> f64 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn conjugate(self) -> Quaternion {
        Quaternion { w: self.w, x: -self.x, y: -self.y, z: -self.z }
    }

    /// Multiplicative inverse, `conjugate / norm²`.
    ///
    /// Fails only when the squared norm is exactly zero; tiny but nonzero norms
    /// go through and may overflow to infinities.
    pub fn inverse(self) -> Result<Quaternion, InvalidOperationError> {
        let norm_squared = self.norm_squared();
        if norm_squared == 0.0 {
            return Err(InvalidOperationError::DegenerateQuaternion);
        }

        let inv = 1.0 / norm_squared;
        Ok(Quaternion { w: self.w * inv, x: -self.x * inv, y: -self.y * inv, z: -self.z * inv })
    }

    /// Rotation matrix of a unit quaternion.
    ///
    /// The length is not checked; a non-unit input yields a matrix that is not a
    /// proper rotation.
    pub fn to_rotation_matrix(self) -> RotationMatrix {
        let xx = self.x * self.x;
        let xy = self.x * self.y;
        let xz = self.x * self.z;
        let xw = self.x * self.w;

        let yy = self.y * self.y;
        let yz = self.y * self.z;
        let yw = self.y * self.w;

        let zz = self.z * self.z;
        let zw = self.z * self.w;

        RotationMatrix::new(
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy - zw),
            2.0 * (xz + yw),
            2.0 * (xy + zw),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz - xw),
            2.0 * (xz - yw),
            2.0 * (yz + xw),
            1.0 - 2.0 * (xx + yy),
        )
    }

    /// Recovers a quaternion from a rotation matrix.
    ///
    /// Pivots on the trace, or on the largest diagonal entry when the trace is
    /// not positive, so the divisor never gets close to zero. The matrix is not
    /// validated: a non-rotation gives a meaningless quaternion and NaN entries
    /// give NaN.
    pub fn from_rotation_matrix(m: &RotationMatrix) -> Quaternion {
        let (m11, m12, m13) = (m.m11(), m.m12(), m.m13());
        let (m21, m22, m23) = (m.m21(), m.m22(), m.m23());
        let (m31, m32, m33) = (m.m31(), m.m32(), m.m33());

        let trace = m11 + m22 + m33;

        if trace > 0.0 {
            let s = 0.5 / (trace + 1.0).sqrt();
            Quaternion {
                w: 0.25 / s,
                x: (m32 - m23) * s,
                y: (m13 - m31) * s,
                z: (m21 - m12) * s,
            }
        } else if m11 > m22 && m11 > m33 {
            let s = 2.0 * (1.0 + m11 - m22 - m33).sqrt();
            Quaternion {
                w: (m32 - m23) / s,
                x: 0.25 * s,
                y: (m12 + m21) / s,
                z: (m13 + m31) / s,
            }
        } else if m22 > m33 {
            let s = 2.0 * (1.0 + m22 - m11 - m33).sqrt();
            Quaternion {
                w: (m13 - m31) / s,
                x: (m12 + m21) / s,
                y: 0.25 * s,
                z: (m23 + m32) / s,
            }
        } else {
            let s = 2.0 * (1.0 + m33 - m11 - m22).sqrt();
            Quaternion {
                w: (m21 - m12) / s,
                x: (m13 + m31) / s,
                y: (m23 + m32) / s,
                z: 0.25 * s,
            }
        }
    }
}

impl std::ops::Add for Quaternion {
    type Output = Quaternion;

    fn add(self, rhs: Quaternion) -> Quaternion {
        Quaternion { w: self.w + rhs.w, x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl std::ops::Sub for Quaternion {
    type Output = Quaternion;

    fn sub(self, rhs: Quaternion) -> Quaternion {
        Quaternion { w: self.w - rhs.w, x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

// Hamilton product
impl std::ops::Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        Quaternion {
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        }
    }
}

// -q, same rotation as q
impl std::ops::Neg for Quaternion {
    type Output = Quaternion;

    fn neg(self) -> Quaternion {
        Quaternion { w: -self.w, x: -self.x, y: -self.y, z: -self.z }
    }
}
