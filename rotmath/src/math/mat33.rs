use bytemuck::{Pod, Zeroable};

/// Row-major 3x3 matrix, usually a rotation.
///
/// Entries are stored verbatim and never validated: orthogonality and a unit
/// determinant are the caller's business.
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
#[repr(transparent)]
pub struct RotationMatrix([f64; 9]);

impl RotationMatrix {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m11: f64,
        m12: f64,
        m13: f64,
        m21: f64,
        m22: f64,
        m23: f64,
        m31: f64,
        m32: f64,
        m33: f64,
    ) -> RotationMatrix {
        RotationMatrix([
            m11, m12, m13, //
            m21, m22, m23, //
            m31, m32, m33,
        ])
    }

    pub fn identity() -> RotationMatrix {
        RotationMatrix([
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        ])
    }

    /// Entries in row-major order.
    pub fn as_array(&self) -> &[f64; 9] {
        &self.0
    }

    pub fn m11(&self) -> f64 {
        self.0[0]
    }

    pub fn m12(&self) -> f64 {
        self.0[1]
    }

    pub fn m13(&self) -> f64 {
        self.0[2]
    }

    pub fn m21(&self) -> f64 {
        self.0[3]
    }

    pub fn m22(&self) -> f64 {
        self.0[4]
    }

    pub fn m23(&self) -> f64 {
        self.0[5]
    }

    pub fn m31(&self) -> f64 {
        self.0[6]
    }

    pub fn m32(&self) -> f64 {
        self.0[7]
    }

    pub fn m33(&self) -> f64 {
        self.0[8]
    }
}
