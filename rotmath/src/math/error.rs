use thiserror::Error;

/// Operations on a value that has no meaningful result for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidOperationError {
    /// The quaternion's squared norm is exactly zero, so it has no inverse.
    #[error("quaternion has zero norm, cannot compute inverse")]
    DegenerateQuaternion,
}
