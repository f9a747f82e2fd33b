//! Error types for lattice construction and configuration.

use core::fmt;

/// Errors raised while building particles, constraints or meshes.
///
/// Nothing here is produced while stepping: integration and relaxation are
/// total over finite inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Constraint endpoints are missing, identical, or coincident.
    InvalidConstraint { a: usize, b: usize },
    /// Stiffness must be in (0, 1].
    InvalidStiffness,
    /// Mesh needs at least two columns, a positive width and a non-negative height.
    InvalidGridDimensions,
    /// Timestep must be positive.
    InvalidTimestep,
    /// Bounds minimum must not exceed the maximum on either axis.
    InvalidBounds,
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidConstraint { a, b } => {
                write!(f, "invalid constraint between particles {} and {}", a, b)
            }
            PhysicsError::InvalidStiffness => write!(f, "stiffness must be in (0, 1]"),
            PhysicsError::InvalidGridDimensions => {
                write!(f, "mesh needs resolution >= 2, width > 0 and height >= 0")
            }
            PhysicsError::InvalidTimestep => write!(f, "timestep must be positive"),
            PhysicsError::InvalidBounds => write!(f, "bounds minimum exceeds maximum"),
        }
    }
}

impl core::error::Error for PhysicsError {}
