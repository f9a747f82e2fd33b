//! Configuration surface for mesh generation and stepping.

use crate::constraint::check_stiffness;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inputs of the regular-mesh generator.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshConfig<F: Float> {
    /// Number of particle columns along the width.
    pub resolution: usize,
    pub width: F,
    pub height: F,
    /// Correction fraction per relaxation pass, in (0, 1].
    pub stiffness: F,
    /// Acceleration along +y applied to every particle.
    pub gravity: F,
}

impl<F: Float> MeshConfig<F> {
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.resolution < 2 || !(self.width > F::zero()) || !(self.height >= F::zero()) {
            return Err(PhysicsError::InvalidGridDimensions);
        }
        check_stiffness(self.stiffness)
    }
}

impl<F: Float> Default for MeshConfig<F> {
    fn default() -> Self {
        MeshConfig {
            resolution: 30,
            width: F::two(),
            height: F::one(),
            stiffness: F::one(),
            gravity: F::from_f32(9.81),
        }
    }
}

/// Axis-aligned containment box.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds<F: Float> {
    pub min: Vec2<F>,
    pub max: Vec2<F>,
}

impl<F: Float> Bounds<F> {
    pub fn new(min: Vec2<F>, max: Vec2<F>) -> Self {
        Bounds { min, max }
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.min.x <= self.max.x && self.min.y <= self.max.y {
            Ok(())
        } else {
            Err(PhysicsError::InvalidBounds)
        }
    }
}

impl<F: Float> Default for Bounds<F> {
    fn default() -> Self {
        Bounds {
            min: Vec2::new(-F::two(), -F::two()),
            max: Vec2::new(F::two(), F::two()),
        }
    }
}

/// Full configuration of a lattice-sculpting run.
///
/// # Builder Pattern
/// ```
/// use lattice_sculpt::config::SimulationConfig;
/// use lattice_sculpt::vec::Vec2;
///
/// let config: SimulationConfig<f32> = SimulationConfig::new()
///     .with_resolution(20)
///     .with_size(2.0, 1.0)
///     .with_gravity(9.81)
///     .with_relaxation_iterations(30)
///     .with_prune_threshold(0.05)
///     .with_bounds(Vec2::new(-2.0, -2.0), Vec2::new(2.0, 2.0));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationConfig<F: Float> {
    pub mesh: MeshConfig<F>,
    /// Simulated seconds per step. Default: 1/60.
    pub timestep: F,
    /// Relaxation passes per step. Default: 20.
    pub relaxation_iterations: usize,
    /// Normalized-strain cutoff at or below which a constraint is pruned. Default: 0.1.
    pub prune_threshold: F,
    /// Steps between pruning passes; 0 disables automatic pruning. Default: 60.
    pub prune_interval: usize,
    pub bounds: Bounds<F>,
}

impl<F: Float> SimulationConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimulationConfig {
            mesh: MeshConfig::default(),
            timestep: F::one() / F::from_f32(60.0),
            relaxation_iterations: 20,
            prune_threshold: F::from_f32(0.1),
            prune_interval: 60,
            bounds: Bounds::default(),
        }
    }

    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.mesh.resolution = resolution;
        self
    }

    pub fn with_size(mut self, width: F, height: F) -> Self {
        self.mesh.width = width;
        self.mesh.height = height;
        self
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.mesh.stiffness = stiffness;
        self
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.mesh.gravity = gravity;
        self
    }

    pub fn with_timestep(mut self, timestep: F) -> Self {
        self.timestep = timestep;
        self
    }

    pub fn with_relaxation_iterations(mut self, iterations: usize) -> Self {
        self.relaxation_iterations = iterations;
        self
    }

    pub fn with_prune_threshold(mut self, threshold: F) -> Self {
        self.prune_threshold = threshold;
        self
    }

    pub fn with_prune_interval(mut self, interval: usize) -> Self {
        self.prune_interval = interval;
        self
    }

    pub fn with_bounds(mut self, min: Vec2<F>, max: Vec2<F>) -> Self {
        self.bounds = Bounds::new(min, max);
        self
    }

    /// Check everything that would otherwise fail later during construction.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        self.mesh.validate()?;
        if !(self.timestep > F::zero()) {
            return Err(PhysicsError::InvalidTimestep);
        }
        self.bounds.validate()
    }
}

impl<F: Float> Default for SimulationConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(SimulationConfig::<f32>::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_grid() {
        let config = SimulationConfig::<f64>::new().with_resolution(1);
        assert_eq!(config.validate(), Err(PhysicsError::InvalidGridDimensions));
        let config = SimulationConfig::<f64>::new().with_size(0.0, 1.0);
        assert_eq!(config.validate(), Err(PhysicsError::InvalidGridDimensions));
    }

    #[test]
    fn rejects_bad_stiffness_timestep_and_bounds() {
        let base = SimulationConfig::<f64>::new();
        assert_eq!(base.clone().with_stiffness(0.0).validate(), Err(PhysicsError::InvalidStiffness));
        assert_eq!(base.clone().with_timestep(0.0).validate(), Err(PhysicsError::InvalidTimestep));
        assert_eq!(
            base.with_bounds(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)).validate(),
            Err(PhysicsError::InvalidBounds)
        );
    }
}
