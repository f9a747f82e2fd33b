//! Verlet lattice relaxation with strain-based pruning.
//!
//! `lattice-sculpt` builds a 2D block of particles joined by elastic
//! constraints, lets it sag under gravity between two supports, and
//! repeatedly removes the constraints that carry the least relative strain.
//! What is left is a rough picture of where material does structural work.
//!
//! # Features
//!
//! - **Verlet integration**: position-based dynamics with implicit velocity
//! - **Gauss-Seidel relaxation**: fixed-order passes over distance constraints
//! - **Box containment**: per-axis clamp into an axis-aligned box
//! - **Mesh generator**: regular grid, six constraints per cell
//! - **Strain pruning**: irreversible removal of low-strain constraints
//! - **Observable**: monitor steps and prunes via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! # Example
//! ```
//! use lattice_sculpt::{NoOpStepObserver, Simulation, SimulationConfig};
//!
//! let config: SimulationConfig<f64> = SimulationConfig::new()
//!     .with_resolution(12)
//!     .with_prune_interval(30);
//! let mut sim = Simulation::new(&config).unwrap();
//! for _ in 0..90 {
//!     sim.advance(&mut NoOpStepObserver);
//! }
//! assert!(sim.solver().active_count() <= sim.solver().total_count());
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod mesh;
pub mod solver;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::Particle;
pub use constraint::{Constraint, ConstraintState};
pub use mesh::Mesh;
pub use solver::{LatticeSolver, StrainRange, ConstraintView};
pub use simulation::Simulation;
pub use config::{SimulationConfig, MeshConfig, Bounds};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
