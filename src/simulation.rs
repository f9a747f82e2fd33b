//! A configured lattice run: mesh, solver, bounds and a step counter.

use crate::config::{Bounds, SimulationConfig};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::mesh::Mesh;
use crate::observer::StepObserver;
use crate::solver::LatticeSolver;

/// Everything a driver needs to run the sculpting loop.
///
/// There are no timers here. The caller decides when to call [`advance`],
/// [`step`] or [`prune`].
///
/// [`advance`]: Simulation::advance
/// [`step`]: Simulation::step
/// [`prune`]: Simulation::prune
pub struct Simulation<F: Float> {
    solver: LatticeSolver<F>,
    bounds: Bounds<F>,
    prune_threshold: F,
    prune_interval: usize,
    steps: u64,
}

impl<F: Float> Simulation<F> {
    pub fn new(config: &SimulationConfig<F>) -> Result<Self, PhysicsError> {
        config.validate()?;
        let mesh = Mesh::generate(&config.mesh)?;
        let solver = LatticeSolver::from_mesh(mesh, config.timestep, config.relaxation_iterations)?;
        Ok(Simulation {
            solver,
            bounds: config.bounds,
            prune_threshold: config.prune_threshold,
            prune_interval: config.prune_interval,
            steps: 0,
        })
    }

    pub fn step<O: StepObserver>(&mut self, observer: &mut O) {
        self.solver.step(self.bounds.min, self.bounds.max, observer);
        self.steps += 1;
        log::trace!("step {}: {} active constraints", self.steps, self.solver.active_count());
    }

    /// Prune at the configured threshold.
    pub fn prune<O: StepObserver>(&mut self, observer: &mut O) -> usize {
        let pruned = self.solver.prune_low_strain(self.prune_threshold);
        observer.on_prune(pruned);
        pruned
    }

    /// True on every `prune_interval`-th step; never when the interval is 0.
    pub fn prune_due(&self) -> bool {
        self.prune_interval > 0 && self.steps > 0 && self.steps % self.prune_interval as u64 == 0
    }

    /// One step, followed by a prune when one is due. Returns the prune count.
    pub fn advance<O: StepObserver>(&mut self, observer: &mut O) -> usize {
        self.step(observer);
        if self.prune_due() {
            self.prune(observer)
        } else {
            0
        }
    }

    pub fn solver(&self) -> &LatticeSolver<F> { &self.solver }
    pub fn solver_mut(&mut self) -> &mut LatticeSolver<F> { &mut self.solver }
    pub fn bounds(&self) -> Bounds<F> { self.bounds }
    pub fn steps(&self) -> u64 { self.steps }
}
