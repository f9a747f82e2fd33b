//! Verlet integration, Gauss-Seidel relaxation, containment and strain pruning.

use crate::constraint::Constraint;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::mesh::Mesh;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Smallest and largest strain over the active constraints.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StrainRange<F: Float> {
    pub min: F,
    pub max: F,
}

impl<F: Float> StrainRange<F> {
    /// Map `strain` into `[0, 1]` relative to this range.
    ///
    /// `None` when every active constraint carries the same strain.
    pub fn normalize(&self, strain: F) -> Option<F> {
        let span = self.max - self.min;
        if span > F::zero() {
            Some((strain - self.min) / span)
        } else {
            None
        }
    }
}

/// What a renderer needs to draw one constraint.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConstraintView<F: Float> {
    pub a: Vec2<F>,
    pub b: Vec2<F>,
    pub active: bool,
    pub strain: F,
}

/// Owns the lattice and advances it one fixed timestep at a time.
pub struct LatticeSolver<F: Float> {
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<Constraint<F>>,
    timestep: F,
    relaxation_iterations: usize,
}

impl<F: Float> LatticeSolver<F> {
    /// Take ownership of a particle list and the constraints indexing into it.
    pub fn new(
        particles: AllocVec<Particle<F>>,
        constraints: AllocVec<Constraint<F>>,
        timestep: F,
        relaxation_iterations: usize,
    ) -> Result<Self, PhysicsError> {
        if !(timestep > F::zero()) {
            return Err(PhysicsError::InvalidTimestep);
        }
        for c in &constraints {
            let (a, b) = c.endpoints();
            if a >= particles.len() || b >= particles.len() {
                return Err(PhysicsError::InvalidConstraint { a, b });
            }
        }
        Ok(LatticeSolver { particles, constraints, timestep, relaxation_iterations })
    }

    pub fn from_mesh(mesh: Mesh<F>, timestep: F, relaxation_iterations: usize) -> Result<Self, PhysicsError> {
        let (particles, constraints) = mesh.into_parts();
        Self::new(particles, constraints, timestep, relaxation_iterations)
    }

    /// Advance one timestep: integrate, relax, then clamp into `[min, max]`.
    ///
    /// Relaxation visits constraints in insertion order. Each pass sees the
    /// corrections of the constraints before it, so the order is part of the
    /// result.
    pub fn step<O: StepObserver>(&mut self, min: Vec2<F>, max: Vec2<F>, observer: &mut O) {
        for p in self.particles.iter_mut() {
            p.integrate(self.timestep);
        }
        observer.on_integrate();

        for pass in 0..self.relaxation_iterations {
            for c in self.constraints.iter() {
                c.relax(&mut self.particles);
            }
            observer.on_relaxation_pass(pass);
        }

        for p in self.particles.iter_mut() {
            p.contain_to_bounds(min, max);
        }
        observer.on_contain();

        observer.on_step_complete();
    }

    /// Strain extremes over active constraints, `None` if none are active.
    pub fn strain_range(&self) -> Option<StrainRange<F>> {
        self.constraints
            .iter()
            .filter(|c| c.is_active())
            .map(|c| c.strain(&self.particles))
            .fold(None, |range, s| match range {
                None => Some(StrainRange { min: s, max: s }),
                Some(r) => Some(StrainRange { min: r.min.min(s), max: r.max.max(s) }),
            })
    }

    /// Normalized strain of constraint `index`; `None` when it is inactive or
    /// the active strains have no spread.
    pub fn normalized_strain(&self, index: usize) -> Option<F> {
        let c = self.constraints.get(index).filter(|c| c.is_active())?;
        self.strain_range()?.normalize(c.strain(&self.particles))
    }

    /// Deactivate every active constraint whose normalized strain is at or
    /// below `threshold`. Returns how many were deactivated.
    ///
    /// With no active constraints, or identical strain everywhere, nothing
    /// is pruned.
    pub fn prune_low_strain(&mut self, threshold: F) -> usize {
        let Some(range) = self.strain_range() else {
            log::debug!("prune skipped: no active constraints");
            return 0;
        };
        if !(range.max > range.min) {
            log::debug!("prune skipped: uniform strain {}", range.min);
            return 0;
        }

        let particles = &self.particles;
        let mut pruned = 0;
        for c in self.constraints.iter_mut().filter(|c| c.is_active()) {
            match range.normalize(c.strain(particles)) {
                Some(n) if n <= threshold => {
                    c.deactivate();
                    pruned += 1;
                }
                _ => {}
            }
        }

        log::info!(
            "pruned {} constraints (strain {}..{}), {} of {} remain",
            pruned,
            range.min,
            range.max,
            self.active_count(),
            self.total_count()
        );
        pruned
    }

    pub fn active_count(&self) -> usize {
        self.constraints.iter().filter(|c| c.is_active()).count()
    }

    pub fn total_count(&self) -> usize { self.constraints.len() }

    /// Fraction of constraints still active, `1` for an empty lattice.
    pub fn mass_retained(&self) -> F {
        if self.constraints.is_empty() {
            return F::one();
        }
        F::from_usize(self.active_count()) / F::from_usize(self.total_count())
    }

    /// Endpoint positions, active flag and strain of every constraint.
    pub fn constraint_views(&self) -> impl Iterator<Item = ConstraintView<F>> + '_ {
        self.constraints.iter().map(move |c| {
            let (a, b) = c.endpoints();
            ConstraintView {
                a: self.particles[a].pos,
                b: self.particles[b].pos,
                active: c.is_active(),
                strain: c.strain(&self.particles),
            }
        })
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn constraints(&self) -> &[Constraint<F>] { &self.constraints }
    pub fn particle(&self, index: usize) -> &Particle<F> { &self.particles[index] }
    pub fn particle_mut(&mut self, index: usize) -> &mut Particle<F> { &mut self.particles[index] }
    pub fn constraint(&self, index: usize) -> &Constraint<F> { &self.constraints[index] }
    pub fn timestep(&self) -> F { self.timestep }
    pub fn relaxation_iterations(&self) -> usize { self.relaxation_iterations }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoOpStepObserver;
    use alloc::vec;

    /// Three particles on a line, two links of length 1.
    fn line() -> LatticeSolver<f64> {
        let particles = vec![
            Particle::fixed(0, Vec2::new(0.0, 0.0), Vec2::zero()),
            Particle::new(1, Vec2::new(1.0, 0.0), Vec2::zero()),
            Particle::new(2, Vec2::new(2.0, 0.0), Vec2::zero()),
        ];
        let constraints = vec![
            Constraint::between(0, 1, &particles, 1.0).unwrap(),
            Constraint::between(1, 2, &particles, 1.0).unwrap(),
        ];
        LatticeSolver::new(particles, constraints, 1.0 / 60.0, 1).unwrap()
    }

    #[test]
    fn rejects_dangling_constraint() {
        let particles = vec![
            Particle::new(0, Vec2::new(0.0f64, 0.0), Vec2::zero()),
            Particle::new(1, Vec2::new(1.0, 0.0), Vec2::zero()),
        ];
        let constraints = vec![Constraint::between(0, 1, &particles, 1.0).unwrap()];
        let result = LatticeSolver::new(particles[..1].to_vec(), constraints, 0.1, 1);
        assert_eq!(result.err(), Some(PhysicsError::InvalidConstraint { a: 0, b: 1 }));
    }

    #[test]
    fn strain_range_ignores_inactive() {
        let mut solver = line();
        solver.particle_mut(2).pos = Vec2::new(2.5, 0.0);
        let range = solver.strain_range().unwrap();
        assert_eq!(range.min, 0.0);
        assert!((range.max - 0.5).abs() < 1e-12);

        assert_eq!(solver.prune_low_strain(0.0), 1);
        let range = solver.strain_range().unwrap();
        assert_eq!(range.min, range.max);
    }

    #[test]
    fn empty_range_prunes_nothing() {
        let mut solver = LatticeSolver::<f32>::new(vec![], vec![], 0.1, 4).unwrap();
        assert_eq!(solver.strain_range(), None);
        assert_eq!(solver.prune_low_strain(1.0), 0);
        assert_eq!(solver.mass_retained(), 1.0);
    }

    #[test]
    fn uniform_strain_prunes_nothing() {
        let mut solver = line();
        assert_eq!(solver.prune_low_strain(1.0), 0);
        assert_eq!(solver.active_count(), 2);
    }

    #[test]
    fn normalized_strain_spans_unit_interval() {
        let mut solver = line();
        solver.particle_mut(2).pos = Vec2::new(2.5, 0.0);
        assert_eq!(solver.normalized_strain(0), Some(0.0));
        assert_eq!(solver.normalized_strain(1), Some(1.0));
        assert_eq!(solver.normalized_strain(7), None);
    }

    #[test]
    fn views_report_endpoints_and_state() {
        let mut solver = line();
        solver.particle_mut(2).pos = Vec2::new(3.0, 0.0);
        solver.prune_low_strain(0.5);
        let views: AllocVec<_> = solver.constraint_views().collect();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].a, Vec2::new(0.0, 0.0));
        assert_eq!(views[0].b, Vec2::new(1.0, 0.0));
        assert!(!views[0].active);
        assert!(views[1].active);
        assert!((views[1].strain - 1.0).abs() < 1e-12);
        assert!((solver.mass_retained() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn step_contains_free_particles() {
        let mut solver = line();
        solver.particle_mut(2).pos = Vec2::new(2.0, 9.0);
        solver.particle_mut(2).prev_pos = Vec2::new(2.0, 9.0);
        let max = Vec2::new(5.0, 1.0);
        solver.step(Vec2::new(-5.0, -1.0), max, &mut NoOpStepObserver);
        assert!(solver.particles().iter().all(|p| p.pos.y <= 1.0));
        assert_eq!(solver.particle(0).pos, Vec2::new(0.0, 0.0));
    }
}
