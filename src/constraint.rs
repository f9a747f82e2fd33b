//! Distance constraints between lattice particles, with a prune lifecycle.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;

/// Lifecycle of a constraint. The only transition is `Active -> Inactive`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConstraintState {
    Active,
    Inactive,
}

/// An elastic link between two particles, addressed by index.
///
/// Length, direction and strain are read from the live particle positions
/// on every call; nothing derived is cached.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint<F: Float> {
    a: usize,
    b: usize,
    rest_length: F,
    stiffness: F,
    state: ConstraintState,
}

pub(crate) fn check_stiffness<F: Float>(stiffness: F) -> Result<(), PhysicsError> {
    if stiffness > F::zero() && stiffness <= F::one() {
        Ok(())
    } else {
        Err(PhysicsError::InvalidStiffness)
    }
}

impl<F: Float> Constraint<F> {
    /// Link particles `a` and `b`, taking their current distance as the rest length.
    ///
    /// Fails with [`PhysicsError::InvalidConstraint`] if either index is not in
    /// `particles`, if `a == b`, or if the two particles coincide.
    pub fn between(
        a: usize,
        b: usize,
        particles: &[Particle<F>],
        stiffness: F,
    ) -> Result<Self, PhysicsError> {
        check_stiffness(stiffness)?;
        let (pa, pb) = match (particles.get(a), particles.get(b)) {
            (Some(pa), Some(pb)) if a != b => (pa, pb),
            _ => return Err(PhysicsError::InvalidConstraint { a, b }),
        };
        let rest_length = pa.pos.distance(pb.pos);
        if !(rest_length > F::zero()) {
            return Err(PhysicsError::InvalidConstraint { a, b });
        }
        Ok(Constraint {
            a,
            b,
            rest_length,
            stiffness,
            state: ConstraintState::Active,
        })
    }

    /// One relaxation pass over this constraint.
    ///
    /// Each endpoint takes half of the length error, scaled by stiffness.
    /// Fixed endpoints are snapped back onto their previous position.
    pub fn relax(&self, particles: &mut [Particle<F>]) {
        if !self.is_active() {
            return;
        }
        let error = self.rest_length - self.current_length(particles);
        let offset = self.direction(particles).scale(error * F::half() * self.stiffness);

        let a = &mut particles[self.a];
        a.pos = a.pos - offset;
        a.restore_if_fixed();

        let b = &mut particles[self.b];
        b.pos = b.pos + offset;
        b.restore_if_fixed();
    }

    pub fn current_length(&self, particles: &[Particle<F>]) -> F {
        particles[self.a].pos.distance(particles[self.b].pos)
    }

    /// Unit vector from the first endpoint to the second; zero if they coincide.
    pub fn direction(&self, particles: &[Particle<F>]) -> Vec2<F> {
        (particles[self.b].pos - particles[self.a].pos).normalize()
    }

    /// `|current - rest| / rest`.
    pub fn strain(&self, particles: &[Particle<F>]) -> F {
        (self.current_length(particles) - self.rest_length).abs() / self.rest_length
    }

    /// Take the current distance as the new rest length.
    pub fn reset_rest_length(&mut self, particles: &[Particle<F>]) -> Result<(), PhysicsError> {
        let len = self.current_length(particles);
        if !(len > F::zero()) {
            return Err(PhysicsError::InvalidConstraint { a: self.a, b: self.b });
        }
        self.rest_length = len;
        Ok(())
    }

    /// Remove this constraint from the lattice for good.
    pub fn deactivate(&mut self) {
        self.state = ConstraintState::Inactive;
    }

    pub fn is_active(&self) -> bool {
        self.state == ConstraintState::Active
    }

    pub fn state(&self) -> ConstraintState { self.state }
    pub fn endpoints(&self) -> (usize, usize) { (self.a, self.b) }
    pub fn rest_length(&self) -> F { self.rest_length }
    pub fn stiffness(&self) -> F { self.stiffness }
}
