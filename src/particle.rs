//! Verlet particles with position history.

use crate::float::Float;
use crate::vec::Vec2;

/// A lattice node: Verlet point mass with implicit velocity.
///
/// `index` is the particle's stable identity inside the owning solver.
/// Constraints refer to particles through it.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub acceleration: Vec2<F>,
    pub fixed: bool,
    pub index: usize,
}

impl<F: Float> Particle<F> {
    /// A free particle at rest.
    pub fn new(index: usize, pos: Vec2<F>, acceleration: Vec2<F>) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            acceleration,
            fixed: false,
            index,
        }
    }

    /// A particle anchored at `pos` for the whole run.
    pub fn fixed(index: usize, pos: Vec2<F>, acceleration: Vec2<F>) -> Self {
        Particle {
            fixed: true,
            ..Particle::new(index, pos, acceleration)
        }
    }

    /// Verlet step: `x' = 2x - x_prev + a·dt²`.
    ///
    /// A fixed particle takes its pre-step previous position instead, so it
    /// stays where it was anchored.
    pub fn integrate(&mut self, dt: F) {
        let mut new_pos = self.pos.scale(F::two()) - self.prev_pos + self.acceleration.scale(dt * dt);
        if self.fixed {
            new_pos = self.prev_pos;
        }
        self.prev_pos = self.pos;
        self.pos = new_pos;
    }

    /// Clamp the position into the box `[min, max]`, one axis at a time.
    ///
    /// `prev_pos` is left alone, so the clamped displacement shows up as an
    /// apparent velocity on the next integration. Fixed particles are skipped.
    pub fn contain_to_bounds(&mut self, min: Vec2<F>, max: Vec2<F>) {
        if self.fixed {
            return;
        }
        self.pos = self.pos.clamp(min, max);
    }

    /// Snap an anchored particle back onto its previous position.
    pub(crate) fn restore_if_fixed(&mut self) {
        if self.fixed {
            self.pos = self.prev_pos;
        }
    }

    /// Displacement over the last step (velocity times `dt`).
    pub fn velocity_raw(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }
}
