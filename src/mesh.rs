//! Regular lattice generator: a grid of particles, each cell fully triangulated.

use crate::config::MeshConfig;
use crate::constraint::Constraint;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Particles and constraints of a freshly generated block.
#[derive(Clone, Debug)]
pub struct Mesh<F: Float> {
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<Constraint<F>>,
    columns: usize,
    rows: usize,
}

/// Row count for a block of `width x height` sampled with `resolution` columns.
///
/// `round(resolution * height / width)` with halves rounding up, never below 1.
pub fn row_count<F: Float>(resolution: usize, width: F, height: F) -> usize {
    (F::from_usize(resolution) * height / width).round_half_up().to_usize().max(1)
}

impl<F: Float> Mesh<F> {
    /// Build a block of `width x height` centered on the origin.
    ///
    /// Particle at (ix, iy) has index `iy * columns + ix` and sits at
    /// `(hx·ix - W/2, hy·iy - H/2)`. The two ends of row 0 are fixed, which
    /// makes the block a bridge spanning two supports.
    ///
    /// Every grid cell contributes six constraints: its four edges and both
    /// diagonals. Edges shared by neighbouring cells appear once per cell.
    /// A single-row mesh has no cells and therefore no constraints.
    pub fn generate(config: &MeshConfig<F>) -> Result<Self, PhysicsError> {
        config.validate()?;

        let columns = config.resolution;
        let rows = row_count(columns, config.width, config.height);
        let hx = config.width / F::from_usize(columns - 1);
        let hy = if rows > 1 {
            config.height / F::from_usize(rows - 1)
        } else {
            F::zero()
        };
        let half_w = config.width * F::half();
        let half_h = config.height * F::half();
        let gravity = Vec2::new(F::zero(), config.gravity);

        let mut particles = AllocVec::with_capacity(columns * rows);
        for iy in 0..rows {
            for ix in 0..columns {
                let index = iy * columns + ix;
                let pos = Vec2::new(
                    hx * F::from_usize(ix) - half_w,
                    hy * F::from_usize(iy) - half_h,
                );
                let support = iy == 0 && (ix == 0 || ix == columns - 1);
                particles.push(if support {
                    Particle::fixed(index, pos, gravity)
                } else {
                    Particle::new(index, pos, gravity)
                });
            }
        }

        let cells = (columns - 1) * (rows - 1);
        let mut constraints = AllocVec::with_capacity(cells * 6);
        for iy in 0..(rows - 1) {
            for ix in 0..(columns - 1) {
                let bl = iy * columns + ix;
                let br = bl + 1;
                let tl = bl + columns;
                let tr = tl + 1;
                for (a, b) in [(bl, br), (tl, tr), (bl, tl), (br, tr), (bl, tr), (br, tl)] {
                    constraints.push(Constraint::between(a, b, &particles, config.stiffness)?);
                }
            }
        }

        log::debug!(
            "generated {}x{} lattice: {} particles, {} constraints",
            columns,
            rows,
            particles.len(),
            constraints.len()
        );

        Ok(Mesh { particles, constraints, columns, rows })
    }

    pub fn index(&self, ix: usize, iy: usize) -> usize {
        iy * self.columns + ix
    }

    pub fn particle_at(&self, ix: usize, iy: usize) -> &Particle<F> {
        &self.particles[self.index(ix, iy)]
    }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn constraints(&self) -> &[Constraint<F>] { &self.constraints }
    pub fn columns(&self) -> usize { self.columns }
    pub fn rows(&self) -> usize { self.rows }

    /// Hand the particle and constraint lists over to their new owner.
    pub fn into_parts(self) -> (AllocVec<Particle<F>>, AllocVec<Constraint<F>>) {
        (self.particles, self.constraints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(resolution: usize, width: f64, height: f64) -> MeshConfig<f64> {
        MeshConfig { resolution, width, height, stiffness: 1.0, gravity: 0.0 }
    }

    #[test]
    fn row_count_rounds_half_up() {
        assert_eq!(row_count(4, 8.0f64, 5.0), 3); // 2.5
        assert_eq!(row_count(4, 8.0f64, 3.0), 2); // 1.5
        assert_eq!(row_count(10, 1.0f64, 0.01), 1); // 0.1 -> 0 -> clamped
    }

    #[test]
    fn rectangular_constraint_count() {
        let mesh = Mesh::generate(&config(4, 3.0, 2.0)).unwrap();
        assert_eq!(mesh.columns(), 4);
        assert_eq!(mesh.rows(), 3);
        assert_eq!(mesh.particles().len(), 12);
        // (4-1) * (3-1) cells, six links each
        assert_eq!(mesh.constraints().len(), 36);
    }

    #[test]
    fn block_is_centered() {
        let mesh = Mesh::generate(&config(5, 4.0, 2.0)).unwrap();
        let first = mesh.particle_at(0, 0).pos;
        let last = mesh.particle_at(mesh.columns() - 1, mesh.rows() - 1).pos;
        assert!((first.x + 2.0).abs() < 1e-12 && (first.y + 1.0).abs() < 1e-12);
        assert!((last.x - 2.0).abs() < 1e-12 && (last.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn gravity_is_applied_along_y() {
        let mesh = Mesh::generate(&MeshConfig { gravity: -3.0, ..config(3, 1.0, 1.0) }).unwrap();
        assert!(mesh.particles().iter().all(|p| p.acceleration == Vec2::new(0.0, -3.0)));
    }

    #[test]
    fn rejects_single_column() {
        assert_eq!(
            Mesh::generate(&config(1, 1.0, 1.0)).unwrap_err(),
            PhysicsError::InvalidGridDimensions
        );
    }
}
