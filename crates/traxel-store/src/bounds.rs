//! Tight `(t, x, y, z)` envelopes.

use traxel_core::{Position, Timestep};

/// Tight bounding box over a set of traxels.
///
/// Minimum and maximum are taken per axis independently, so the corners
/// need not coincide with any single traxel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    /// Earliest timestep.
    pub min_timestep: Timestep,
    /// Per-axis minimum coordinates.
    pub min: Position,
    /// Latest timestep.
    pub max_timestep: Timestep,
    /// Per-axis maximum coordinates.
    pub max: Position,
}

impl BoundingBox {
    /// Degenerate box containing exactly one point.
    pub fn point(timestep: Timestep, position: Position) -> Self {
        Self {
            min_timestep: timestep,
            min: position,
            max_timestep: timestep,
            max: position,
        }
    }

    /// Grow the box to cover another point.
    pub fn include(&mut self, timestep: Timestep, p: Position) {
        self.min_timestep = self.min_timestep.min(timestep);
        self.max_timestep = self.max_timestep.max(timestep);
        self.min = Position::new(self.min.x.min(p.x), self.min.y.min(p.y), self.min.z.min(p.z));
        self.max = Position::new(self.max.x.max(p.x), self.max.y.max(p.y), self.max.z.max(p.z));
    }

    /// Whether the point lies inside the box (bounds inclusive).
    pub fn contains(&self, timestep: Timestep, p: Position) -> bool {
        (self.min_timestep..=self.max_timestep).contains(&timestep)
            && (self.min.x..=self.max.x).contains(&p.x)
            && (self.min.y..=self.max.y).contains(&p.y)
            && (self.min.z..=self.max.z).contains(&p.z)
    }

    /// `[lt, lx, ly, lz, ut, ux, uy, uz]`.
    pub fn to_array(&self) -> [f64; 8] {
        [
            f64::from(self.min_timestep.0),
            self.min.x,
            self.min.y,
            self.min.z,
            f64::from(self.max_timestep.0),
            self.max.x,
            self.max.y,
            self.max.z,
        ]
    }
}
