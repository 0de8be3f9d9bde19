//! Field-of-view predicates used to filter a store.

use traxel_core::Timestep;

use crate::bounds::BoundingBox;

/// A region over `(t, x, y, z)`.
///
/// Any `Fn(Timestep, f64, f64, f64) -> bool` closure is a field of view,
/// which is convenient for ad-hoc regions.
pub trait FieldOfView {
    /// Whether the point lies inside the region.
    fn contains(&self, timestep: Timestep, x: f64, y: f64, z: f64) -> bool;
}

impl<F> FieldOfView for F
where
    F: Fn(Timestep, f64, f64, f64) -> bool,
{
    fn contains(&self, timestep: Timestep, x: f64, y: f64, z: f64) -> bool {
        self(timestep, x, y, z)
    }
}

/// Axis-aligned, time-bounded box with inclusive bounds.
///
/// Bounds are stored as `[t, x, y, z]`; time is compared as `f64` so a box
/// may use fractional or infinite temporal limits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxFieldOfView {
    lower: [f64; 4],
    upper: [f64; 4],
}

impl BoxFieldOfView {
    /// Box from lower corner `(lt, lx, ly, lz)` to upper corner
    /// `(ut, ux, uy, uz)`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(lt: f64, lx: f64, ly: f64, lz: f64, ut: f64, ux: f64, uy: f64, uz: f64) -> Self {
        Self {
            lower: [lt, lx, ly, lz],
            upper: [ut, ux, uy, uz],
        }
    }

    /// Unbounded region containing every point.
    pub fn everything() -> Self {
        Self {
            lower: [f64::NEG_INFINITY; 4],
            upper: [f64::INFINITY; 4],
        }
    }

    /// Replace both corners.
    #[allow(clippy::too_many_arguments)]
    pub fn set_bounds(
        &mut self,
        lt: f64,
        lx: f64,
        ly: f64,
        lz: f64,
        ut: f64,
        ux: f64,
        uy: f64,
        uz: f64,
    ) -> &mut Self {
        self.lower = [lt, lx, ly, lz];
        self.upper = [ut, ux, uy, uz];
        self
    }

    /// Lower corner `[t, x, y, z]`.
    pub fn lower(&self) -> &[f64; 4] {
        &self.lower
    }

    /// Upper corner `[t, x, y, z]`.
    pub fn upper(&self) -> &[f64; 4] {
        &self.upper
    }
}

impl From<BoundingBox> for BoxFieldOfView {
    fn from(bb: BoundingBox) -> Self {
        let [lt, lx, ly, lz, ut, ux, uy, uz] = bb.to_array();
        Self::new(lt, lx, ly, lz, ut, ux, uy, uz)
    }
}

impl FieldOfView for BoxFieldOfView {
    fn contains(&self, timestep: Timestep, x: f64, y: f64, z: f64) -> bool {
        let p = [f64::from(timestep.0), x, y, z];
        p.iter()
            .zip(self.lower.iter().zip(self.upper.iter()))
            .all(|(v, (lo, hi))| lo <= v && v <= hi)
    }
}
