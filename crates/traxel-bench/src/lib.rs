//! Benchmark profiles for the traxel store.
//!
//! - [`reference_store`]: 100 timesteps x 100 traxels (10K traxels)
//! - [`stress_store`]: 200 timesteps x 500 traxels (100K traxels)
//! - [`central_fov`]: a field of view covering the middle of the scatter volume

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use traxel_core::Traxel;
use traxel_store::{BoxFieldOfView, StoreError, TraxelStore};
use traxel_test_utils::scatter;

/// Timesteps in the reference profile.
pub const REFERENCE_TIMESTEPS: i32 = 100;
/// Traxels per timestep in the reference profile.
pub const REFERENCE_PER_TIMESTEP: u32 = 100;

/// Traxels for the reference profile, in generation order.
pub fn reference_traxels(seed: u64) -> Vec<Traxel> {
    scatter(seed, REFERENCE_TIMESTEPS, REFERENCE_PER_TIMESTEP)
}

/// Build the reference benchmark store (10K traxels).
pub fn reference_store(seed: u64) -> Result<TraxelStore, StoreError> {
    TraxelStore::from_traxels(reference_traxels(seed))
}

/// Build the stress benchmark store (100K traxels).
pub fn stress_store(seed: u64) -> Result<TraxelStore, StoreError> {
    TraxelStore::from_traxels(scatter(seed, 200, 500))
}

/// Field of view over the middle half of the scatter volume and timesteps.
///
/// Scatter coordinates lie in `[0, 1000)` on every axis, so this box keeps
/// roughly an eighth of each timestep's traxels.
pub fn central_fov(timesteps: i32) -> BoxFieldOfView {
    let t0 = f64::from(timesteps / 4);
    let t1 = f64::from(timesteps - timesteps / 4);
    BoxFieldOfView::new(t0, 250.0, 250.0, 250.0, t1, 750.0, 750.0, 750.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use traxel_store::filter_by_field_of_view;

    #[test]
    fn reference_store_has_expected_size() {
        let store = reference_store(42).unwrap();
        assert_eq!(store.len(), 10_000);
        assert_eq!(store.timesteps().len(), 100);
    }

    #[test]
    fn reference_store_is_deterministic() {
        let a = reference_store(42).unwrap();
        let b = reference_store(42).unwrap();
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.features, y.features);
        }
    }

    #[test]
    fn central_fov_keeps_a_strict_subset() {
        let store = reference_store(42).unwrap();
        let (_, kept) = filter_by_field_of_view(&store, &central_fov(REFERENCE_TIMESTEPS)).unwrap();
        assert!(kept > 0);
        assert!(kept < store.len());
    }
}
