//! Aggregate queries over a [`TraxelStore`].
//!
//! These are the read-only operations a downstream tracker relies on:
//! the global envelope, per-timestep grouping, and field-of-view filtering.
//! Coordinate extraction failures always propagate; no traxel is silently
//! skipped or placed at a default position.

use traxel_core::Traxel;

use crate::bounds::BoundingBox;
use crate::error::StoreError;
use crate::fov::FieldOfView;
use crate::store::TraxelStore;

/// All traxels of one timestep, ascending by id.
pub type TimestepBucket<'a> = Vec<&'a Traxel>;

/// Tight bounding box over every traxel, using each traxel's own locator.
///
/// # Errors
///
/// - [`StoreError::EmptyStore`] if the store has no traxels.
/// - [`StoreError::Locator`] if any traxel's coordinates cannot be extracted.
/// - [`StoreError::NonFiniteCoordinate`] if any coordinate is NaN or infinite.
pub fn bounding_box(store: &TraxelStore) -> Result<BoundingBox, StoreError> {
    let mut traxels = store.iter();
    let first = traxels.next().ok_or(StoreError::EmptyStore)?;
    let mut bb = BoundingBox::point(first.timestep, locate(first)?);
    for t in traxels {
        bb.include(t.timestep, locate(t)?);
    }
    Ok(bb)
}

/// One bucket per timestep from earliest to latest inclusive.
///
/// Timesteps without traxels get an empty bucket, so `buckets[i]` holds the
/// traxels of `earliest + i`. An empty store yields no buckets.
///
/// # Examples
///
/// ```
/// use traxel_core::{FeatureMap, Traxel};
/// use traxel_store::{nested_grouping, TraxelStore};
///
/// let store = TraxelStore::from_traxels(
///     [(1, 2), (2, 2), (1, 4)].map(|(id, t)| Traxel::new(id, t, FeatureMap::new())),
/// )
/// .unwrap();
///
/// let sizes: Vec<usize> = nested_grouping(&store).iter().map(Vec::len).collect();
/// assert_eq!(sizes, [2, 0, 1]);
/// ```
pub fn nested_grouping(store: &TraxelStore) -> Vec<TimestepBucket<'_>> {
    let (Ok(earliest), Ok(latest)) = (store.earliest_timestep(), store.latest_timestep()) else {
        return Vec::new();
    };
    let span = (i64::from(latest.0) - i64::from(earliest.0) + 1) as usize;
    let mut buckets: Vec<TimestepBucket<'_>> = vec![Vec::new(); span];

    for (timestep, handles) in store.buckets() {
        let slot = (i64::from(timestep.0) - i64::from(earliest.0)) as usize;
        buckets[slot].extend(handles.iter().filter_map(|&h| store.resolve(h)));
    }
    buckets
}

/// Copy every traxel inside `field_of_view` into a fresh store.
///
/// Returns the filtered store and the number of traxels retained. The new
/// store inherits the source store's configuration.
///
/// # Errors
///
/// [`StoreError::Locator`] if any traxel's coordinates cannot be extracted,
/// [`StoreError::NonFiniteCoordinate`] if any coordinate is NaN or infinite.
pub fn filter_by_field_of_view<F>(
    source: &TraxelStore,
    field_of_view: &F,
) -> Result<(TraxelStore, usize), StoreError>
where
    F: FieldOfView + ?Sized,
{
    let mut filtered = TraxelStore::with_config(source.config().clone());
    let mut retained = 0usize;
    for t in source.iter() {
        let p = locate(t)?;
        if field_of_view.contains(t.timestep, p.x, p.y, p.z) {
            filtered.add(t.clone())?;
            retained += 1;
        }
    }
    tracing::debug!(
        source = source.len(),
        retained,
        "filtered traxels by field of view"
    );
    Ok((filtered, retained))
}

/// Position of `t`, rejecting NaN and infinite coordinates.
fn locate(t: &Traxel) -> Result<traxel_core::Position, StoreError> {
    let p = t.position().map_err(|e| StoreError::locator(t.key(), e))?;
    let bad_axis = [("x", p.x), ("y", p.y), ("z", p.z)]
        .into_iter()
        .find(|(_, v)| !v.is_finite());
    match bad_axis {
        Some((axis, _)) => Err(StoreError::NonFiniteCoordinate { key: t.key(), axis }),
        None => Ok(p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fov::BoxFieldOfView;
    use traxel_core::{FeatureMap, Locator, LocatorError, Position, Timestep, TraxelKey};
    use traxel_test_utils::{com_traxel, intmax_traxel};

    fn store_of(traxels: Vec<Traxel>) -> TraxelStore {
        TraxelStore::from_traxels(traxels).unwrap()
    }

    #[test]
    fn bounding_box_of_single_traxel_is_a_point() {
        let store = store_of(vec![com_traxel(1, 5, [1.0, 2.0, 3.0])]);
        assert_eq!(
            bounding_box(&store).unwrap().to_array(),
            [5.0, 1.0, 2.0, 3.0, 5.0, 1.0, 2.0, 3.0]
        );
    }

    #[test]
    fn bounding_box_is_per_axis() {
        let store = store_of(vec![
            com_traxel(1, 0, [0.0, 0.0, 0.0]),
            com_traxel(2, 3, [10.0, -5.0, 2.0]),
        ]);
        let bb = bounding_box(&store).unwrap();
        assert_eq!(bb.min_timestep, Timestep(0));
        assert_eq!(bb.max_timestep, Timestep(3));
        assert_eq!(bb.min, Position::new(0.0, -5.0, 0.0));
        assert_eq!(bb.max, Position::new(10.0, 0.0, 2.0));
    }

    #[test]
    fn bounding_box_uses_each_traxels_locator() {
        let mut scaled = com_traxel(1, 0, [1.0, 1.0, 1.0]);
        scaled.set_scales(4.0, 1.0, 1.0);
        let store = store_of(vec![scaled, intmax_traxel(2, 1, [0.0, -2.0, 0.0])]);
        let bb = bounding_box(&store).unwrap();
        assert_eq!(bb.max.x, 4.0);
        assert_eq!(bb.min.y, -2.0);
    }

    #[test]
    fn bounding_box_of_empty_store_fails() {
        assert_eq!(
            bounding_box(&TraxelStore::new()),
            Err(StoreError::EmptyStore)
        );
    }

    #[test]
    fn bounding_box_propagates_locator_failure() {
        let store = store_of(vec![
            com_traxel(1, 0, [0.0; 3]),
            Traxel::new(2, 0, FeatureMap::new()),
        ]);
        assert_eq!(
            bounding_box(&store),
            Err(StoreError::Locator {
                key: TraxelKey::new(0, 2),
                source: LocatorError::Inapplicable {
                    feature: "center-of-mass"
                },
            })
        );
    }

    #[test]
    fn bounding_box_rejects_nan_regardless_of_store_size() {
        let key = TraxelKey::new(0, 1);
        let nan_error = StoreError::NonFiniteCoordinate { key, axis: "x" };

        let one = store_of(vec![com_traxel(1, 0, [f32::NAN, 0.0, 0.0])]);
        assert_eq!(bounding_box(&one), Err(nan_error.clone()));

        let nan_first = store_of(vec![
            com_traxel(1, 0, [f32::NAN, 0.0, 0.0]),
            com_traxel(2, 0, [1.0, 0.0, 0.0]),
        ]);
        assert_eq!(bounding_box(&nan_first), Err(nan_error.clone()));

        let nan_last = store_of(vec![
            com_traxel(0, 0, [1.0, 0.0, 0.0]),
            com_traxel(1, 0, [f32::NAN, 0.0, 0.0]),
        ]);
        assert_eq!(bounding_box(&nan_last), Err(nan_error));
    }

    #[test]
    fn infinite_coordinate_is_rejected_by_filter() {
        let store = store_of(vec![
            com_traxel(1, 0, [0.0, 0.0, 0.0]),
            com_traxel(2, 1, [0.0, 0.0, f32::INFINITY]),
        ]);
        let err = filter_by_field_of_view(&store, &BoxFieldOfView::everything()).unwrap_err();
        assert_eq!(
            err,
            StoreError::NonFiniteCoordinate {
                key: TraxelKey::new(1, 2),
                axis: "z"
            }
        );
        assert!(err.to_string().contains("non-finite z"));
    }

    #[test]
    fn grouping_fills_gaps_with_empty_buckets() {
        let store = store_of(vec![
            com_traxel(1, 2, [0.0; 3]),
            com_traxel(2, 2, [0.0; 3]),
            com_traxel(1, 4, [0.0; 3]),
        ]);
        let groups = nested_grouping(&store);
        let sizes: Vec<usize> = groups.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![2, 0, 1]);
        assert!(groups[0].iter().all(|t| t.timestep == Timestep(2)));
        assert_eq!(groups[2][0].timestep, Timestep(4));
    }

    #[test]
    fn grouping_buckets_are_id_ordered() {
        let store = store_of(vec![
            com_traxel(8, -1, [0.0; 3]),
            com_traxel(3, -1, [0.0; 3]),
            com_traxel(5, -1, [0.0; 3]),
        ]);
        let groups = nested_grouping(&store);
        assert_eq!(groups.len(), 1);
        let ids: Vec<u32> = groups[0].iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![3, 5, 8]);
    }

    #[test]
    fn grouping_is_idempotent() {
        let store = store_of(vec![com_traxel(1, 0, [0.0; 3]), com_traxel(1, 3, [0.0; 3])]);
        assert_eq!(nested_grouping(&store), nested_grouping(&store));
    }

    #[test]
    fn grouping_of_empty_store_is_empty() {
        assert!(nested_grouping(&TraxelStore::new()).is_empty());
    }

    #[test]
    fn fov_filter_keeps_contained_traxels() {
        let store = store_of(vec![
            com_traxel(1, 1, [0.0; 3]),
            com_traxel(1, 2, [0.0; 3]),
            com_traxel(1, 3, [0.0; 3]),
        ]);
        let fov = BoxFieldOfView::new(
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
            2.0,
            f64::INFINITY,
            f64::INFINITY,
            f64::INFINITY,
        );
        let (filtered, count) = filter_by_field_of_view(&store, &fov).unwrap();
        assert_eq!(count, 2);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.latest_timestep().unwrap(), Timestep(2));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn fov_filter_accepts_closures_and_spatial_bounds() {
        let store = store_of(vec![
            com_traxel(1, 0, [1.0, 0.0, 0.0]),
            com_traxel(2, 0, [6.0, 0.0, 0.0]),
        ]);
        let near = |_t: Timestep, x: f64, _y: f64, _z: f64| x < 5.0;
        let (filtered, count) = filter_by_field_of_view(&store, &near).unwrap();
        assert_eq!(count, 1);
        assert!(filtered.contains(&TraxelKey::new(0, 1)));
    }

    #[test]
    fn fov_filter_sees_scaled_coordinates() {
        let mut t = com_traxel(1, 0, [1.0, 0.0, 0.0]);
        t.set_locator(Locator::center_of_mass().with_scales(10.0, 1.0, 1.0));
        let store = store_of(vec![t]);
        let near = |_t: Timestep, x: f64, _y: f64, _z: f64| x < 5.0;
        let (_, count) = filter_by_field_of_view(&store, &near).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn fov_filter_propagates_locator_failure() {
        let store = store_of(vec![Traxel::new(1, 0, FeatureMap::new())]);
        let err = filter_by_field_of_view(&store, &BoxFieldOfView::everything()).unwrap_err();
        assert!(matches!(err, StoreError::Locator { .. }));
    }

    #[test]
    fn fov_filter_works_through_trait_objects() {
        let store = store_of(vec![com_traxel(1, 0, [0.0; 3])]);
        let fov: Box<dyn FieldOfView> = Box::new(BoxFieldOfView::everything());
        let (_, count) = filter_by_field_of_view(&store, fov.as_ref()).unwrap();
        assert_eq!(count, 1);
    }
}
