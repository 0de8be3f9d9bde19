//! Property tests for traxel ordering and geometry.

use proptest::prelude::*;
use traxel_core::{FeatureMap, Locator, Traxel};

fn traxel(id: u32, t: i32, p: [f32; 3]) -> Traxel {
    Traxel::new(
        id,
        t,
        FeatureMap::new().with("center-of-mass", p.to_vec()),
    )
}

fn coord() -> impl Strategy<Value = f32> {
    -1000.0f32..1000.0
}

fn point() -> impl Strategy<Value = [f32; 3]> {
    [coord(), coord(), coord()]
}

proptest! {
    #[test]
    fn exactly_one_ordering_relation_holds(
        a_id in 0u32..8, a_t in -4i32..4,
        b_id in 0u32..8, b_t in -4i32..4,
    ) {
        let a = traxel(a_id, a_t, [0.0; 3]);
        let b = traxel(b_id, b_t, [0.0; 3]);
        let relations = [a < b, a == b, b < a];
        prop_assert_eq!(relations.iter().filter(|&&r| r).count(), 1);
        prop_assert_eq!(a.cmp(&b), (a_t, a_id).cmp(&(b_t, b_id)));
    }

    #[test]
    fn ordering_is_transitive(
        keys in proptest::collection::vec((-3i32..3, 0u32..4), 3),
    ) {
        let ts: Vec<Traxel> = keys.iter().map(|&(t, id)| traxel(id, t, [0.0; 3])).collect();
        if ts[0] < ts[1] && ts[1] < ts[2] {
            prop_assert!(ts[0] < ts[2]);
        }
    }

    #[test]
    fn distance_to_self_is_zero(p in point()) {
        let t = traxel(0, 0, p);
        prop_assert_eq!(t.distance_to(&t).unwrap(), 0.0);
    }

    #[test]
    fn distance_is_symmetric(p in point(), q in point()) {
        let a = traxel(0, 0, p);
        let b = traxel(1, 1, q);
        let ab = a.distance_to(&b).unwrap();
        let ba = b.distance_to(&a).unwrap();
        prop_assert!((ab - ba).abs() <= 1e-9 * ab.max(1.0));
    }

    #[test]
    fn angle_is_within_zero_and_pi(v in point(), p in point(), q in point()) {
        prop_assume!(p != v && q != v);
        let vertex = traxel(0, 0, v);
        let angle = vertex.angle(&traxel(1, 1, p), &traxel(2, 1, q)).unwrap();
        prop_assert!((0.0..=std::f64::consts::PI).contains(&angle));
    }

    #[test]
    fn clone_scale_mutation_is_isolated(p in point(), s in 0.1f64..10.0) {
        let original = traxel(0, 0, p);
        let before = original.position().unwrap();
        let mut copy = original.clone();
        copy.set_locator(Locator::center_of_mass().with_scales(s, s, s));
        copy.locator_mut().z_scale = -s;
        prop_assert_eq!(original.position().unwrap(), before);
    }
}
