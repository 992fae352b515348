use pplane_geom::{canonical_hash, point_count, IncidencePlane};
use proptest::prelude::*;

fn check_invariants(plane: &IncidencePlane, order: u64) {
    assert_eq!(plane.point_count(), point_count(order));
    assert_eq!(plane.line_count(), plane.point_count());
    for line in plane.lines() {
        assert_eq!(line.len(), (order + 1) as usize);
        for pair in line.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
    plane.verify_invariants().unwrap();
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prime_orders_satisfy_plane_axioms(order in prop::sample::select(vec![2u64, 3, 5, 7, 11, 13])) {
        let plane = IncidencePlane::build(order).unwrap();
        check_invariants(&plane, order);

        let rebuilt = IncidencePlane::build(order).unwrap();
        prop_assert_eq!(canonical_hash(&plane), canonical_hash(&rebuilt));
    }

    #[test]
    fn composite_orders_never_build(order in prop::sample::select(vec![4u64, 6, 8, 9, 10, 12])) {
        prop_assert!(IncidencePlane::build(order).is_err());
    }
}
