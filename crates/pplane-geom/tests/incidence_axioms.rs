use std::collections::BTreeMap;

use pplane_geom::{point_count, IncidencePlane};

#[test]
fn order_three_cardinalities() {
    let plane = IncidencePlane::build(3).unwrap();
    assert_eq!(plane.point_count(), 13);
    assert_eq!(plane.line_count(), 13);
    for line in plane.lines() {
        assert_eq!(line.len(), 4);
    }
    plane.verify_invariants().unwrap();
}

#[test]
fn every_point_lies_on_order_plus_one_lines() {
    for order in [2u64, 3, 5, 7] {
        let plane = IncidencePlane::build(order).unwrap();
        let mut degrees: BTreeMap<u64, usize> = BTreeMap::new();
        for line in plane.lines() {
            for point in line {
                *degrees.entry(point.as_raw()).or_insert(0) += 1;
            }
        }
        assert_eq!(degrees.len(), point_count(order));
        for degree in degrees.values() {
            assert_eq!(*degree, (order + 1) as usize);
        }
    }
}

#[test]
fn axioms_hold_for_small_primes() {
    for order in [2u64, 3, 5, 7, 11] {
        let plane = IncidencePlane::build(order).unwrap();
        assert_eq!(plane.point_count(), point_count(order));
        assert_eq!(plane.line_count(), plane.point_count());
        plane.verify_invariants().unwrap();
    }
}
