use std::collections::BTreeSet;

use pplane_core::errors::{ErrorInfo, PlaneError};
use pplane_core::PointId;

use crate::points::point_count;
use crate::vector::GfVector;

/// Maps a coefficient vector `(a,b,c)` over Z/p to its index in the
/// freshness array: `a·p² + b·p + c`.
fn vector_index(a: u64, b: u64, c: u64, order: u64) -> usize {
    (a * order * order + b * order + c) as usize
}

/// Enumerates the lines of the projective plane of order `order`.
///
/// Every nonzero coefficient vector `(a,b,c)` over Z/p represents a line;
/// two vectors represent the same line iff one is a nonzero scalar multiple
/// of the other. The triple loop below visits vectors in ascending
/// lexicographic order, takes each still-fresh vector as the canonical
/// representative of a new line, and retires the other p−2 nontrivial
/// multiples so the class is never revisited. A point lies on a line iff
/// the dot product of their vectors vanishes modulo p.
///
/// Lines are returned in first-encounter order of their representative,
/// each as the ascending list of incident point ids.
///
/// The enumerator is defensive where the algebra gives exact guarantees:
/// every line must collect exactly `order + 1` incident points, no line
/// content may repeat, and the total must come out to order² + order + 1.
/// Any of these failing means a non-prime order slipped past the caller's
/// validation, and the enumerator fails fast instead of emitting a
/// malformed structure.
pub fn build_lines(points: &[GfVector], order: u64) -> Result<Vec<Vec<PointId>>, PlaneError> {
    let per_line = (order + 1) as usize;
    let mut fresh = vec![true; (order * order * order) as usize];
    // The zero vector represents no line.
    if let Some(zero) = fresh.first_mut() {
        *zero = false;
    }

    let mut lines: Vec<Vec<PointId>> = Vec::with_capacity(point_count(order));
    let mut seen: BTreeSet<Vec<PointId>> = BTreeSet::new();

    for a in 0..order {
        for b in 0..order {
            for c in 0..order {
                if !fresh[vector_index(a, b, c, order)] {
                    continue;
                }
                let representative = GfVector::new(a, b, c);

                let mut incident: Vec<PointId> = Vec::with_capacity(per_line);
                for (id, point) in points.iter().enumerate() {
                    if point.dot(&representative) % order == 0 {
                        incident.push(PointId::from_raw(id as u64));
                        if incident.len() > per_line {
                            break;
                        }
                    }
                }
                if incident.len() != per_line {
                    return Err(PlaneError::Incidence(incidence_count_error(
                        &representative,
                        incident.len(),
                        per_line,
                        order,
                    )));
                }
                if !seen.insert(incident.clone()) {
                    return Err(PlaneError::Incidence(
                        ErrorInfo::new(
                            "duplicate-line",
                            "equivalence class produced a second representative",
                        )
                        .with_context("order", order.to_string())
                        .with_context("vector", format!("({a},{b},{c})")),
                    ));
                }
                lines.push(incident);

                // Retire the remaining multiples of this representative.
                for i in 2..order {
                    let index =
                        vector_index(i * a % order, i * b % order, i * c % order, order);
                    fresh[index] = false;
                }
            }
        }
    }

    if lines.len() != point_count(order) {
        return Err(PlaneError::Incidence(
            ErrorInfo::new("line-count", "line count does not match point count")
                .with_context("order", order.to_string())
                .with_context("lines", lines.len().to_string())
                .with_context("expected", point_count(order).to_string())
                .with_hint("the order is not a usable prime"),
        ));
    }

    Ok(lines)
}

fn incidence_count_error(
    representative: &GfVector,
    found: usize,
    expected: usize,
    order: u64,
) -> ErrorInfo {
    ErrorInfo::new("incidence-count", "line has the wrong number of incident points")
        .with_context("order", order.to_string())
        .with_context(
            "vector",
            format!(
                "({},{},{})",
                representative.x1, representative.x2, representative.x3
            ),
        )
        .with_context("found", found.to_string())
        .with_context("expected", expected.to_string())
        .with_hint("the order is not a usable prime")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::build_points;

    #[test]
    fn index_matches_flat_layout() {
        assert_eq!(vector_index(0, 0, 0, 5), 0);
        assert_eq!(vector_index(0, 0, 4, 5), 4);
        assert_eq!(vector_index(0, 1, 0, 5), 5);
        assert_eq!(vector_index(1, 0, 0, 5), 25);
        assert_eq!(vector_index(4, 4, 4, 5), 124);
    }

    #[test]
    fn line_ids_are_strictly_ascending() {
        let points = build_points(5);
        let lines = build_lines(&points, 5).unwrap();
        for line in &lines {
            for pair in line.windows(2) {
                assert!(pair[0] < pair[1]);
            }
        }
    }

    #[test]
    fn composite_order_fails_fast() {
        let points = build_points(4);
        let err = build_lines(&points, 4).unwrap_err();
        match err {
            PlaneError::Incidence(info) => {
                assert_eq!(info.code, "incidence-count");
                assert_eq!(info.context.get("order"), Some(&"4".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
