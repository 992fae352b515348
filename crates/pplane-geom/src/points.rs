use crate::vector::GfVector;

/// Returns the number of points (and lines) of the plane of order `order`:
/// order² + order + 1.
pub fn point_count(order: u64) -> usize {
    (order * order + order + 1) as usize
}

/// Builds the canonical point list of the projective plane of order `order`.
///
/// Points are emitted in a fixed order which defines their ids:
/// first `(1,0,0)`, then `(a,1,0)` for ascending `a`, then `(b,a,1)` with
/// `b` as the outer loop. Each 1-dimensional subspace of (Z/p)³ is covered
/// by exactly one of these coordinate patterns, so no two emitted points
/// are scalar multiples of one another modulo p.
///
/// `order` is assumed to have been validated as prime by the caller.
pub fn build_points(order: u64) -> Vec<GfVector> {
    let mut points = Vec::with_capacity(point_count(order));

    points.push(GfVector::new(1, 0, 0));
    for a in 0..order {
        points.push(GfVector::new(a, 1, 0));
    }
    for b in 0..order {
        for a in 0..order {
            points.push(GfVector::new(b, a, 1));
        }
    }

    points
}
