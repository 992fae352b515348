use std::collections::BTreeMap;

use pplane_core::errors::{ErrorInfo, PlaneError};
use pplane_core::{LineId, PointId};

use crate::lines::build_lines;
use crate::points::{build_points, point_count};
use crate::vector::GfVector;

/// The immutable incidence structure of a projective plane of prime order.
///
/// Holds the ordered point list and, per line, the ordered list of incident
/// point ids. Both collections are fixed at construction time; ids are the
/// only handle downstream consumers need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidencePlane {
    order: u64,
    points: Vec<GfVector>,
    lines: Vec<Vec<PointId>>,
}

impl IncidencePlane {
    /// Builds the plane of the given order by running the point builder and
    /// the line enumerator in sequence.
    ///
    /// The caller is responsible for having validated that `order` is prime
    /// and within a safe bound; a composite order is rejected by the
    /// enumerator's consistency checks rather than silently producing a
    /// malformed structure.
    pub fn build(order: u64) -> Result<Self, PlaneError> {
        let points = build_points(order);
        let lines = build_lines(&points, order)?;
        Ok(Self {
            order,
            points,
            lines,
        })
    }

    /// Assembles a plane from already-built parts without re-deriving them.
    ///
    /// Used by deserialization; performs only the cheap cardinality checks.
    pub(crate) fn from_parts(
        order: u64,
        points: Vec<GfVector>,
        lines: Vec<Vec<PointId>>,
    ) -> Result<Self, PlaneError> {
        let expected = point_count(order);
        if points.len() != expected || lines.len() != expected {
            return Err(PlaneError::Incidence(
                ErrorInfo::new("cardinality", "point or line count does not match the order")
                    .with_context("order", order.to_string())
                    .with_context("points", points.len().to_string())
                    .with_context("lines", lines.len().to_string()),
            ));
        }
        Ok(Self {
            order,
            points,
            lines,
        })
    }

    /// Returns the order of the plane.
    pub fn order(&self) -> u64 {
        self.order
    }

    /// Returns the number of points (equal to the number of lines).
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns all point ids in their canonical order.
    pub fn point_ids(&self) -> impl ExactSizeIterator<Item = PointId> + '_ {
        (0..self.points.len()).map(|id| PointId::from_raw(id as u64))
    }

    /// Returns all line ids in emission order.
    pub fn line_ids(&self) -> impl ExactSizeIterator<Item = LineId> + '_ {
        (0..self.lines.len()).map(|id| LineId::from_raw(id as u64))
    }

    /// Returns the homogeneous coordinate vector of a point.
    pub fn point_vector(&self, point: PointId) -> Result<&GfVector, PlaneError> {
        self.points
            .get(point.as_raw() as usize)
            .ok_or_else(|| PlaneError::Incidence(unknown_id_error("point", point.as_raw())))
    }

    /// Returns the ordered incident point ids of a line.
    pub fn line(&self, line: LineId) -> Result<&[PointId], PlaneError> {
        self.lines
            .get(line.as_raw() as usize)
            .map(Vec::as_slice)
            .ok_or_else(|| PlaneError::Incidence(unknown_id_error("line", line.as_raw())))
    }

    /// Returns all lines in emission order.
    pub fn lines(&self) -> &[Vec<PointId>] {
        &self.lines
    }

    /// Returns all point vectors in id order.
    pub fn point_vectors(&self) -> &[GfVector] {
        &self.points
    }

    /// Checks the incidence axioms of a projective plane of this order.
    ///
    /// Verifies the point and line cardinalities, that every line carries
    /// exactly order+1 points and every point lies on exactly order+1
    /// lines, that two distinct points share exactly one line, and that two
    /// distinct lines meet in exactly one point. Quadratic in the number of
    /// lines, so intended for tests and explicit opt-in rather than every
    /// build.
    pub fn verify_invariants(&self) -> Result<(), PlaneError> {
        let n = point_count(self.order);
        let per_line = (self.order + 1) as usize;

        if self.points.len() != n || self.lines.len() != n {
            return Err(self.invariant_error(
                "cardinality",
                format!(
                    "expected {n} points and {n} lines, found {} and {}",
                    self.points.len(),
                    self.lines.len()
                ),
            ));
        }

        let mut lines_through = vec![0usize; n];
        let mut pair_lines: BTreeMap<(u64, u64), usize> = BTreeMap::new();
        for line in &self.lines {
            if line.len() != per_line {
                return Err(self.invariant_error(
                    "line-size",
                    format!("expected {per_line} points per line, found {}", line.len()),
                ));
            }
            for (i, point) in line.iter().enumerate() {
                let raw = point.as_raw() as usize;
                if raw >= n {
                    return Err(self.invariant_error(
                        "point-range",
                        format!("line references unknown point id {raw}"),
                    ));
                }
                lines_through[raw] += 1;
                for other in &line[i + 1..] {
                    *pair_lines
                        .entry((point.as_raw(), other.as_raw()))
                        .or_insert(0) += 1;
                }
            }
        }

        if let Some(degree) = lines_through.iter().find(|degree| **degree != per_line) {
            return Err(self.invariant_error(
                "point-degree",
                format!("expected every point on {per_line} lines, found one on {degree}"),
            ));
        }

        let expected_pairs = n * (n - 1) / 2;
        if pair_lines.len() != expected_pairs || pair_lines.values().any(|count| *count != 1) {
            return Err(self.invariant_error(
                "point-pair",
                "two distinct points must lie on exactly one common line".to_string(),
            ));
        }

        for (i, left) in self.lines.iter().enumerate() {
            for right in &self.lines[i + 1..] {
                if shared_points(left, right) != 1 {
                    return Err(self.invariant_error(
                        "line-pair",
                        "two distinct lines must meet in exactly one point".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }

    fn invariant_error(&self, code: &str, message: String) -> PlaneError {
        PlaneError::Incidence(
            ErrorInfo::new(code, message).with_context("order", self.order.to_string()),
        )
    }
}

/// Counts common ids between two ascending id lists.
fn shared_points(left: &[PointId], right: &[PointId]) -> usize {
    let mut shared = 0;
    let mut idx_l = 0;
    let mut idx_r = 0;
    while idx_l < left.len() && idx_r < right.len() {
        match left[idx_l].cmp(&right[idx_r]) {
            std::cmp::Ordering::Less => idx_l += 1,
            std::cmp::Ordering::Greater => idx_r += 1,
            std::cmp::Ordering::Equal => {
                shared += 1;
                idx_l += 1;
                idx_r += 1;
            }
        }
    }
    shared
}

fn unknown_id_error(kind: &str, raw: u64) -> ErrorInfo {
    ErrorInfo::new("unknown-id", format!("no {kind} with id {raw}"))
        .with_context("id", raw.to_string())
}
