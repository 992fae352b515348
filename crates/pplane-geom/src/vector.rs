use serde::{Deserialize, Serialize};

/// A vector in (Z/p)^3 written in homogeneous coordinates.
///
/// Coordinates are stored as plain integers; callers keep them within
/// `0..p`. The dot product is the ordinary integer dot product and is not
/// reduced here, so that reduction modulo p happens uniformly at the call
/// site where the modulus is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GfVector {
    /// First homogeneous coordinate.
    pub x1: u64,
    /// Second homogeneous coordinate.
    pub x2: u64,
    /// Third homogeneous coordinate.
    pub x3: u64,
}

impl GfVector {
    /// Creates a vector from its three coordinates.
    pub const fn new(x1: u64, x2: u64, x3: u64) -> Self {
        Self { x1, x2, x3 }
    }

    /// Returns the unreduced integer dot product with `other`.
    pub fn dot(&self, other: &GfVector) -> u64 {
        self.x1 * other.x1 + self.x2 * other.x2 + self.x3 * other.x3
    }

    /// Returns whether this is the zero vector.
    pub fn is_zero(&self) -> bool {
        self.x1 == 0 && self.x2 == 0 && self.x3 == 0
    }
}
