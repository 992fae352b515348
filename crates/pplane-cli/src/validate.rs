use pplane_core::errors::{ErrorInfo, PlaneError};

/// Largest order the CLI accepts. The construction is cubic in the order,
/// so anything beyond this produces output too large to be useful.
pub const MAX_ORDER: u64 = 100;

/// Checks the caller-side contract of the plane builder: the order must be
/// at least 2, prime, and within the safe bound.
pub fn validate_order(order: u64) -> Result<(), PlaneError> {
    if order < 2 {
        return Err(PlaneError::Order(
            ErrorInfo::new("order-too-small", "no projective plane exists below order 2")
                .with_context("order", order.to_string()),
        ));
    }
    if !is_prime(order) {
        return Err(PlaneError::Order(
            ErrorInfo::new("not-prime", "the order must be a prime number")
                .with_context("order", order.to_string())
                .with_hint("prime powers and composite orders are not supported"),
        ));
    }
    if order > MAX_ORDER {
        return Err(PlaneError::Order(
            ErrorInfo::new("order-bound", "the order exceeds the safe bound")
                .with_context("order", order.to_string())
                .with_context("bound", MAX_ORDER.to_string())
                .with_hint("choose a prime at most 100"),
        ));
    }
    Ok(())
}

fn is_prime(n: u64) -> bool {
    let mut divisor = 2;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}
