use pplane_core::errors::{ErrorInfo, PlaneError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("order", "4")
        .with_context("reason", "example")
}

#[test]
fn order_error_surface() {
    let err = PlaneError::Order(sample_info("not-prime", "order must be prime"));
    assert_eq!(err.info().code, "not-prime");
    assert!(err.info().context.contains_key("order"));
}

#[test]
fn incidence_error_surface() {
    let err = PlaneError::Incidence(sample_info("incidence-count", "wrong point count"));
    assert_eq!(err.info().code, "incidence-count");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn serde_error_surface() {
    let err = PlaneError::Serde(sample_info("deserialize-json", "schema mismatch"));
    assert_eq!(err.info().code, "deserialize-json");
}

#[test]
fn render_error_surface() {
    let err = PlaneError::Render(sample_info("write-failed", "cannot open output"));
    assert_eq!(err.info().code, "write-failed");
}

#[test]
fn display_includes_context_and_hint() {
    let info = ErrorInfo::new("order-bound", "order above safe bound")
        .with_context("order", "101")
        .with_hint("choose a prime at most 100");
    let rendered = format!("{}", PlaneError::Order(info));
    assert!(rendered.contains("order-bound"));
    assert!(rendered.contains("order=101"));
    assert!(rendered.contains("choose a prime at most 100"));
}
