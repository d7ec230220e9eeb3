use gm_core::errors::{ErrorInfo, ErrorKind, GmError};
use gm_core::{invalid_parameter, Label};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("vertex", "a1B2c3D4")
        .with_context("reason", "example")
}

#[test]
fn structural_error_surface() {
    let err = GmError::DuplicateVertex(sample_info("duplicate-vertex", "already present"));
    assert_eq!(err.kind(), ErrorKind::DuplicateVertex);
    assert_eq!(err.info().code, "duplicate-vertex");
    assert!(err.info().context.contains_key("vertex"));

    let err = GmError::SelfLoop(sample_info("self-loop", "loop"));
    assert!(err.is(ErrorKind::SelfLoop));
    assert!(!err.is(ErrorKind::DuplicateEdge));
}

#[test]
fn context_and_hint_keep_variant() {
    let err = GmError::VertexNotFound(ErrorInfo::new("unknown-vertex", "missing"))
        .with_context("vertex", "zz")
        .with_hint("create the vertex first");
    assert_eq!(err.kind(), ErrorKind::VertexNotFound);
    assert_eq!(err.info().context.get("vertex"), Some(&"zz".to_string()));
    assert_eq!(err.info().hint.as_deref(), Some("create the vertex first"));
}

#[test]
fn display_includes_code_and_context() {
    let err = invalid_parameter("n", "vertex count must be positive").with_context("value", 0);
    let rendered = err.to_string();
    assert!(rendered.starts_with("invalid parameter: vertex count must be positive"));
    assert!(rendered.contains("code: invalid-parameter"));
    assert!(rendered.contains("parameter=n"));
    assert!(rendered.contains("value=0"));
}

#[test]
fn errors_round_trip_json() {
    let err = GmError::ReservedName(sample_info("reserved-name", "cycle is a family"));
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"kind\":\"ReservedName\""));
    let decoded: GmError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}

#[test]
fn integer_labels_refuse_values_past_i64() {
    assert_eq!(Label::integer(7).expect("small index"), Label::Integer(7));
    let err = Label::integer(usize::MAX).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    assert_eq!(err.info().context.get("parameter").map(String::as_str), Some("label"));
}
