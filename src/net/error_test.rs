use super::*;

#[test]
fn network_error_display_includes_cause() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "network error: connection refused");
}

#[test]
fn status_error_display_includes_code() {
    assert_eq!(ApiError::Status(500).to_string(), "server returned status 500");
}

#[test]
fn malformed_error_display_includes_cause() {
    let err = ApiError::Malformed("missing field `answer`".to_owned());
    assert_eq!(err.to_string(), "malformed response: missing field `answer`");
}

#[test]
fn variants_compare_by_content() {
    assert_eq!(ApiError::Status(404), ApiError::Status(404));
    assert_ne!(ApiError::Status(404), ApiError::Status(500));
    assert_ne!(
        ApiError::Network("x".to_owned()),
        ApiError::Malformed("x".to_owned())
    );
}
