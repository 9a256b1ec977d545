use super::*;
use std::error::Error as StdError;

#[test]
fn test_auth_error() {
    let error = Error::AuthError("invalid base uri".to_string());

    assert_eq!(
        error.to_string(),
        "Failed to authenticate or initialize GitHub client: invalid base uri"
    );
    assert!(error.source().is_none());
    assert_eq!(error.status(), None);
}

#[test]
fn test_status_error() {
    let error = Error::Status {
        status: 404,
        message: "Not Found".to_string(),
    };

    assert_eq!(error.to_string(), "GitHub API returned HTTP 404: Not Found");
    assert_eq!(error.status(), Some(404));
}

#[test]
fn test_transport_error() {
    let error = Error::Transport("connection refused".to_string());

    assert_eq!(
        error.to_string(),
        "Failed to reach the GitHub API: connection refused"
    );
    assert_eq!(error.status(), None);
}

#[test]
fn test_deserialization_error_keeps_source() {
    let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error = Error::from(json_error);

    assert!(error
        .to_string()
        .starts_with("Failed to deserialize GitHub response"));
    assert!(error.source().is_some());
}

#[test]
fn test_error_is_send_sync() {
    // This test verifies that Error implements Send and Sync traits
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}
