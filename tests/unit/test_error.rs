use lifeline_client::error::AppError;
use reqwest::StatusCode;

#[test]
fn test_error_display() {
    assert_eq!(AppError::Unauthorized.to_string(), "unauthorized");
    assert_eq!(AppError::NotFound.to_string(), "not found");
    assert_eq!(AppError::RateLimitExceeded.to_string(), "rate limit exceeded");
    assert_eq!(
        AppError::RefreshFailed("expired".to_string()).to_string(),
        "token refresh failed: expired"
    );
    assert_eq!(
        AppError::InvalidInput("No active company selected".to_string()).to_string(),
        "invalid input: No active company selected"
    );
}

#[test]
fn test_http_error_keeps_body() {
    let err = AppError::Http {
        status: StatusCode::BAD_REQUEST,
        body: r#"{"name":["This field is required."]}"#.to_string(),
    };
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    assert!(err.to_string().starts_with("http error 400 Bad Request"));
    assert!(err.to_string().contains("This field is required."));
    assert_eq!(err.detail(), None);
}

#[test]
fn test_detail_extracts_drf_message() {
    let err = AppError::Http {
        status: StatusCode::UNAUTHORIZED,
        body: r#"{"detail":"No active account found with the given credentials"}"#.to_string(),
    };
    assert_eq!(
        err.detail().as_deref(),
        Some("No active account found with the given credentials")
    );

    let not_json = AppError::Http {
        status: StatusCode::BAD_GATEWAY,
        body: "<html>bad gateway</html>".to_string(),
    };
    assert_eq!(not_json.detail(), None);
}

#[test]
fn test_status_of_mapped_errors() {
    assert_eq!(AppError::Unauthorized.status(), Some(StatusCode::UNAUTHORIZED));
    assert_eq!(AppError::NotFound.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(AppError::SessionExpired.status(), None);
}

#[test]
fn test_json_error_converts() {
    let parse: Result<serde_json::Value, _> = serde_json::from_str("{");
    let err: AppError = parse.unwrap_err().into();
    assert!(matches!(err, AppError::Json(_)));
}
