use reqwest::StatusCode;
use std::error::Error;
use wl_model::error::{AppError, TransportError};

#[test]
fn test_app_error_display_unknown_field() {
    let error = AppError::UnknownField {
        model: "PurchaseModel",
        field: "k_missing".to_string(),
    };
    assert_eq!(error.to_string(), "unknown field: PurchaseModel.k_missing");
}

#[test]
fn test_app_error_display_type_mismatch() {
    let error = AppError::TypeMismatch {
        field: "a_session.C1[0]".to_string(),
        expected: "string".to_string(),
        found: "boolean".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "type mismatch on a_session.C1[0]: expected string, found boolean"
    );
}

#[test]
fn test_app_error_display_missing_fields() {
    let required = AppError::MissingRequiredField {
        field: "k_id".to_string(),
    };
    assert_eq!(required.to_string(), "missing required field: k_id");

    let response = AppError::MissingResponseField {
        field: "a_pay_address".to_string(),
    };
    assert_eq!(response.to_string(), "missing response field: a_pay_address");

    let pending = AppError::FieldNotYetAvailable {
        field: "a_purchase".to_string(),
    };
    assert_eq!(pending.to_string(), "field not yet available: a_purchase");
}

#[test]
fn test_transport_error_display() {
    assert_eq!(
        TransportError::RateLimitExceeded.to_string(),
        "rate limit exceeded"
    );

    let status = TransportError::Status {
        status: StatusCode::BAD_GATEWAY,
        body: "upstream".to_string(),
    };
    assert!(status.to_string().contains("502"));

    let server = TransportError::Server {
        status: "access-denied".to_string(),
        message: "Access denied.".to_string(),
    };
    assert_eq!(
        server.to_string(),
        "server error [access-denied]: Access denied."
    );
}

#[test]
fn test_transport_error_conversion() {
    let error: AppError = TransportError::InvalidPayload("eof".to_string()).into();
    assert!(matches!(error, AppError::Transport(_)));
    assert_eq!(error.to_string(), "invalid payload: eof");
    assert!(error.source().is_some());
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: AppError = json_error.into();
    assert!(error.to_string().starts_with("json error:"));
}

#[test]
fn test_programming_errors() {
    assert!(
        AppError::UnknownField {
            model: "AddressModel",
            field: "x".to_string(),
        }
        .is_programming_error()
    );
    assert!(
        AppError::MissingRequiredField {
            field: "k_id".to_string(),
        }
        .is_programming_error()
    );
    assert!(!AppError::Transport(TransportError::RateLimitExceeded).is_programming_error());
    assert!(
        !AppError::MissingResponseField {
            field: "a_pay_address".to_string(),
        }
        .is_programming_error()
    );
}
