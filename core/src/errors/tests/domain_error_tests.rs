use crate::errors::{AuthError, DomainError, InvalidTokenReason, TokenError};

#[test]
fn test_token_errors_are_client_errors() {
    let errors = [
        DomainError::Token(TokenError::InvalidTokenFormat),
        DomainError::Token(TokenError::InvalidTokenEncoding),
        DomainError::invalid_token(InvalidTokenReason::BadSignature),
    ];

    for error in errors {
        assert!(error.is_client_error(), "{error} should be a client error");
    }
}

#[test]
fn test_configuration_missing_is_not_a_token_failure() {
    let error = DomainError::from(AuthError::ConfigurationMissing {
        key: "ENTRA_CLIENT_ID".to_string(),
    });

    assert!(!error.is_client_error());
    assert_eq!(error.error_code(), "configuration_missing");
    assert_ne!(
        error.error_code(),
        DomainError::invalid_token(InvalidTokenReason::AudienceMismatch).error_code()
    );
}

#[test]
fn test_error_codes() {
    assert_eq!(
        DomainError::Token(TokenError::InvalidTokenFormat).error_code(),
        "invalid_token_format"
    );
    assert_eq!(
        DomainError::from(AuthError::AccountNotMapped).error_code(),
        "account_not_mapped"
    );
    assert_eq!(DomainError::database_unavailable().error_code(), "service_unavailable");
    assert_eq!(
        DomainError::from(AuthError::SessionNotFound).error_code(),
        "unauthorized"
    );
}

#[test]
fn test_display_includes_reason() {
    let error = DomainError::invalid_token(InvalidTokenReason::IssuerMismatch);
    assert_eq!(error.to_string(), "Invalid token: issuer mismatch");
}
