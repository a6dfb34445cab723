//! Integration tests for pocketsomm-client.
//!
//! These tests verify the client API surface without requiring a running
//! backend.

use pocketsomm_client::{ApiError, Client, Config};
use std::error::Error as _;

#[test]
fn test_client_construction() {
    // Valid URL
    let client = Client::new(Config::new("http://localhost:8000"));
    assert!(client.is_ok());

    // HTTPS URL
    let client = Client::new(Config::new("https://api.pocketsomm.dev"));
    assert!(client.is_ok());
}

#[test]
fn test_client_invalid_url() {
    // Missing scheme: "localhost" parses as the scheme here
    let result = Client::new(Config::new("localhost:8000"));
    assert!(matches!(result.unwrap_err(), ApiError::Config(_)));

    // Unsupported scheme
    let result = Client::new(Config::new("ftp://example.com"));
    assert!(matches!(result.unwrap_err(), ApiError::Config(_)));

    // Not a URL at all
    let result = Client::new(Config::new("not a url"));
    assert!(matches!(result.unwrap_err(), ApiError::Config(_)));
}

#[test]
fn test_base_url_accessor() {
    let client = Client::new(Config::new("http://localhost:8000")).unwrap();
    assert_eq!(client.base_url(), "http://localhost:8000/");
}

#[test]
fn test_server_error_display() {
    let err = ApiError::Server {
        code: 500,
        message: "db down".to_string(),
        details: None,
    };
    assert_eq!(err.to_string(), "db down");
}

#[test]
fn test_status_error_display() {
    let err = ApiError::Status {
        status: 503,
        body: "<html>maintenance</html>".to_string(),
    };
    assert_eq!(err.to_string(), "Server error (HTTP 503)");
    // The raw body never leaks into the rendered message
    assert!(!err.to_string().contains("maintenance"));
}

#[test]
fn test_decode_error_display() {
    let cause = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let err = ApiError::Decode(cause);
    assert_eq!(err.to_string(), "Unexpected server response");
    // The parser detail stays reachable through the source chain
    assert!(err.source().is_some());
}

#[test]
fn test_config_error_display() {
    let err = Client::new(Config::new("not a url")).unwrap_err();
    assert!(err.to_string().starts_with("invalid API configuration:"));
}

#[test]
fn test_invalid_request_display() {
    let err = ApiError::InvalidRequest("wine name must not be empty".to_string());
    assert_eq!(err.to_string(), "wine name must not be empty");
}
