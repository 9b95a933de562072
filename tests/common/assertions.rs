//! Custom assertion macros and utilities
//!
//! Assertions over the `{ success, message }` envelope every endpoint uses.

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert a failure envelope: `success: false` with the given message
#[macro_export]
macro_rules! assert_failure {
    ($body:expr, $message:expr) => {
        assert_eq!($body["success"], serde_json::Value::Bool(false), "body: {}", $body);
        assert_eq!($body["message"], $message, "body: {}", $body);
    };
}

/// Assert a success envelope, optionally with the given message
#[macro_export]
macro_rules! assert_success {
    ($body:expr) => {
        assert_eq!($body["success"], serde_json::Value::Bool(true), "body: {}", $body);
    };
    ($body:expr, $message:expr) => {
        assert_eq!($body["success"], serde_json::Value::Bool(true), "body: {}", $body);
        assert_eq!($body["message"], $message, "body: {}", $body);
    };
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
