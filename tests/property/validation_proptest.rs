//! Property-based tests for registration validation and the token gate
//!
//! Uses proptest to generate random inputs and verify properties

use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use bloodconnect::backend::auth::{AuthError, Registration, SessionManager};
use bloodconnect::backend::error::BackendError;
use bloodconnect::backend::middleware::{authorize, bearer_token};
use bloodconnect::shared::Role;
use proptest::prelude::*;

fn filled() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9@._-]{1,24}"
}

fn blank() -> impl Strategy<Value = String> {
    "[ \t\n]{0,4}"
}

proptest! {
    #[test]
    fn test_all_fields_present_is_valid(
        name in filled(),
        email in filled(),
        password in filled(),
        dob in filled(),
    ) {
        let registration = Registration { name, email, password, date_of_birth: dob };
        prop_assert!(registration.validate().is_ok());
    }

    #[test]
    fn test_any_blank_field_is_rejected(
        fields in (filled(), filled(), filled(), filled()),
        blank_value in blank(),
        which in 0usize..4,
    ) {
        let (mut name, mut email, mut password, mut dob) = fields;
        match which {
            0 => name = blank_value,
            1 => email = blank_value,
            2 => password = blank_value,
            _ => dob = blank_value,
        }
        let registration = Registration { name, email, password, date_of_birth: dob };
        prop_assert!(matches!(registration.validate(), Err(AuthError::MissingFields)));
    }

    #[test]
    fn test_single_word_header_has_no_token(word in "[A-Za-z0-9.]{1,40}") {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&word).unwrap());
        prop_assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_garbage_tokens_are_invalid(token in "[A-Za-z0-9._-]{1,80}") {
        let sessions = SessionManager::new("prop-secret", chrono::Duration::hours(1));
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", token)).unwrap());
        prop_assert!(matches!(authorize(&headers, &sessions), Err(BackendError::InvalidToken)));
    }

    #[test]
    fn test_role_wire_names_parse_back(role in prop_oneof![Just(Role::Donor), Just(Role::MedicalStaff), Just(Role::Admin)]) {
        prop_assert_eq!(role.as_str().parse::<Role>(), Ok(role));
    }
}
