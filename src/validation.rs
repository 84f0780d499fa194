//! Form Input Validation
//!
//! Declarative rules for the auth and profile forms, checked client-side
//! before a request goes out. The backend revalidates everything.

use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, Default, Validate)]
pub struct LoginInput {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct RegisterInput {
    #[validate(length(min = 3, max = 150, message = "Username must be 3 to 150 characters"))]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct ProfileInput {
    pub first_name: String,
    pub last_name: String,
    #[validate(length(max = 500, message = "Bio cannot exceed 500 characters"))]
    pub bio: String,
}

/// First violation message, for toast display.
pub fn first_error(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .next()
        .unwrap_or_else(|| "Invalid input".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        let empty = LoginInput::default();
        assert!(empty.validate().is_err());

        let ok = LoginInput { username: "ana".into(), password: "secret".into() };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_register_password_confirmation() {
        let mut input = RegisterInput {
            username: "ana".into(),
            email: "ana@example.com".into(),
            password: "supersecret".into(),
            password_confirm: "different".into(),
            ..Default::default()
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(first_error(&errors), "Passwords do not match");

        input.password_confirm = "supersecret".into();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_register_rejects_short_username_and_bad_email() {
        let input = RegisterInput {
            username: "ab".into(),
            email: "not-an-email".into(),
            password: "supersecret".into(),
            password_confirm: "supersecret".into(),
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_profile_bio_cap() {
        let input = ProfileInput { bio: "x".repeat(501), ..Default::default() };
        assert!(input.validate().is_err());
        let input = ProfileInput { bio: "x".repeat(500), ..Default::default() };
        assert!(input.validate().is_ok());
    }
}
