//! The admin sign-in form.
//!
//! Format rules only: this form gates the demo dashboard and does not
//! check credentials against any store. The password complexity rule is
//! a predicate because the regex crate has no lookahead.

use crate::form::FormState;
use crate::rules::{FieldRules, FormSchema, Rule};

fn password_complexity(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_uppercase()) && value.chars().any(|c| c.is_ascii_digit())
}

/// Builds the sign-in form rule set.
pub fn login_schema() -> FormSchema {
    FormSchema::new(vec![
        FieldRules::new("username")
            .label("Username")
            .rule(Rule::required("Username is required"))
            .rule(Rule::min_length(
                3,
                "Username must be at least 3 characters",
            )),
        FieldRules::new("password")
            .label("Password")
            .rule(Rule::required("Password is required"))
            .rule(Rule::min_length(
                6,
                "Password must be at least 6 characters",
            ))
            .rule(Rule::check(
                password_complexity,
                "Password must contain at least one uppercase letter and one number",
            )),
    ])
}

/// Creates fresh state for the sign-in form.
pub fn login_form() -> FormState {
    FormState::new(login_schema())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form() {
        let mut form = login_form();
        assert!(!form.validate());
        assert_eq!(form.error("username"), Some("Username is required"));
        assert_eq!(form.error("password"), Some("Password is required"));
    }

    #[test]
    fn test_username_min_length() {
        let mut form = login_form();
        form.set_value("username", "ab");
        form.set_value("password", "Abcdef1");
        assert!(!form.validate());
        assert_eq!(
            form.error("username"),
            Some("Username must be at least 3 characters")
        );
    }

    #[test]
    fn test_password_too_short() {
        let mut form = login_form();
        form.set_value("username", "admin");
        form.set_value("password", "abc");
        assert!(!form.validate());
        assert_eq!(
            form.error("password"),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn test_password_missing_complexity() {
        let mut form = login_form();
        form.set_value("username", "admin");
        form.set_value("password", "abcdefg");
        assert!(!form.validate());
        assert_eq!(
            form.error("password"),
            Some("Password must contain at least one uppercase letter and one number")
        );
    }

    #[test]
    fn test_password_accepted() {
        let mut form = login_form();
        form.set_value("username", "admin");
        form.set_value("password", "Abcdef1");
        assert!(form.validate());
        assert!(form.error("password").is_none());
    }

    #[test]
    fn test_complexity_needs_both_classes() {
        assert!(!password_complexity("abcdef1"));
        assert!(!password_complexity("Abcdefg"));
        assert!(password_complexity("Abcdef1"));
    }
}
