//! Client-side signup validation.
//!
//! Runs before any network call; a form that fails here never reaches the
//! backend. All failing fields are reported at once.

use crate::error::FieldErrors;
use crate::i18n::Strings;
use crate::models::RegisterRequest;

const MIN_USERNAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 8;

/// Validate a signup form, returning per-field messages on failure.
pub fn validate_signup(form: &RegisterRequest, strings: &Strings) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    let username = form.username.trim();
    if username.is_empty() {
        errors.insert("username".into(), strings.username_required.into());
    } else if username.chars().count() < MIN_USERNAME_LEN {
        errors.insert("username".into(), strings.username_too_short.into());
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.insert("email".into(), strings.email_required.into());
    } else if !looks_like_email(email) {
        errors.insert("email".into(), strings.email_invalid.into());
    }

    if form.password.is_empty() {
        errors.insert("password".into(), strings.password_required.into());
    } else if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert("password".into(), strings.password_too_short.into());
    }

    if form.password != form.password2 {
        errors.insert("password2".into(), strings.passwords_mismatch.into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// `local@domain.tld` with no whitespace anywhere.
pub fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RegisterRequest {
        RegisterRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "password1".to_string(),
            password2: "password1".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(validate_signup(&form(), Strings::en()).is_ok());
    }

    #[test]
    fn test_mismatched_confirmation() {
        let mut f = form();
        f.password2 = "password2".to_string();
        let errors = validate_signup(&f, Strings::en()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["password2"], "Passwords do not match");
    }

    #[test]
    fn test_reports_every_field() {
        let f = RegisterRequest {
            username: " ab ".to_string(),
            email: "nope".to_string(),
            password: "short".to_string(),
            password2: "short".to_string(),
            ..Default::default()
        };
        let errors = validate_signup(&f, Strings::en()).unwrap_err();
        assert_eq!(errors["username"], "Username must be at least 3 characters");
        assert_eq!(errors["email"], "Invalid email");
        assert_eq!(errors["password"], "Password must be at least 8 characters");
        assert!(!errors.contains_key("password2"));
    }

    #[test]
    fn test_required_fields() {
        let errors = validate_signup(&RegisterRequest::default(), Strings::en()).unwrap_err();
        assert_eq!(errors["username"], "Username is required");
        assert_eq!(errors["email"], "Email is required");
        assert_eq!(errors["password"], "Password is required");
    }

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("a@b.c"));
        assert!(looks_like_email("first.last@sub.example.org"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.c"));
        assert!(!looks_like_email("a@.c"));
        assert!(!looks_like_email("a b@c.d"));
    }
}
