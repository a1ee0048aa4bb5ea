//! Client-side field validation
//!
//! Mirrors the checks the signup form runs before any request is sent, so
//! ill-formed input fails fast without a round trip.

use thiserror::Error;

/// Characters counted as special for password scoring
const SPECIAL_CHARS: &str = r#"!@#$%^&*(),.?":{}|<>"#;

/// Field validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("login id must be 4-20 letters and digits")]
    LoginId,
    #[error("invalid email format")]
    Email,
    #[error("password must be at least 8 characters and mix letters, digits and special characters")]
    WeakPassword,
    #[error("{0} cannot be empty")]
    Empty(&'static str),
}

/// Password strength buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

/// Score a password over five checks: length >= 8, lowercase, uppercase,
/// digit, special character. Fewer than three passing checks is weak,
/// fewer than five is medium.
pub fn password_strength(password: &str) -> PasswordStrength {
    let checks = [
        password.chars().count() >= 8,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| SPECIAL_CHARS.contains(c)),
    ];
    let score = checks.iter().filter(|passed| **passed).count();

    if score < 3 {
        PasswordStrength::Weak
    } else if score < 5 {
        PasswordStrength::Medium
    } else {
        PasswordStrength::Strong
    }
}

/// Login ids are 4-20 ASCII letters and digits
pub fn validate_login_id(login_id: &str) -> Result<(), ValidationError> {
    let len = login_id.chars().count();
    if (4..=20).contains(&len) && login_id.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(ValidationError::LoginId)
    }
}

/// Minimal shape check: non-empty local part, one `@`, a dot in the domain,
/// no whitespace anywhere
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.chars().any(char::is_whitespace) {
        return Err(ValidationError::Email);
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(ValidationError::Email);
    }
    let mut domain_parts = domain.rsplitn(2, '.');
    let tld = domain_parts.next().unwrap_or_default();
    let rest = domain_parts.next().unwrap_or_default();
    if tld.is_empty() || rest.is_empty() {
        return Err(ValidationError::Email);
    }
    Ok(())
}

/// Weak passwords are rejected; medium and strong pass
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    match password_strength(password) {
        PasswordStrength::Weak => Err(ValidationError::WeakPassword),
        _ => Ok(()),
    }
}
