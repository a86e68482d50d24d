//! Client-side form validation, applied before any network call.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Minimum accepted password length for registration.
pub const MIN_PASSWORD_LEN: usize = 8;

pub const INVALID_EMAIL_MSG: &str = "Please enter a valid email address.";
pub const SHORT_PASSWORD_MSG: &str = "Password must be at least 8 characters.";

/// Shape check only: one `@` separating a non-empty local part from a domain
/// with a dot, no whitespace anywhere. Real validation happens server-side.
pub fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.split_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Validate a registration form. Returns the first problem found.
pub fn validate_registration(email: &str, password: &str) -> Result<(), &'static str> {
    if !is_valid_email(email) {
        return Err(INVALID_EMAIL_MSG);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(SHORT_PASSWORD_MSG);
    }
    Ok(())
}
