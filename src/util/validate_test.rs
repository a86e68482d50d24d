use super::*;

#[test]
fn accepts_ordinary_addresses() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("first.last@mail.example.org"));
}

#[test]
fn rejects_malformed_addresses() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("plain"));
    assert!(!is_valid_email("@b.com"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a@.com"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email("a@b@c.com"));
    assert!(!is_valid_email("a b@c.com"));
}

#[test]
fn registration_rejects_bad_email_first() {
    assert_eq!(validate_registration("nope", "longenough"), Err(INVALID_EMAIL_MSG));
}

#[test]
fn registration_rejects_short_password() {
    assert_eq!(validate_registration("a@b.com", "short"), Err(SHORT_PASSWORD_MSG));
}

#[test]
fn registration_accepts_valid_input() {
    assert_eq!(validate_registration("a@b.com", "pw123456"), Ok(()));
}
