use crate::models::{RoleDraft, UserDraft};
use std::collections::BTreeMap;

/// Field name -> message, empty iff the draft is valid. Keyed by field so the
/// form can render each message next to the offending input.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Validate a user draft before save. All fields are checked in one pass so
/// every violation can be displayed at once.
pub fn validate_user(draft: &UserDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let username = draft.username.trim();
    if username.is_empty() {
        errors.insert("username", "Username is required".to_string());
    } else if username.chars().count() < 3 {
        errors.insert(
            "username",
            "Username must be at least 3 characters".to_string(),
        );
    }

    let email = draft.email.trim();
    if email.is_empty() {
        errors.insert("email", "Email is required".to_string());
    } else if !is_valid_email(email) {
        errors.insert("email", "Invalid email format".to_string());
    }

    if draft.role.trim().is_empty() {
        errors.insert("role", "Role is required".to_string());
    }

    errors
}

/// Validate a role draft before save.
pub fn validate_role(draft: &RoleDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.name.trim().is_empty() {
        errors.insert("name", "Role name is required".to_string());
    }

    errors
}

fn is_valid_email(email: &str) -> bool {
    if !email_address::EmailAddress::is_valid(email) {
        return false;
    }

    // Additional validation: require a TLD (dot after @)
    match email.find('@') {
        Some(at_pos) => email[at_pos + 1..].contains('.'),
        None => false,
    }
}
