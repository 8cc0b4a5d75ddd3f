//! Client-side field validation for the member forms.
//!
//! Violations are local validation errors: they surface as inline messages
//! and block the request before any network dispatch.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

const NAME_MIN: usize = 1;
const NAME_MAX: usize = 64;
const NICKNAME_MIN: usize = 2;
const NICKNAME_MAX: usize = 16;
const PASSWORD_MIN: usize = 8;
const PASSWORD_MAX: usize = 32;

/// Check the login form. Both fields are required.
///
/// # Errors
///
/// Returns the inline message to show when a field is missing.
pub fn validate_login(id: &str, password: &str) -> Result<(), String> {
    if id.trim().is_empty() {
        return Err("Enter your id.".to_owned());
    }
    if password.is_empty() {
        return Err("Enter your password.".to_owned());
    }
    Ok(())
}

/// Check a profile edit before it is sent.
///
/// `name` is required (1-64 characters). `nickname` and the password pair
/// are optional but length-checked when supplied (2-16 and 8-32 characters).
/// Lengths count characters, not bytes, so multibyte names are not
/// penalized.
///
/// # Errors
///
/// Returns the first violation as an inline message.
pub fn validate_member_edit(
    name: &str,
    nickname: &str,
    old_password: &str,
    new_password: &str,
) -> Result<(), String> {
    let name_len = name.chars().count();
    if !(NAME_MIN..=NAME_MAX).contains(&name_len) {
        return Err(format!("Name must be {NAME_MIN}-{NAME_MAX} characters."));
    }
    if !nickname.is_empty() {
        let len = nickname.chars().count();
        if !(NICKNAME_MIN..=NICKNAME_MAX).contains(&len) {
            return Err(format!(
                "Nickname must be {NICKNAME_MIN}-{NICKNAME_MAX} characters."
            ));
        }
    }
    for password in [old_password, new_password] {
        if !password.is_empty() {
            let len = password.chars().count();
            if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&len) {
                return Err(format!(
                    "Passwords must be {PASSWORD_MIN}-{PASSWORD_MAX} characters."
                ));
            }
        }
    }
    Ok(())
}
