use super::*;

// =============================================================
// Login form
// =============================================================

#[test]
fn login_requires_both_fields() {
    assert!(validate_login("", "secret-pw").is_err());
    assert!(validate_login("   ", "secret-pw").is_err());
    assert!(validate_login("someone", "").is_err());
    assert!(validate_login("someone", "secret-pw").is_ok());
}

// =============================================================
// Profile edit
// =============================================================

#[test]
fn empty_name_is_rejected() {
    // Property: the edit must be blocked before any request is issued.
    assert!(validate_member_edit("", "", "", "").is_err());
}

#[test]
fn name_length_bounds_are_inclusive() {
    assert!(validate_member_edit(&"a".repeat(64), "", "", "").is_ok());
    assert!(validate_member_edit(&"a".repeat(65), "", "", "").is_err());
    assert!(validate_member_edit("a", "", "", "").is_ok());
}

#[test]
fn name_counts_characters_not_bytes() {
    // 64 Hangul characters are 192 bytes but still a valid name.
    assert!(validate_member_edit(&"김".repeat(64), "", "", "").is_ok());
}

#[test]
fn nickname_is_optional_but_bounded() {
    assert!(validate_member_edit("Kim", "", "", "").is_ok());
    assert!(validate_member_edit("Kim", "a", "", "").is_err());
    assert!(validate_member_edit("Kim", "ab", "", "").is_ok());
    assert!(validate_member_edit("Kim", &"a".repeat(16), "", "").is_ok());
    assert!(validate_member_edit("Kim", &"a".repeat(17), "", "").is_err());
}

#[test]
fn passwords_are_optional_but_bounded() {
    assert!(validate_member_edit("Kim", "", "", "").is_ok());
    assert!(validate_member_edit("Kim", "", &"p".repeat(7), "").is_err());
    assert!(validate_member_edit("Kim", "", &"p".repeat(8), &"p".repeat(8)).is_ok());
    assert!(validate_member_edit("Kim", "", "", &"p".repeat(33)).is_err());
    assert!(validate_member_edit("Kim", "", &"p".repeat(32), "").is_ok());
}
