use super::*;

#[test]
fn hash_matches_the_known_sha256_vector() {
    assert_eq!(
        hash_password("password"),
        "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
    );
}

#[test]
fn hash_is_lowercase_hex_of_fixed_width() {
    let hash = hash_password("비밀번호1234");
    assert_eq!(hash.len(), 64);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn distinct_passwords_hash_differently() {
    assert_ne!(hash_password("hunter2"), hash_password("hunter3"));
}

#[test]
fn hash_if_present_skips_the_empty_case() {
    assert_eq!(hash_if_present(""), None);
    assert_eq!(
        hash_if_present("password").as_deref(),
        Some("5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8")
    );
}
