use super::*;

#[test]
fn set_cookie_string_is_site_scoped_with_fixed_expiry() {
    assert_eq!(
        format_set_cookie("member_jwt", "tok", 15),
        "member_jwt=tok; path=/; max-age=1296000; samesite=lax"
    );
}

#[test]
fn clear_cookie_string_expires_immediately() {
    assert_eq!(format_clear_cookie("member_jwt"), "member_jwt=; path=/; max-age=0");
}

#[test]
fn find_cookie_picks_the_named_value() {
    let header = "theme=dark; member_jwt=ey.jwt.sig; lang=ko";
    assert_eq!(find_cookie(header, "member_jwt").as_deref(), Some("ey.jwt.sig"));
    assert_eq!(find_cookie(header, "lang").as_deref(), Some("ko"));
}

#[test]
fn find_cookie_misses_cleanly() {
    assert_eq!(find_cookie("theme=dark", "member_jwt"), None);
    assert_eq!(find_cookie("", "member_jwt"), None);
}

#[test]
fn find_cookie_does_not_match_name_prefixes() {
    let header = "member_jwt_backup=old; member_jwt=new";
    assert_eq!(find_cookie(header, "member_jwt").as_deref(), Some("new"));
}

#[test]
fn cookie_values_round_trip_byte_for_byte() {
    // The token written at login must come back identical on read.
    let token = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiI3In0.c2ln-_Zg";
    let header = format_set_cookie("member_jwt", token, 15);
    assert_eq!(find_cookie(&header, "member_jwt").as_deref(), Some(token));
}
