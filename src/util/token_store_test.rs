use super::*;

// =============================================================
// Authenticated-action gate
// =============================================================

#[test]
fn gate_redirects_when_no_token_is_stored() {
    // Deleting (or fetching/updating) with no session goes back to login
    // instead of issuing a request with an empty credential.
    assert_eq!(gate(None), TokenGate::Redirect);
}

#[test]
fn gate_redirects_on_an_empty_token() {
    assert_eq!(gate(Some(String::new())), TokenGate::Redirect);
}

#[test]
fn gate_passes_the_stored_token_through() {
    assert_eq!(
        gate(Some("ey.jwt.sig".to_owned())),
        TokenGate::Proceed("ey.jwt.sig".to_owned())
    );
}
