use super::*;

#[test]
fn login_request_serializes_id_and_hash() {
    let request = LoginRequest {
        id: "someone@example.com".to_owned(),
        password: "ab".repeat(32),
    };
    let json = serde_json::to_value(&request).expect("serialize");
    assert_eq!(json["id"], "someone@example.com");
    assert_eq!(json["password"], "ab".repeat(32));
}

#[test]
fn update_request_omits_untouched_fields() {
    let request = UpdateMemberRequest {
        name: "Kim".to_owned(),
        ..UpdateMemberRequest::default()
    };
    let json = serde_json::to_value(&request).expect("serialize");
    assert_eq!(json, serde_json::json!({"name": "Kim"}));
}

#[test]
fn update_request_carries_password_hashes_when_set() {
    let request = UpdateMemberRequest {
        name: "Kim".to_owned(),
        nickname: Some("kk".to_owned()),
        old_password: Some("old-hash".to_owned()),
        new_password: Some("new-hash".to_owned()),
    };
    let json = serde_json::to_value(&request).expect("serialize");
    assert_eq!(json["nickname"], "kk");
    assert_eq!(json["old_password"], "old-hash");
    assert_eq!(json["new_password"], "new-hash");
}

#[test]
fn profile_reads_every_field_from_the_envelope() {
    let envelope = ResultEnvelope::parse(
        r#"{
            "result": true,
            "data": {
                "seq": 7,
                "id": "someone@example.com",
                "status": "normal",
                "authority": "member",
                "auth_agency": "구글",
                "name": "Kim",
                "nickname": "kk",
                "join_date": "2024-01-02",
                "last_login_date": "2024-03-04"
            }
        }"#,
    );
    let profile = MemberProfile::from_envelope(&envelope);
    assert_eq!(profile.seq, 7);
    assert_eq!(profile.id, "someone@example.com");
    assert_eq!(profile.auth_agency, "구글");
    assert_eq!(profile.nickname, "kk");
    assert_eq!(profile.last_login_date, "2024-03-04");
}

#[test]
fn profile_degrades_missing_fields_without_faulting() {
    let envelope = ResultEnvelope::parse(r#"{"result":true,"data":{"name":"Kim"}}"#);
    let profile = MemberProfile::from_envelope(&envelope);
    assert_eq!(profile.seq, 0);
    assert_eq!(profile.name, "Kim");
    assert_eq!(profile.id, "");
    assert_eq!(profile.auth_agency, "");
}
