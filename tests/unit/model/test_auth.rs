use assert_json_diff::assert_json_eq;
use lifeline_client::model::auth::{Credentials, LoginResponse, User, company_id_of};
use serde_json::json;

#[test]
fn test_admin_detection() {
    let staff: User = serde_json::from_value(json!({"id": 1, "is_staff": true})).unwrap();
    let superuser: User = serde_json::from_value(json!({"id": 2, "is_superuser": true})).unwrap();
    let role: User = serde_json::from_value(json!({"id": 3, "role": "admin"})).unwrap();
    let clerk: User = serde_json::from_value(json!({"id": 4, "role": "accountant"})).unwrap();

    assert!(staff.is_admin());
    assert!(superuser.is_admin());
    assert!(role.is_admin());
    assert!(!clerk.is_admin());
}

#[test]
fn test_user_round_trip_keeps_server_fields() {
    let payload = json!({
        "id": "u-1",
        "username": "alice",
        "companies": [{"company_id": "c-1"}],
        "activeCompany": {"company_id": "c-1"},
        "profile_photo": "/media/alice.png",
        "preferences": {"theme": "dark"}
    });
    let user: User = serde_json::from_value(payload.clone()).unwrap();
    assert_eq!(user.id_string().as_deref(), Some("u-1"));
    assert_eq!(user.first_company_id().as_deref(), Some("c-1"));

    let back = serde_json::to_value(&user).unwrap();
    assert_json_eq!(
        back,
        json!({
            "id": "u-1",
            "username": "alice",
            "is_superuser": false,
            "is_staff": false,
            "companies": [{"company_id": "c-1"}],
            "activeCompany": {"company_id": "c-1"},
            "profile_photo": "/media/alice.png",
            "preferences": {"theme": "dark"}
        })
    );
}

#[test]
fn test_company_id_variants() {
    assert_eq!(company_id_of(&json!({"CompanyID": 5, "id": 9})).as_deref(), Some("5"));
    assert_eq!(company_id_of(&json!({"company_id": "abc"})).as_deref(), Some("abc"));
    assert_eq!(company_id_of(&json!({"id": 12})).as_deref(), Some("12"));
    assert_eq!(company_id_of(&json!({"name": "No id"})), None);
}

#[test]
fn test_login_response_without_user() {
    let response: LoginResponse =
        serde_json::from_value(json!({"access": "a", "refresh": "r"})).unwrap();
    assert_eq!(response.access.as_deref(), Some("a"));
    assert!(response.user.is_none());
}

#[test]
fn test_credentials_payload() {
    let creds = Credentials::new("alice", "pw").remember(true);
    assert_json_eq!(
        serde_json::to_value(&creds).unwrap(),
        json!({"username": "alice", "password": "pw", "remember_me": true})
    );
}
