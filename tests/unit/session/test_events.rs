use lifeline_client::session::SessionEvent;
use serde_json::json;

#[test]
fn test_expired_redirects_to_login() {
    assert_eq!(
        SessionEvent::expired(),
        SessionEvent::Expired {
            redirect_to: "/login".to_string()
        }
    );
}

#[test]
fn test_event_serialization() {
    assert_eq!(
        serde_json::to_value(SessionEvent::expired()).unwrap(),
        json!({"type": "expired", "redirect_to": "/login"})
    );
    assert_eq!(
        serde_json::to_value(SessionEvent::TokenRefreshed).unwrap(),
        json!({"type": "token_refreshed"})
    );
}
