use lifeline_client::model::responses::ListEnvelope;
use serde_json::{Value, json};

#[test]
fn test_paginated_envelope() {
    let envelope: ListEnvelope = serde_json::from_value(json!({
        "count": 42,
        "next": "http://localhost:8000/api/audit/?page=2",
        "previous": null,
        "results": [{"id": 1}, {"id": 2}]
    }))
    .unwrap();

    assert!(envelope.is_paginated());
    assert_eq!(envelope.count(), 42);
    assert_eq!(envelope.items().len(), 2);
}

#[test]
fn test_bare_array_envelope() {
    let envelope: ListEnvelope = serde_json::from_value(json!([{"id": 1}])).unwrap();
    assert!(!envelope.is_paginated());
    assert_eq!(envelope.count(), 1);
    assert_eq!(envelope.into_items(), vec![json!({"id": 1})]);
}

#[test]
fn test_default_is_empty() {
    let envelope = ListEnvelope::<Value>::default();
    assert_eq!(envelope.count(), 0);
    assert!(envelope.items().is_empty());
}
