use crate::common::logged_in_client;
use lifeline_client::prelude::*;
use mockito::Matcher;

fn page_query(page: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("page".into(), page.into()),
        Matcher::UrlEncoded("page_size".into(), "10".into()),
    ])
}

#[tokio::test]
async fn test_fetch_audit_logs_computes_pages() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/audit/")
        .match_query(page_query("1"))
        .with_status(200)
        .with_body(r#"{"count": 23, "next": "http://x/audit/?page=2", "previous": null,
                       "results": [{"id": 1}, {"id": 2}]}"#)
        .create_async()
        .await;

    let store = AuditStore::new(logged_in_client(&server, "a", "r"));
    store.fetch_audit_logs().await.unwrap();

    let state = store.snapshot().await;
    assert_eq!(state.audit_logs, vec![json!({"id": 1}), json!({"id": 2})]);
    assert_eq!(state.pagination.total_items, 23);
    assert_eq!(state.pagination.total_pages, 3);
    assert!(!state.loading);
    assert!(state.error.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_bare_array_leaves_pagination() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/audit/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"[{"id": 1}]"#)
        .create_async()
        .await;

    let store = AuditStore::new(logged_in_client(&server, "a", "r"));
    store.fetch_audit_logs().await.unwrap();

    let state = store.snapshot().await;
    assert_eq!(state.audit_logs.len(), 1);
    assert_eq!(state.pagination.total_pages, 0);
}

#[tokio::test]
async fn test_update_filters_resets_page() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/audit/")
        .match_query(page_query("3"))
        .with_status(200)
        .with_body(r#"{"count": 40, "results": []}"#)
        .create_async()
        .await;
    let filtered = server
        .mock("GET", "/audit/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("action_type".into(), "delete".into()),
            Matcher::UrlEncoded("search".into(), "invoice".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"count": 2, "results": [{"id": 5}, {"id": 6}]}"#)
        .expect(1)
        .create_async()
        .await;

    let store = AuditStore::new(logged_in_client(&server, "a", "r"));
    store.update_page(3).await.unwrap();
    assert_eq!(store.snapshot().await.pagination.page, 3);

    store
        .update_filters(&AuditFilterUpdate {
            action_type: Some("delete".to_string()),
            search: Some("invoice".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let state = store.snapshot().await;
    assert_eq!(state.pagination.page, 1);
    assert_eq!(state.pagination.total_pages, 1);
    assert_eq!(state.filters.action_type, "delete");
    filtered.assert_async().await;

    store.reset_filters().await;
    let state = store.snapshot().await;
    assert_eq!(state.filters, AuditLogFilters::default());
    assert_eq!(state.pagination.page, 1);
}

#[tokio::test]
async fn test_empty_value_clears_one_filter() {
    let mut server = mockito::Server::new_async().await;
    let searched = server
        .mock("GET", "/audit/")
        .match_query(Matcher::Regex(
            "^page=1&page_size=10&user=4&search=invoice$".into(),
        ))
        .with_status(200)
        .with_body(r#"{"count": 1, "results": [{"id": 9}]}"#)
        .expect(1)
        .create_async()
        .await;
    let cleared = server
        .mock("GET", "/audit/")
        .match_query(Matcher::Regex("^page=1&page_size=10&user=4$".into()))
        .with_status(200)
        .with_body(r#"{"count": 3, "results": [{"id": 9}, {"id": 10}, {"id": 11}]}"#)
        .expect(1)
        .create_async()
        .await;

    let store = AuditStore::new(logged_in_client(&server, "a", "r"));
    store
        .update_filters(&AuditFilterUpdate {
            user: Some("4".to_string()),
            search: Some("invoice".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    store
        .update_filters(&AuditFilterUpdate {
            search: Some(String::new()),
            ..Default::default()
        })
        .await
        .unwrap();

    let state = store.snapshot().await;
    assert_eq!(state.filters.search, "");
    assert_eq!(state.filters.user, "4");
    assert_eq!(state.audit_logs.len(), 3);
    searched.assert_async().await;
    cleared.assert_async().await;
}

#[tokio::test]
async fn test_fetch_errors_are_recorded() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/audit/42/")
        .with_status(404)
        .create_async()
        .await;

    let store = AuditStore::new(logged_in_client(&server, "a", "r"));
    assert!(matches!(
        store.fetch_audit_log("42").await,
        Err(AppError::NotFound)
    ));

    let state = store.snapshot().await;
    assert_eq!(state.error.as_deref(), Some("not found"));
    assert!(state.audit_log.is_none());
    assert!(!state.loading);
}

#[tokio::test]
async fn test_load_action_types() {
    let server = mockito::Server::new_async().await;
    let store = AuditStore::new(logged_in_client(&server, "a", "r"));
    store.load_action_types().await;

    let state = store.snapshot().await;
    assert_eq!(state.action_types.len(), 9);
    assert_eq!(state.action_types[0].text, "Create");
}
