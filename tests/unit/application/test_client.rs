use crate::common::{client_for, logged_in_client};
use lifeline_client::prelude::*;
use mockito::Matcher;

#[tokio::test]
async fn test_bearer_and_company_headers_are_attached() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/core/companies/")
        .match_header("authorization", "Bearer access-1")
        .match_header("x-company-id", "12")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"CompanyID": 12}]"#)
        .expect(1)
        .create_async()
        .await;

    let client = logged_in_client(&server, "access-1", "refresh-1");
    client.storage().set_selected_company_id(Some("12"));

    let companies: Value = client.get("/core/companies/").await.unwrap();
    assert_eq!(companies, json!([{"CompanyID": 12}]));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_anonymous_request_has_no_auth_header() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/core/companies/")
        .match_header("authorization", Matcher::Missing)
        .match_header("x-company-id", Matcher::Missing)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = client_for(&server);
    let companies: Value = client.get("/core/companies/").await.unwrap();
    assert_eq!(companies, json!([]));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_body_reads_as_null() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("DELETE", "/payments/bills/3/")
        .with_status(204)
        .create_async()
        .await;

    let client = logged_in_client(&server, "a", "r");
    let body: Value = client.delete("/payments/bills/3/").await.unwrap();
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_status_mapping() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/tax/tax-rates/99/")
        .with_status(404)
        .create_async()
        .await;
    server
        .mock("GET", "/tax/tax-rates/")
        .with_status(429)
        .create_async()
        .await;
    server
        .mock("POST", "/tax/tax-rates/")
        .with_status(400)
        .with_body(r#"{"rate":["A valid number is required."]}"#)
        .create_async()
        .await;

    let client = logged_in_client(&server, "a", "r");

    let missing: Result<Value, _> = client.get("/tax/tax-rates/99/").await;
    assert!(matches!(missing, Err(AppError::NotFound)));

    let throttled: Result<Value, _> = client.get("/tax/tax-rates/").await;
    assert!(matches!(throttled, Err(AppError::RateLimitExceeded)));

    let invalid: Result<Value, _> = client.post("/tax/tax-rates/", &json!({"rate": "x"})).await;
    match invalid {
        Err(AppError::Http { status, body }) => {
            assert_eq!(status.as_u16(), 400);
            assert!(body.contains("A valid number is required."));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_json_body_is_sent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/finance/budgets/5/")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"name": "Q3", "amount": 1200})))
        .with_status(200)
        .with_body(r#"{"id": 5, "name": "Q3", "amount": 1200}"#)
        .create_async()
        .await;

    let client = logged_in_client(&server, "a", "r");
    let updated: Value = client
        .put("/finance/budgets/5/", &json!({"name": "Q3", "amount": 1200}))
        .await
        .unwrap();
    assert_eq!(updated["id"], 5);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_query_pairs_are_encoded() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/audit/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("search".into(), "late fee".into()),
            Matcher::UrlEncoded("page".into(), "2".into()),
        ]))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = logged_in_client(&server, "a", "r");
    let _: Value = client
        .get_with_query("/audit/", &[("search", "late fee"), ("page", "2")])
        .await
        .unwrap();
    mock.assert_async().await;
}
