use crate::common;
use lifeline_client::prelude::*;
use tracing::info;

#[tokio::test]
#[ignore]
async fn test_list_endpoints() {
    let store = common::login().await;
    let client = store.client().clone();

    let invoices = PaymentsServiceImpl::new(client.clone())
        .get_invoices()
        .await
        .expect("Failed to list invoices");
    info!("Invoices: {}", invoices);

    let customers = ContactsServiceImpl::new(client.clone())
        .get_customers()
        .await
        .expect("Failed to list customers");
    assert!(customers.is_array() || customers.get("results").is_some());

    let accounts = CoreServiceImpl::new(client)
        .get_chart_of_accounts()
        .await
        .expect("Failed to list accounts");
    info!("Accounts: {}", accounts);
}

#[tokio::test]
#[ignore]
async fn test_audit_first_page() {
    let store = common::login().await;
    let audit = AuditStore::new(store.client().clone());

    audit.fetch_audit_logs().await.expect("Failed to fetch audit logs");
    let state = audit.snapshot().await;
    info!(
        "Audit page 1 of {} ({} items)",
        state.pagination.total_pages,
        state.audit_logs.len()
    );
}
