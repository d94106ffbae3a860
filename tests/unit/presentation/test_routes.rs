use lifeline_client::model::auth::User;
use lifeline_client::presentation::routes::{Navigation, ROUTES, Router, View};
use serde_json::json;

fn user(admin: bool) -> User {
    serde_json::from_value(json!({"id": 1, "is_staff": admin})).unwrap()
}

#[test]
fn test_table_shape() {
    assert_eq!(ROUTES.len(), 28);
    let public: Vec<_> = ROUTES.iter().filter(|r| !r.meta.requires_auth).collect();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].path, "/login");

    let admin: Vec<_> = ROUTES.iter().filter(|r| r.meta.admin_only).collect();
    assert_eq!(admin.len(), 1);
    assert_eq!(admin[0].view, View::AuditLogs);
}

#[test]
fn test_resolve_and_by_name() {
    let router = Router::new();
    assert_eq!(
        router.resolve("/payments/invoices/").map(|r| r.name),
        Some("Invoices")
    );
    assert_eq!(
        router.resolve("/reports/cash-flow?year=2026").map(|r| r.view),
        Some(View::CashFlow)
    );
    assert!(router.resolve("/nowhere").is_none());
    assert_eq!(
        router.by_name("BankStatementLines").map(|r| r.path),
        Some("/banking/statement-lines")
    );
}

#[test]
fn test_guard_logged_out() {
    let router = Router::new();
    assert_eq!(router.guard("/", None), Navigation::Redirect("/login"));
    assert_eq!(
        router.guard("/payroll/employees", None),
        Navigation::Redirect("/login")
    );
    assert_eq!(router.guard("/audit-logs", None), Navigation::Redirect("/login"));
    assert_eq!(router.guard("/login", None), Navigation::Proceed);
}

#[test]
fn test_guard_logged_in() {
    let router = Router::new();
    let clerk = user(false);
    assert_eq!(router.guard("/login", Some(&clerk)), Navigation::Redirect("/"));
    assert_eq!(router.guard("/projects", Some(&clerk)), Navigation::Proceed);
    assert_eq!(
        router.guard("/audit-logs", Some(&clerk)),
        Navigation::Redirect("/")
    );

    let admin = user(true);
    assert_eq!(router.guard("/audit-logs", Some(&admin)), Navigation::Proceed);
}

#[test]
fn test_guard_unknown_path_proceeds() {
    assert_eq!(Router::new().guard("/nowhere", None), Navigation::Proceed);
}
