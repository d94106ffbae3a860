/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Route table and navigation guard of the web front-end

use crate::constants::{HOME_PATH, LOGIN_PATH};
use crate::model::auth::User;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::Serialize;
use tracing::debug;

/// Page rendered by a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum View {
    /// Sign-in form
    Login,
    /// Company overview with charts
    Dashboard,
    /// Current user's profile
    Profile,
    /// User and company settings
    Settings,
    /// Report index
    Reports,
    /// Payroll overview
    Payroll,
    /// Company administration
    Companies,
    /// Role assignments per company
    UserRoles,
    /// General ledger report
    GeneralLedger,
    /// Uploaded documents
    Documents,
    /// Bulk data importer
    ImportFiles,
    /// Plan and billing
    Subscriptions,
    /// Projects and time entries
    Projects,
    /// Employee records
    Employees,
    /// Payroll runs
    Payrolls,
    /// Issued paystubs
    Paystubs,
    /// Payroll taxes
    Taxes,
    /// Payroll deductions
    Deductions,
    /// Employee benefits
    Benefits,
    /// Bank accounts
    BankAccounts,
    /// Imported bank statement lines
    BankStatementLines,
    /// Bank reconciliations
    Reconciliations,
    /// Customer invoices
    Invoices,
    /// Vendor bills
    Bills,
    /// Balance sheet report
    BalanceSheet,
    /// Income statement report
    IncomeStatement,
    /// Cash flow report
    CashFlow,
    /// Audit trail, admins only
    AuditLogs,
}

/// Access rules of a route
#[derive(DebugPretty, DisplaySimple, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RouteMeta {
    /// Only reachable with a logged-in user
    pub requires_auth: bool,
    /// Only reachable by administrators
    pub admin_only: bool,
}

/// One entry of the route table
#[derive(DebugPretty, DisplaySimple, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    /// URL path
    pub path: &'static str,
    /// Unique route name
    pub name: &'static str,
    /// Page component
    pub view: View,
    /// Access rules
    pub meta: RouteMeta,
}

const fn public(path: &'static str, name: &'static str, view: View) -> Route {
    Route {
        path,
        name,
        view,
        meta: RouteMeta {
            requires_auth: false,
            admin_only: false,
        },
    }
}

const fn private(path: &'static str, name: &'static str, view: View) -> Route {
    Route {
        path,
        name,
        view,
        meta: RouteMeta {
            requires_auth: true,
            admin_only: false,
        },
    }
}

const fn admin(path: &'static str, name: &'static str, view: View) -> Route {
    Route {
        path,
        name,
        view,
        meta: RouteMeta {
            requires_auth: true,
            admin_only: true,
        },
    }
}

/// Every route of the application
pub static ROUTES: [Route; 28] = [
    public("/login", "Login", View::Login),
    private("/", "Dashboard", View::Dashboard),
    private("/profile", "Profile", View::Profile),
    private("/settings", "Settings", View::Settings),
    private("/reports", "Reports", View::Reports),
    private("/payroll", "Payroll", View::Payroll),
    private("/accounts/companies", "Companies", View::Companies),
    private("/accounts/user-roles", "UserRoles", View::UserRoles),
    private("/reports/general-ledger", "GeneralLedger", View::GeneralLedger),
    private("/documents", "Documents", View::Documents),
    private("/importer", "ImportFiles", View::ImportFiles),
    private("/subscriptions", "Subscriptions", View::Subscriptions),
    private("/projects", "Projects", View::Projects),
    private("/payroll/employees", "Employees", View::Employees),
    private("/payroll/payrolls", "Payrolls", View::Payrolls),
    private("/payroll/paystubs", "Paystubs", View::Paystubs),
    private("/payroll/taxes", "Taxes", View::Taxes),
    private("/payroll/deductions", "Deductions", View::Deductions),
    private("/payroll/benefits", "Benefits", View::Benefits),
    private("/banking/accounts", "BankAccounts", View::BankAccounts),
    private(
        "/banking/statement-lines",
        "BankStatementLines",
        View::BankStatementLines,
    ),
    private(
        "/banking/reconciliations",
        "Reconciliations",
        View::Reconciliations,
    ),
    private("/payments/invoices", "Invoices", View::Invoices),
    private("/payments/bills", "Bills", View::Bills),
    private("/reports/balance-sheet", "BalanceSheet", View::BalanceSheet),
    private(
        "/reports/income-statement",
        "IncomeStatement",
        View::IncomeStatement,
    ),
    private("/reports/cash-flow", "CashFlow", View::CashFlow),
    admin("/audit-logs", "AuditLogs", View::AuditLogs),
];

/// Outcome of the navigation guard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Navigation {
    /// Render the requested route
    Proceed,
    /// Go to another path instead
    Redirect(&'static str),
}

/// Path lookup over a route table
#[derive(Debug, Clone, Copy)]
pub struct Router {
    routes: &'static [Route],
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// Strips query, fragment and a trailing slash (except for the root)
fn clean_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ if path.is_empty() => HOME_PATH,
        _ => path,
    }
}

impl Router {
    /// Router over [`ROUTES`]
    #[must_use]
    pub fn new() -> Self {
        Self { routes: &ROUTES }
    }

    /// All routes
    #[must_use]
    pub fn routes(&self) -> &'static [Route] {
        self.routes
    }

    /// Route matching `path`
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&'static Route> {
        let path = clean_path(path);
        self.routes.iter().find(|r| r.path == path)
    }

    /// Route with the given name
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&'static Route> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// Decides whether `user` may open `path`
    ///
    /// Logged-out users are sent to the login page from protected routes,
    /// logged-in users are sent home from the login page, and non-admins are
    /// sent home from admin-only routes. Unknown paths proceed.
    #[must_use]
    pub fn guard(&self, path: &str, user: Option<&User>) -> Navigation {
        let meta = self.resolve(path).map(|r| r.meta).unwrap_or_default();
        let logged_in = user.is_some();

        let decision = if meta.requires_auth && !logged_in {
            Navigation::Redirect(LOGIN_PATH)
        } else if clean_path(path) == LOGIN_PATH && logged_in {
            Navigation::Redirect(HOME_PATH)
        } else if meta.admin_only && !user.is_some_and(User::is_admin) {
            Navigation::Redirect(HOME_PATH)
        } else {
            Navigation::Proceed
        };
        debug!("Navigation to {}: {:?}", path, decision);
        decision
    }
}
