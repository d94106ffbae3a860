/// Default base URL of the Lifeline REST API
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = "lifeline-client/0.3.0";
/// Default page size for paginated list views
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Minutes without activity before the session is logged out
pub const DEFAULT_INACTIVITY_MINUTES: u64 = 30;
/// Default file backing the persistent ("local") session store
pub const DEFAULT_SESSION_FILE: &str = ".lifeline_session.json";

/// Header carrying the bearer token
pub const AUTHORIZATION_HEADER: &str = "Authorization";
/// Header scoping a request to a company (tenant)
pub const COMPANY_HEADER: &str = "X-Company-ID";

/// Storage key of the access token
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key of the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// Storage key of the serialized user
pub const USER_KEY: &str = "user";
/// Storage key of the selected company id
pub const SELECTED_COMPANY_KEY: &str = "selectedCompanyId";
/// Legacy storage key of the selected company id, read as a fallback
pub const ACTIVE_COMPANY_KEY: &str = "activeCompanyId";
/// Storage key pinning the id of the user the session belongs to
pub const CURRENT_USER_ID_KEY: &str = "current_user_id";
/// Storage key recording where auth data should be persisted
pub const PERSISTENCE_PREF_KEY: &str = "lifeline_auth_persistence";

/// Every key removed when the session is cleared
pub const SESSION_KEYS: [&str; 6] = [
    ACCESS_TOKEN_KEY,
    REFRESH_TOKEN_KEY,
    USER_KEY,
    SELECTED_COMPANY_KEY,
    ACTIVE_COMPANY_KEY,
    CURRENT_USER_ID_KEY,
];

/// Path the user is sent to when the session ends
pub const LOGIN_PATH: &str = "/login";
/// Landing path for authenticated users
pub const HOME_PATH: &str = "/";

/// Login endpoint
pub const AUTH_LOGIN_PATH: &str = "/auth/login/";
/// Token refresh endpoint
pub const AUTH_REFRESH_PATH: &str = "/auth/refresh/";
/// Logout endpoint
pub const AUTH_LOGOUT_PATH: &str = "/auth/logout/";
/// Registration endpoint
pub const AUTH_REGISTER_PATH: &str = "/auth/register/";
/// Current user profile endpoint
pub const AUTH_PROFILE_PATH: &str = "/auth/profile/";
/// Password change endpoint
pub const AUTH_CHANGE_PASSWORD_PATH: &str = "/auth/change-password/";
/// Avatar upload endpoint
pub const AUTH_UPLOAD_AVATAR_PATH: &str = "/auth/upload-avatar/";

/// Companies collection
pub const COMPANIES_PATH: &str = "/core/companies/";
/// Chart of accounts collection
pub const CHART_OF_ACCOUNTS_PATH: &str = "/core/chart-of-accounts/";
/// General ledger collection
pub const GENERAL_LEDGER_PATH: &str = "/core/general-ledger/";
/// Customers collection
pub const CUSTOMERS_PATH: &str = "/contacts/customers/";
/// Vendors collection
pub const VENDORS_PATH: &str = "/contacts/vendors/";
/// Invoices collection
pub const INVOICES_PATH: &str = "/payments/invoices/";
/// Bills collection
pub const BILLS_PATH: &str = "/payments/bills/";
/// Payments collection
pub const PAYMENTS_PATH: &str = "/payments/payments/";
/// Budgets collection
pub const BUDGETS_PATH: &str = "/finance/budgets/";
/// Fixed assets collection
pub const FIXED_ASSETS_PATH: &str = "/finance/fixed-assets/";
/// Exchange rates collection
pub const EXCHANGE_RATES_PATH: &str = "/finance/exchange-rates/";
/// Tax rates collection
pub const TAX_RATES_PATH: &str = "/tax/tax-rates/";
/// Tax transactions collection
pub const TAX_TRANSACTIONS_PATH: &str = "/tax/tax-transactions/";
/// Projects collection
pub const PROJECTS_PATH: &str = "/projects/projects/";
/// Time entries collection
pub const TIME_ENTRIES_PATH: &str = "/projects/time-entries/";
/// Audit log collection
pub const AUDIT_PATH: &str = "/audit/";
/// Prefix of the dashboard aggregate endpoints
pub const DASHBOARD_PATH: &str = "/dashboard/";
