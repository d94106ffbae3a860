/// Audit log service interface
pub mod audit;
/// Authentication service interface
pub mod auth;
/// Customers and vendors service interface
pub mod contacts;
/// Companies, chart of accounts and general ledger service interface
pub mod core;
/// Dashboard aggregates service interface
pub mod dashboard;
/// Budgets, fixed assets and exchange rates service interface
pub mod finance;
/// Invoices, bills and payments service interface
pub mod payments;
/// Projects and time entries service interface
pub mod projects;
/// Tax rates and tax transactions service interface
pub mod tax;
