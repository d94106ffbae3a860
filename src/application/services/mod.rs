/// Audit log service
pub mod audit_service;
/// Authentication service
pub mod auth_service;
/// Customers and vendors service
pub mod contacts_service;
/// Companies, chart of accounts and general ledger service
pub mod core_service;
/// Dashboard aggregates service
pub mod dashboard_service;
/// Budgets, fixed assets and exchange rates service
pub mod finance_service;
/// Invoices, bills and payments service
pub mod payments_service;
/// Projects and time entries service
pub mod projects_service;
/// Uniform CRUD helper shared by the services
pub mod resource;
/// Tax rates and tax transactions service
pub mod tax_service;

pub use audit_service::*;
pub use auth_service::*;
pub use contacts_service::*;
pub use core_service::*;
pub use dashboard_service::*;
pub use finance_service::*;
pub use payments_service::*;
pub use projects_service::*;
pub use resource::*;
pub use tax_service::*;
