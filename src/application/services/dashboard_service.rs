/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::application::client::HttpClient;
use crate::application::interfaces::dashboard::DashboardService;
use crate::constants::DASHBOARD_PATH;
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Implementation of the dashboard aggregates service
///
/// Every endpoint is scoped to the active company; calls made before a
/// company is selected fail without touching the network.
pub struct DashboardServiceImpl {
    client: Arc<HttpClient>,
}

impl DashboardServiceImpl {
    /// Creates a new instance of the service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    fn require_company(&self) -> Result<String, AppError> {
        let storage = self.client.storage();
        if let Some(company) = storage.selected_company_id() {
            return Ok(company);
        }
        // fall back to the user's first company and make it the selection
        match storage.current_user().and_then(|u| u.first_company_id()) {
            Some(company) => {
                storage.set_selected_company_id(Some(&company));
                Ok(company)
            }
            None => {
                warn!("Dashboard request without an active company");
                Err(AppError::InvalidInput(
                    "No active company selected".to_string(),
                ))
            }
        }
    }

    async fn fetch(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value, AppError> {
        let company = self.require_company()?;
        let path = format!("{}{}", DASHBOARD_PATH, endpoint);
        debug!("Fetching {} for company {}", path, company);
        self.client.get_with_query(&path, params).await
    }
}

fn repeated<'a>(
    key: &'static str,
    values: &'a [String],
) -> impl Iterator<Item = (&'static str, String)> + 'a {
    values.iter().map(move |v| (key, v.clone()))
}

#[async_trait]
impl DashboardService for DashboardServiceImpl {
    async fn get_overview(&self, period: &str) -> Result<Value, AppError> {
        self.fetch("overview", &[("period", period.to_string())]).await
    }

    async fn get_revenue_data(&self, start_date: &str, end_date: &str) -> Result<Value, AppError> {
        self.fetch(
            "revenue",
            &[
                ("startDate", start_date.to_string()),
                ("endDate", end_date.to_string()),
            ],
        )
        .await
    }

    async fn get_expenses_data(
        &self,
        start_date: &str,
        end_date: &str,
        categories: &[String],
    ) -> Result<Value, AppError> {
        let mut params = vec![
            ("startDate", start_date.to_string()),
            ("endDate", end_date.to_string()),
        ];
        params.extend(repeated("categories", categories));
        self.fetch("expenses", &params).await
    }

    async fn get_recent_transactions(&self, limit: u32, kind: &str) -> Result<Value, AppError> {
        self.fetch(
            "transactions",
            &[("limit", limit.to_string()), ("type", kind.to_string())],
        )
        .await
    }

    async fn get_cash_flow(&self, period: &str, projection: bool) -> Result<Value, AppError> {
        self.fetch(
            "cash-flow",
            &[
                ("period", period.to_string()),
                ("projection", projection.to_string()),
            ],
        )
        .await
    }

    async fn get_account_balances(&self, account_types: &[String]) -> Result<Value, AppError> {
        let params: Vec<_> = repeated("accountTypes", account_types).collect();
        self.fetch("account-balances", &params).await
    }

    async fn get_key_metrics(&self, period: &str) -> Result<Value, AppError> {
        self.fetch("key-metrics", &[("period", period.to_string())])
            .await
    }

    async fn get_invoice_status(&self) -> Result<Value, AppError> {
        self.fetch("invoice-status", &[]).await
    }

    async fn get_budget_comparison(&self, year: i32, month: u32) -> Result<Value, AppError> {
        self.fetch(
            "budget-comparison",
            &[("year", year.to_string()), ("month", month.to_string())],
        )
        .await
    }

    async fn get_accounting_health(&self) -> Result<Value, AppError> {
        self.fetch("accounting-health", &[]).await
    }
}
