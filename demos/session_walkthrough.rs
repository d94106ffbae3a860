use lifeline_client::prelude::*;
use lifeline_client::presentation::formatters::{format_currency, format_date, format_status};
use std::error::Error;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logger();

    let config = Config::new();
    info!("=== Lifeline Session Walkthrough ===");
    info!("  Base URL: {}", config.rest_api.base_url);

    let Some(credentials) = config.credentials.clone() else {
        error!("Set LIFELINE_USERNAME and LIFELINE_PASSWORD to run this demo");
        return Err("Missing credentials".into());
    };

    let storage = Arc::new(AuthStorage::from_config(&config));
    let inactivity = config.inactivity_timeout();
    let client = Arc::new(HttpClient::new(config, storage)?);

    // Print session lifecycle events as they happen
    let mut events = client.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            info!("Session event: {:?}", event);
        }
    });

    let store = Arc::new(AppStore::new(client.clone()));
    let user = store.login(&credentials).await?;
    info!(
        "Logged in as {} (company {:?})",
        user.username.as_deref().unwrap_or("unknown"),
        store.selected_company_id().await
    );

    let monitor = InactivityMonitor::start(store.clone(), inactivity);

    let payments = PaymentsServiceImpl::new(client.clone());
    match payments.get_invoices().await {
        Ok(invoices) => {
            let rows: ListEnvelope<Value> = serde_json::from_value(invoices)?;
            info!("Found {} invoices", rows.count());
            for invoice in rows.items().iter().take(10) {
                let number = invoice["invoice_number"].as_str().unwrap_or("-");
                let total = invoice["total_amount"]
                    .as_f64()
                    .or_else(|| invoice["total_amount"].as_str().and_then(|s| s.parse().ok()))
                    .unwrap_or(0.0);
                let currency = invoice["currency"].as_str().unwrap_or("USD");
                let date = invoice["invoice_date"].as_str().unwrap_or("");
                let status = invoice["status"].as_str().unwrap_or("");
                info!(
                    "  {:<12} {:>14} {:<14} {}",
                    number,
                    format_currency(total, currency),
                    format_date(date, DateStyle::Short),
                    format_status(status)
                );
            }
        }
        Err(e) => warn!("Could not list invoices: {}", e),
    }

    monitor.touch();
    info!("Inactivity logout in {:?}", monitor.remaining());
    monitor.stop();

    store.logout().await?;
    info!("Logged out");
    Ok(())
}
