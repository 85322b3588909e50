use accessdesk::config::Config;
use accessdesk::domain::ports::data_service::DataService;
use accessdesk::services::{DashboardService, RoleAdminService, UserAdminService};
use accessdesk::store::MemoryStore;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "accessdesk=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Build the simulated backend
    let store: Arc<dyn DataService> = if config.seed_demo_data {
        Arc::new(MemoryStore::seeded(config.api_latency()))
    } else {
        Arc::new(MemoryStore::new(config.api_latency()))
    };
    tracing::info!(
        "In-memory store ready ({} ms simulated latency)",
        config.api_latency_ms
    );

    let users = UserAdminService::new(store.clone());
    let roles = RoleAdminService::new(store.clone());
    let dashboard = DashboardService::new(store);

    // Console landing page: entity counters
    let summary = dashboard.summary().await?;
    tracing::info!(
        "{} users, {} roles",
        summary.total_users,
        summary.total_roles
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);

    for user in users.load().await? {
        tracing::debug!("user {} <{}> {} ({})", user.username, user.email, user.role, user.status);
    }
    for role in roles.load().await? {
        let permissions: Vec<String> = role.permissions.iter().map(|p| p.to_string()).collect();
        tracing::debug!("role {} [{}]", role.name, permissions.join(", "));
    }

    Ok(())
}
