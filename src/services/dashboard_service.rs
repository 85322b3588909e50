use crate::domain::errors::DomainResult;
use crate::domain::ports::data_service::DataService;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_users: usize,
    pub total_roles: usize,
}

/// Entity counters shown on the console landing page.
#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn DataService>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn DataService>) -> Self {
        Self { store }
    }

    pub async fn summary(&self) -> DomainResult<DashboardSummary> {
        let users = self.store.list_users().await?;
        let roles = self.store.list_roles().await?;

        Ok(DashboardSummary {
            total_users: users.len(),
            total_roles: roles.len(),
        })
    }
}
