use crate::domain::errors::DomainResult;
use crate::domain::ports::data_service::DataService;
use crate::models::{Role, RoleDraft};
use crate::services::{Confirmation, DeleteOutcome, SaveError};
use crate::view::forms;
use std::sync::Arc;

/// Role-management counterpart of `UserAdminService`: fetch, validated save,
/// confirmed delete. Deleting a role leaves users referencing it by name
/// untouched.
#[derive(Clone)]
pub struct RoleAdminService {
    store: Arc<dyn DataService>,
}

impl RoleAdminService {
    pub fn new(store: Arc<dyn DataService>) -> Self {
        Self { store }
    }

    /// Fetch the current role snapshot.
    pub async fn load(&self) -> DomainResult<Vec<Role>> {
        self.store.list_roles().await
    }

    /// Save a draft: a nameless role never reaches the data service.
    pub async fn save(&self, draft: &RoleDraft) -> Result<Role, SaveError> {
        let errors = forms::validate_role(draft);
        if !errors.is_empty() {
            tracing::debug!("Role save rejected, {} invalid field(s)", errors.len());
            return Err(SaveError::Validation(errors));
        }

        let saved = match &draft.id {
            Some(id) => {
                let role = Role {
                    id: id.clone(),
                    name: draft.name.clone(),
                    permissions: draft.permissions.clone(),
                };
                self.store.update_role(&role).await?
            }
            None => self.store.create_role(draft).await?,
        };

        Ok(saved)
    }

    /// Delete after the interactive confirmation, as for users.
    pub async fn delete(
        &self,
        id: &str,
        confirmation: Confirmation,
    ) -> DomainResult<DeleteOutcome> {
        if confirmation == Confirmation::Declined {
            tracing::debug!("Delete of role {} declined", id);
            return Ok(DeleteOutcome::Declined);
        }

        let removed = self.store.delete_role(id).await?;
        Ok(if removed {
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::Missing
        })
    }
}
