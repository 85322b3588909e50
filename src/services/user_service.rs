use crate::domain::errors::DomainResult;
use crate::domain::ports::data_service::DataService;
use crate::models::{User, UserDraft};
use crate::services::{Confirmation, DeleteOutcome, SaveError};
use crate::view::forms;
use std::sync::Arc;

/// Orchestrates the user-management flows between the edit form and the data
/// service: fetch, validated save, confirmed delete.
#[derive(Clone)]
pub struct UserAdminService {
    store: Arc<dyn DataService>,
}

impl UserAdminService {
    pub fn new(store: Arc<dyn DataService>) -> Self {
        Self { store }
    }

    /// Fetch the current user snapshot.
    pub async fn load(&self) -> DomainResult<Vec<User>> {
        self.store.list_users().await
    }

    /// Save a draft: validate first, and only reach the data service when the
    /// draft is clean. A draft carrying an id updates the existing record,
    /// an id-less draft creates a new one.
    pub async fn save(&self, draft: &UserDraft) -> Result<User, SaveError> {
        let errors = forms::validate_user(draft);
        if !errors.is_empty() {
            tracing::debug!("User save rejected, {} invalid field(s)", errors.len());
            return Err(SaveError::Validation(errors));
        }

        let saved = match &draft.id {
            Some(id) => {
                let user = User {
                    id: id.clone(),
                    username: draft.username.clone(),
                    email: draft.email.clone(),
                    role: draft.role.clone(),
                    status: draft.status,
                };
                self.store.update_user(&user).await?
            }
            None => self.store.create_user(draft).await?,
        };

        Ok(saved)
    }

    /// Delete after the interactive confirmation. A declined prompt aborts
    /// with no error and no data-service call.
    pub async fn delete(
        &self,
        id: &str,
        confirmation: Confirmation,
    ) -> DomainResult<DeleteOutcome> {
        if confirmation == Confirmation::Declined {
            tracing::debug!("Delete of user {} declined", id);
            return Ok(DeleteOutcome::Declined);
        }

        let removed = self.store.delete_user(id).await?;
        Ok(if removed {
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::Missing
        })
    }
}
