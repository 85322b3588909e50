use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::data_service::DataService;
use crate::models::{Permission, Role, RoleDraft, User, UserDraft, UserStatus};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-wide user and role collections behind the `DataService` contract.
///
/// Mutations write the shared vectors in place, last writer wins; there is no
/// versioning or conflict detection. Each operation sleeps for the configured
/// latency before touching state, standing in for a network round trip.
#[derive(Clone)]
pub struct MemoryStore {
    users: Arc<RwLock<Vec<User>>>,
    roles: Arc<RwLock<Vec<Role>>>,
    latency: Duration,
}

impl MemoryStore {
    /// Empty store with the given simulated latency.
    pub fn new(latency: Duration) -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
            roles: Arc::new(RwLock::new(Vec::new())),
            latency,
        }
    }

    /// Store pre-loaded with the demo dataset.
    pub fn seeded(latency: Duration) -> Self {
        Self {
            users: Arc::new(RwLock::new(seed_users())),
            roles: Arc::new(RwLock::new(seed_roles())),
            latency,
        }
    }

    fn next_id() -> String {
        Uuid::new_v4().to_string()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl DataService for MemoryStore {
    async fn list_users(&self) -> DomainResult<Vec<User>> {
        self.simulate_latency().await;
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn list_roles(&self) -> DomainResult<Vec<Role>> {
        self.simulate_latency().await;
        let roles = self.roles.read().await;
        Ok(roles.clone())
    }

    async fn create_user(&self, draft: &UserDraft) -> DomainResult<User> {
        self.simulate_latency().await;
        let user = User {
            id: Self::next_id(),
            username: draft.username.clone(),
            email: draft.email.clone(),
            role: draft.role.clone(),
            status: draft.status,
        };

        let mut users = self.users.write().await;
        users.push(user.clone());
        tracing::debug!("Created user {} ({})", user.username, user.id);

        Ok(user)
    }

    async fn update_user(&self, user: &User) -> DomainResult<User> {
        self.simulate_latency().await;
        let mut users = self.users.write().await;

        let index = users
            .iter()
            .position(|u| u.id == user.id)
            .ok_or_else(|| DomainError::NotFound(format!("User with id {} not found", user.id)))?;

        users[index] = user.clone();
        tracing::debug!("Updated user {} ({})", user.username, user.id);

        Ok(user.clone())
    }

    async fn delete_user(&self, id: &str) -> DomainResult<bool> {
        self.simulate_latency().await;
        let mut users = self.users.write().await;

        match users.iter().position(|u| u.id == id) {
            Some(index) => {
                let removed = users.remove(index);
                tracing::debug!("Deleted user {} ({})", removed.username, removed.id);
                Ok(true)
            }
            None => {
                tracing::debug!("Delete ignored, no user with id {}", id);
                Ok(false)
            }
        }
    }

    async fn create_role(&self, draft: &RoleDraft) -> DomainResult<Role> {
        self.simulate_latency().await;
        let role = Role {
            id: Self::next_id(),
            name: draft.name.clone(),
            permissions: draft.permissions.clone(),
        };

        let mut roles = self.roles.write().await;
        roles.push(role.clone());
        tracing::debug!("Created role {} ({})", role.name, role.id);

        Ok(role)
    }

    async fn update_role(&self, role: &Role) -> DomainResult<Role> {
        self.simulate_latency().await;
        let mut roles = self.roles.write().await;

        let index = roles
            .iter()
            .position(|r| r.id == role.id)
            .ok_or_else(|| DomainError::NotFound(format!("Role with id {} not found", role.id)))?;

        roles[index] = role.clone();
        tracing::debug!("Updated role {} ({})", role.name, role.id);

        Ok(role.clone())
    }

    async fn delete_role(&self, id: &str) -> DomainResult<bool> {
        self.simulate_latency().await;
        let mut roles = self.roles.write().await;

        match roles.iter().position(|r| r.id == id) {
            Some(index) => {
                let removed = roles.remove(index);
                tracing::debug!("Deleted role {} ({})", removed.name, removed.id);
                Ok(true)
            }
            None => {
                tracing::debug!("Delete ignored, no role with id {}", id);
                Ok(false)
            }
        }
    }
}

fn seed_users() -> Vec<User> {
    vec![
        User {
            id: MemoryStore::next_id(),
            username: "admin".to_string(),
            email: "admin@company.com".to_string(),
            role: "Super Admin".to_string(),
            status: UserStatus::Active,
        },
        User {
            id: MemoryStore::next_id(),
            username: "john_doe".to_string(),
            email: "john@company.com".to_string(),
            role: "Editor".to_string(),
            status: UserStatus::Active,
        },
    ]
}

fn seed_roles() -> Vec<Role> {
    vec![
        Role {
            id: MemoryStore::next_id(),
            name: "Super Admin".to_string(),
            permissions: Permission::ALL.into_iter().collect(),
        },
        Role {
            id: MemoryStore::next_id(),
            name: "Editor".to_string(),
            permissions: [Permission::Read, Permission::Write].into_iter().collect(),
        },
        Role {
            id: MemoryStore::next_id(),
            name: "Viewer".to_string(),
            permissions: [Permission::Read].into_iter().collect(),
        },
    ]
}
