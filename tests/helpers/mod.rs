#![allow(dead_code)]

use accessdesk::domain::errors::DomainResult;
use accessdesk::domain::ports::data_service::DataService;
use accessdesk::models::{Role, RoleDraft, User, UserDraft, UserStatus};
use accessdesk::store::MemoryStore;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Store with no simulated latency, for fast tests.
pub fn fast_store() -> MemoryStore {
    MemoryStore::new(Duration::ZERO)
}

/// Demo dataset with no simulated latency.
pub fn seeded_store() -> MemoryStore {
    MemoryStore::seeded(Duration::ZERO)
}

pub fn user_draft(username: &str, email: &str, role: &str) -> UserDraft {
    UserDraft {
        id: None,
        username: username.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        status: UserStatus::Active,
    }
}

pub fn user(id: &str, username: &str, email: &str, role: &str, status: UserStatus) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        status,
    }
}

pub fn usernames(users: &[User]) -> Vec<&str> {
    users.iter().map(|u| u.username.as_str()).collect()
}

/// Data service that records every call instead of holding state.
/// Lets tests assert exactly which operations a flow issued.
pub struct RecordingStore {
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Retrieve the operations issued so far, in order.
    pub async fn calls(&self) -> Vec<String> {
        let calls = self.calls.lock().await;
        calls.clone()
    }

    async fn record(&self, operation: &str) {
        let mut calls = self.calls.lock().await;
        calls.push(operation.to_string());
    }
}

impl Default for RecordingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataService for RecordingStore {
    async fn list_users(&self) -> DomainResult<Vec<User>> {
        self.record("list_users").await;
        Ok(Vec::new())
    }

    async fn list_roles(&self) -> DomainResult<Vec<Role>> {
        self.record("list_roles").await;
        Ok(Vec::new())
    }

    async fn create_user(&self, draft: &UserDraft) -> DomainResult<User> {
        self.record("create_user").await;
        Ok(User {
            id: "user-1".to_string(),
            username: draft.username.clone(),
            email: draft.email.clone(),
            role: draft.role.clone(),
            status: draft.status,
        })
    }

    async fn update_user(&self, user: &User) -> DomainResult<User> {
        self.record("update_user").await;
        Ok(user.clone())
    }

    async fn delete_user(&self, _id: &str) -> DomainResult<bool> {
        self.record("delete_user").await;
        Ok(true)
    }

    async fn create_role(&self, draft: &RoleDraft) -> DomainResult<Role> {
        self.record("create_role").await;
        Ok(Role {
            id: "role-1".to_string(),
            name: draft.name.clone(),
            permissions: draft.permissions.clone(),
        })
    }

    async fn update_role(&self, role: &Role) -> DomainResult<Role> {
        self.record("update_role").await;
        Ok(role.clone())
    }

    async fn delete_role(&self, _id: &str) -> DomainResult<bool> {
        self.record("delete_role").await;
        Ok(true)
    }
}
