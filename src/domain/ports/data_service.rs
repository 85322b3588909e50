use crate::domain::errors::DomainResult;
use crate::models::{Role, RoleDraft, User, UserDraft};
use async_trait::async_trait;

/// Asynchronous CRUD contract over the user and role collections.
///
/// The in-memory store behind this trait stands in for a real backend; an
/// HTTP client or embedded database can be substituted without touching the
/// callers. Every operation must settle: update/delete against a missing id
/// resolves with `NotFound` or `false`, never stays pending.
#[async_trait]
pub trait DataService: Send + Sync {
    /// Snapshot of all users.
    async fn list_users(&self) -> DomainResult<Vec<User>>;

    /// Snapshot of all roles.
    async fn list_roles(&self) -> DomainResult<Vec<Role>>;

    /// Append a new user. Any id on the draft is ignored; the store assigns
    /// its own, distinct from every id it has handed out before.
    async fn create_user(&self, draft: &UserDraft) -> DomainResult<User>;

    /// Replace the stored user with the same id, keeping its position.
    async fn update_user(&self, user: &User) -> DomainResult<User>;

    /// Remove the user with the given id. `true` if a record was removed,
    /// `false` if no such id exists.
    async fn delete_user(&self, id: &str) -> DomainResult<bool>;

    /// Append a new role, assigning a fresh id.
    async fn create_role(&self, draft: &RoleDraft) -> DomainResult<Role>;

    /// Replace the stored role with the same id, keeping its position.
    async fn update_role(&self, role: &Role) -> DomainResult<Role>;

    /// Remove the role with the given id. Users referencing the role by name
    /// are left untouched.
    async fn delete_role(&self, id: &str) -> DomainResult<bool>;
}
