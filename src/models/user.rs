use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
}

impl Default for UserStatus {
    fn default() -> Self {
        UserStatus::Active
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Active => write!(f, "Active"),
            UserStatus::Inactive => write!(f, "Inactive"),
        }
    }
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            _ => Err(format!("Invalid user status: {}", s)),
        }
    }
}

/// An account as held by the data service. `id` is assigned by the store at
/// creation time and is stable for the record's lifetime. `role` is the role
/// name as a denormalized snapshot; no referential integrity to the role
/// store is maintained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
}

/// A user record bound to the edit form. Carries an `id` when editing an
/// existing account and none when creating a new one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserDraft {
    pub id: Option<String>,
    pub username: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
}

impl UserDraft {
    /// Blank draft for the "add user" action.
    pub fn blank() -> Self {
        Self {
            id: None,
            username: String::new(),
            email: String::new(),
            role: String::new(),
            status: UserStatus::Active,
        }
    }

    /// Draft pre-filled from an existing account for edit-in-place.
    pub fn edit(user: &User) -> Self {
        Self {
            id: Some(user.id.clone()),
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            status: user.status,
        }
    }
}
