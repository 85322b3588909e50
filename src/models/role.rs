use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    Read,
    Write,
    Delete,
    ManageUsers,
    ManageRoles,
}

impl Permission {
    /// The full permission vocabulary, in the order the role editor offers it.
    pub const ALL: [Permission; 5] = [
        Permission::Read,
        Permission::Write,
        Permission::Delete,
        Permission::ManageUsers,
        Permission::ManageRoles,
    ];
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Permission::Read => write!(f, "read"),
            Permission::Write => write!(f, "write"),
            Permission::Delete => write!(f, "delete"),
            Permission::ManageUsers => write!(f, "manage_users"),
            Permission::ManageRoles => write!(f, "manage_roles"),
        }
    }
}

impl std::str::FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "read" => Ok(Permission::Read),
            "write" => Ok(Permission::Write),
            "delete" => Ok(Permission::Delete),
            "manage_users" => Ok(Permission::ManageUsers),
            "manage_roles" => Ok(Permission::ManageRoles),
            _ => Err(format!("Invalid permission: {}", s)),
        }
    }
}

/// A named bundle of permissions. Permission membership is set-like:
/// granting twice is the same as granting once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    pub permissions: BTreeSet<Permission>,
}

/// A role record bound to the edit form, `id`-less when new.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleDraft {
    pub id: Option<String>,
    pub name: String,
    pub permissions: BTreeSet<Permission>,
}

impl RoleDraft {
    /// Blank draft for the "add role" action.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Draft pre-filled from an existing role for edit-in-place.
    pub fn edit(role: &Role) -> Self {
        Self {
            id: Some(role.id.clone()),
            name: role.name.clone(),
            permissions: role.permissions.clone(),
        }
    }

    /// Checkbox semantics of the role editor: grant the permission if absent,
    /// revoke it if present.
    pub fn toggle_permission(&mut self, permission: Permission) {
        if !self.permissions.remove(&permission) {
            self.permissions.insert(permission);
        }
    }
}
