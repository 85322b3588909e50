use crate::models::{User, UserStatus};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Username,
    Email,
    Role,
    Status,
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortField::Username => write!(f, "username"),
            SortField::Email => write!(f, "email"),
            SortField::Role => write!(f, "role"),
            SortField::Status => write!(f, "status"),
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "username" => Ok(SortField::Username),
            "email" => Ok(SortField::Email),
            "role" => Ok(SortField::Role),
            "status" => Ok(SortField::Status),
            _ => Err(format!("Invalid sort field: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            field: SortField::Username,
            direction: SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(UserStatus),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RoleFilter {
    #[default]
    All,
    Only(String),
}

/// Derivation state of the user table: search box, filter dropdowns, and the
/// active sort column. Pure over the most recently fetched snapshot; never
/// touches the store.
#[derive(Debug, Clone, Default)]
pub struct UserListView {
    pub search_term: String,
    pub status_filter: StatusFilter,
    pub role_filter: RoleFilter,
    pub sort: SortConfig,
}

impl UserListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column-header click semantics: the active column flips direction, any
    /// other column becomes active with direction reset to ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort.field == field {
            self.sort.direction = self.sort.direction.flipped();
        } else {
            self.sort = SortConfig {
                field,
                direction: SortDirection::Asc,
            };
        }
    }

    /// The displayed rows: search and filters applied, then a stable sort by
    /// the active column. An empty search term matches everything.
    pub fn visible(&self, users: &[User]) -> Vec<User> {
        let needle = self.search_term.to_lowercase();

        let mut rows: Vec<User> = users
            .iter()
            .filter(|user| self.matches(user, &needle))
            .cloned()
            .collect();

        let field = self.sort.field;
        let direction = self.sort.direction;
        rows.sort_by(|a, b| {
            let ordering = compare_by_field(a, b, field);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        rows
    }

    fn matches(&self, user: &User, needle: &str) -> bool {
        let matches_search = needle.is_empty()
            || user.username.to_lowercase().contains(needle)
            || user.email.to_lowercase().contains(needle);

        let matches_status = match &self.status_filter {
            StatusFilter::All => true,
            StatusFilter::Only(status) => user.status == *status,
        };

        let matches_role = match &self.role_filter {
            RoleFilter::All => true,
            RoleFilter::Only(role) => user.role == *role,
        };

        matches_search && matches_status && matches_role
    }
}

/// Case-insensitive comparison on the selected column. Equal keys report
/// `Equal` so the stable sort preserves their prior relative order.
fn compare_by_field(a: &User, b: &User, field: SortField) -> Ordering {
    match field {
        SortField::Username => caseless_cmp(&a.username, &b.username),
        SortField::Email => caseless_cmp(&a.email, &b.email),
        SortField::Role => caseless_cmp(&a.role, &b.role),
        SortField::Status => caseless_cmp(&a.status.to_string(), &b.status.to_string()),
    }
}

fn caseless_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
