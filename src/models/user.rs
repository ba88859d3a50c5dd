use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => f.write_str("admin"),
            Role::User => f.write_str("user"),
        }
    }
}

/// A stored directory record.
///
/// Permissions are never part of the stored record; they are derived on
/// demand by [`crate::security::access::check_admin_access`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct User {
    /// Unique within the directory
    pub id: u64,
    pub name: String,
    pub role: Role,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            role,
        }
    }

    pub fn is_admin_role(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    Read,
    Write,
    Delete,
}

/// Result of an admin access check
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminAccess {
    pub is_admin: bool,
    /// Empty unless `is_admin` is true
    pub permissions: BTreeSet<Capability>,
}

impl AdminAccess {
    pub fn denied() -> Self {
        Self {
            is_admin: false,
            permissions: BTreeSet::new(),
        }
    }

    pub fn granted() -> Self {
        Self {
            is_admin: true,
            permissions: [Capability::Read, Capability::Write, Capability::Delete]
                .into_iter()
                .collect(),
        }
    }
}
