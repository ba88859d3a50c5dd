use crate::core::error::DirectoryError;
use crate::models::user::{Role, User};
use std::collections::HashMap;

/// Fixed, read-only set of user records keyed by id
#[derive(Debug)]
pub struct UserDirectory {
    users: HashMap<u64, User>,
}

impl UserDirectory {
    /// Build a directory from a collection of users.
    /// Fails if two records share an id.
    pub fn new(users: impl IntoIterator<Item = User>) -> Result<Self, DirectoryError> {
        let mut map = HashMap::new();
        for user in users {
            let id = user.id;
            if map.insert(id, user).is_some() {
                return Err(DirectoryError::DuplicateId(id));
            }
        }
        Ok(Self { users: map })
    }

    /// The records the service ships with
    pub fn seeded() -> Result<Self, DirectoryError> {
        Self::new([
            User::new(1, "John", Role::Admin),
            User::new(2, "Jane", Role::User),
        ])
    }

    /// Look up a user by exact id.
    /// Absence is an expected result, not an error.
    pub fn find_by_id(&self, id: u64) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
