use crate::models::user::{AdminAccess, User};
use crate::core::tracing_init::DIAGNOSTICS_TARGET;
use tracing::debug;

/// Id reserved for the built-in administrator account
pub const ADMIN_USER_ID: u64 = 1;

/// Decide whether `user` has admin access and derive its capability set.
///
/// The record is only borrowed; the capability set is returned to the caller
/// and never written back into it.
pub fn check_admin_access(user: &User) -> AdminAccess {
    if user.id == ADMIN_USER_ID {
        debug!(target: DIAGNOSTICS_TARGET, user_id = user.id, "Designated admin user");
    }

    if user.is_admin_role() {
        AdminAccess::granted()
    } else {
        AdminAccess::denied()
    }
}
