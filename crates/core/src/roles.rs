//! Well-known role name constants.
//!
//! These must match the `users.role` check constraint in the initial migration.

pub const ROLE_ADMIN: &str = "Admin";
pub const ROLE_FINANCE_MANAGER: &str = "Finance Manager";
pub const ROLE_EMPLOYEE: &str = "Employee";

/// Every role a user may be assigned.
pub const ALL_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_FINANCE_MANAGER, ROLE_EMPLOYEE];

pub fn is_known_role(role: &str) -> bool {
    ALL_ROLES.contains(&role)
}
