//! Audit action names and detail formatting.
//!
//! Lives in `core` so the action vocabulary is shared by every writer of the
//! audit trail.

use crate::types::DbId;

/// Known action names recorded in `audit_logs.action`.
pub mod actions {
    pub const CREATED_JOURNAL_ENTRY: &str = "Created Journal Entry";
    pub const UPDATED_USER_ROLE: &str = "Updated User Role";
}

/// Detail line for a posted journal entry.
pub fn journal_entry_details(entry_id: DbId, description: &str) -> String {
    format!("Entry #{entry_id}: {description}")
}

/// Detail line for a role change.
pub fn role_change_details(user_id: DbId, role: &str) -> String {
    format!("Changed user {user_id} to {role}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journal_details_format() {
        assert_eq!(
            journal_entry_details(12, "Office rent"),
            "Entry #12: Office rent"
        );
    }

    #[test]
    fn role_change_details_format() {
        assert_eq!(role_change_details(3, "Admin"), "Changed user 3 to Admin");
    }
}
