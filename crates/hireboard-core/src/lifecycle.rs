//! Soft-delete lifecycle of jobs and companies.
//!
//! Records are stored with two flags, `is_created` and `is_deleted`. Only two
//! states are reachable: `Created` on insert and `Deleted` after a delete.
//! There is no way back.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::serde::deserialize_optional_bool;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    Created,
    Deleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("record is already deleted")]
pub struct AlreadyDeleted;

impl LifecycleState {
    /// Decodes the stored flags. `is_deleted` decides; `is_created` is
    /// written for compatibility but never read.
    pub fn from_flags(_is_created: bool, is_deleted: bool) -> Self {
        if is_deleted {
            LifecycleState::Deleted
        } else {
            LifecycleState::Created
        }
    }

    /// `(is_created, is_deleted)`
    pub fn flags(self) -> (bool, bool) {
        match self {
            LifecycleState::Created => (true, false),
            LifecycleState::Deleted => (false, true),
        }
    }

    pub fn is_visible(self) -> bool {
        self == LifecycleState::Created
    }

    pub fn soft_delete(self) -> Result<LifecycleState, AlreadyDeleted> {
        match self {
            LifecycleState::Created => Ok(LifecycleState::Deleted),
            LifecycleState::Deleted => Err(AlreadyDeleted),
        }
    }

    /// Whether a record in this state shows up for a caller. Deleted records
    /// are only shown when an audit view was requested and allowed.
    pub fn visible_to(self, include_deleted: bool) -> bool {
        include_deleted || self.is_visible()
    }
}

/// `?include_deleted=true` on single-record lookups.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
pub struct AuditParams {
    /// Include deleted records (moderators only, ignored otherwise)
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub include_deleted: Option<bool>,
}

impl AuditParams {
    /// Whether the lookup may return a deleted record for this caller.
    pub fn include_deleted(&self, moderator: bool) -> bool {
        moderator && self.include_deleted.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deleted_flag_decides() {
        assert_eq!(LifecycleState::from_flags(true, false), LifecycleState::Created);
        assert_eq!(LifecycleState::from_flags(false, true), LifecycleState::Deleted);
        assert_eq!(LifecycleState::from_flags(true, true), LifecycleState::Deleted);
        assert_eq!(LifecycleState::from_flags(false, false), LifecycleState::Created);
    }

    #[test]
    fn test_soft_delete_is_one_way() {
        let deleted = LifecycleState::Created.soft_delete().unwrap();
        assert_eq!(deleted, LifecycleState::Deleted);
        assert_eq!(deleted.flags(), (false, true));
        assert_eq!(deleted.soft_delete(), Err(AlreadyDeleted));
    }

    #[test]
    fn test_visibility() {
        assert!(LifecycleState::Created.visible_to(false));
        assert!(!LifecycleState::Deleted.visible_to(false));
        assert!(LifecycleState::Deleted.visible_to(true));
    }

    #[test]
    fn test_audit_needs_moderator() {
        let params = AuditParams {
            include_deleted: Some(true),
        };
        assert!(params.include_deleted(true));
        assert!(!params.include_deleted(false));
        assert!(!AuditParams::default().include_deleted(true));
    }
}
