//! Activity feed record.
//!
//! Activities are read-only for the core: they are filtered for display and
//! never produced or consumed by board logic.

use serde::{Deserialize, Serialize};

/// One entry in the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Stable feed entry id.
    pub id: String,
    /// Display name of the acting member.
    pub user: String,
    /// Free-text description, e.g. `completed task "Design Review"`.
    pub action: String,
    /// Display string such as `5 minutes ago`; not parsed.
    pub timestamp: String,
    /// Avatar image reference.
    pub avatar: String,
}

impl Activity {
    pub fn new(
        id: impl Into<String>,
        user: impl Into<String>,
        action: impl Into<String>,
        timestamp: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            user: user.into(),
            action: action.into(),
            timestamp: timestamp.into(),
            avatar: avatar.into(),
        }
    }
}
