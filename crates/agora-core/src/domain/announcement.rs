use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AnnouncementStatus, EntityId};

/// Announcement entity - a site, training or competition notice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_pinned: bool,
    pub status: AnnouncementStatus,
}

/// Fields accepted when creating an announcement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewAnnouncement {
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub status: AnnouncementStatus,
}

/// Partial update for an announcement. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AnnouncementPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub is_pinned: Option<bool>,
    pub status: Option<AnnouncementStatus>,
}

impl Announcement {
    /// Create an announcement with the given id, stamped at `now`.
    pub fn new(id: EntityId, new: NewAnnouncement, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new.title,
            content: new.content,
            author: new.author,
            created_at: now,
            updated_at: now,
            is_pinned: new.is_pinned,
            status: new.status,
        }
    }

    pub fn is_public(&self) -> bool {
        self.status == AnnouncementStatus::Published
    }

    pub fn apply(&mut self, patch: AnnouncementPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(is_pinned) = patch.is_pinned {
            self.is_pinned = is_pinned;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = now;
    }
}
