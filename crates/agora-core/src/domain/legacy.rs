//! Loading boundary for content exported before moderation existed.
//!
//! Older exports may omit status, review and like fields. This module is the
//! only place where those gaps are filled: a missing status means the record
//! was already visible, so it loads as published.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{
    Announcement, AnnouncementStatus, CarouselSlide, CheckInConfig, EntityId, ForumComment,
    ForumPost, LikedBy, Moderation, ModerationStatus, UserId,
};

/// Whole-store export as produced by the previous frontend.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacySnapshot {
    pub announcements: Vec<LegacyAnnouncement>,
    pub forum_posts: Vec<LegacyPost>,
    pub forum_comments: Vec<LegacyComment>,
    pub carousel_slides: Vec<CarouselSlide>,
    pub check_in_config: Option<CheckInConfig>,
    /// Absent lists keep the store defaults; an empty list clears them.
    pub hot_tags: Option<Vec<String>>,
    #[serde(alias = "selectedFeedIds")]
    pub feed_selection: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyAnnouncement {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_pinned: bool,
    pub status: Option<AnnouncementStatus>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyPost {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    pub author_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub status: Option<ModerationStatus>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewed_by: Option<String>,
    pub reject_reason: Option<String>,
    pub liked_by_user_ids: Option<Vec<UserId>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyComment {
    pub id: EntityId,
    pub post_id: EntityId,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    pub author_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub status: Option<ModerationStatus>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewed_by: Option<String>,
    pub reject_reason: Option<String>,
    pub liked_by_user_ids: Option<Vec<UserId>>,
}

fn legacy_moderation(
    status: Option<ModerationStatus>,
    reviewed_at: Option<DateTime<Utc>>,
    reviewed_by: Option<String>,
    reject_reason: Option<String>,
) -> Moderation {
    Moderation {
        status: ModerationStatus::or_legacy_default(status),
        reviewed_at,
        reviewed_by,
        reject_reason,
    }
}

impl From<LegacyAnnouncement> for Announcement {
    fn from(legacy: LegacyAnnouncement) -> Self {
        Self {
            id: legacy.id,
            title: legacy.title,
            content: legacy.content,
            author: legacy.author,
            created_at: legacy.created_at,
            updated_at: legacy.updated_at.unwrap_or(legacy.created_at),
            is_pinned: legacy.is_pinned,
            status: legacy.status.unwrap_or_default(),
        }
    }
}

impl From<LegacyPost> for ForumPost {
    fn from(legacy: LegacyPost) -> Self {
        Self {
            id: legacy.id,
            title: legacy.title,
            content: legacy.content,
            author: legacy.author,
            author_id: legacy.author_id,
            created_at: legacy.created_at,
            updated_at: legacy.updated_at.unwrap_or(legacy.created_at),
            moderation: legacy_moderation(
                legacy.status,
                legacy.reviewed_at,
                legacy.reviewed_by,
                legacy.reject_reason,
            ),
            liked_by_user_ids: legacy
                .liked_by_user_ids
                .unwrap_or_default()
                .into_iter()
                .collect::<LikedBy>(),
        }
    }
}

impl From<LegacyComment> for ForumComment {
    fn from(legacy: LegacyComment) -> Self {
        Self {
            id: legacy.id,
            post_id: legacy.post_id,
            content: legacy.content,
            author: legacy.author,
            author_id: legacy.author_id,
            created_at: legacy.created_at,
            updated_at: legacy.updated_at.unwrap_or(legacy.created_at),
            moderation: legacy_moderation(
                legacy.status,
                legacy.reviewed_at,
                legacy.reviewed_by,
                legacy.reject_reason,
            ),
            liked_by_user_ids: legacy
                .liked_by_user_ids
                .unwrap_or_default()
                .into_iter()
                .collect::<LikedBy>(),
        }
    }
}
