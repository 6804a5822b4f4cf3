use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, LikedBy, Moderation, UserId};

/// Forum post entity.
///
/// The reply count is never stored; see [`PostView`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumPost {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub moderation: Moderation,
    pub liked_by_user_ids: LikedBy,
}

/// Fields accepted when creating a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub author_id: Option<UserId>,
}

/// Partial update for a post. Status changes go through moderation instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// A post together with its derived attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    #[serde(flatten)]
    pub post: ForumPost,
    /// Number of published comments on the post.
    pub reply_count: usize,
}

impl ForumPost {
    /// Create a post awaiting review.
    pub fn new(id: EntityId, new: NewPost, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new.title,
            content: new.content,
            author: new.author,
            author_id: new.author_id,
            created_at: now,
            updated_at: now,
            moderation: Moderation::pending(),
            liked_by_user_ids: LikedBy::new(),
        }
    }

    pub fn is_public(&self) -> bool {
        self.moderation.status.is_public()
    }

    pub fn apply(&mut self, patch: PostPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        self.updated_at = now;
    }

    /// Case-insensitive substring match on title or content.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_keyword(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }
}
