use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, LikedBy, Moderation, UserId};

/// Comment on a forum post. Removed together with its post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumComment {
    pub id: EntityId,
    pub post_id: EntityId,
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

/// Fields accepted when adding a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewComment {
    pub post_id: EntityId,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub author_id: Option<UserId>,
}

/// Partial update for a comment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CommentPatch {
    pub content: Option<String>,
    pub author: Option<String>,
}

impl ForumComment {
    pub fn new(id: EntityId, new: NewComment, now: DateTime<Utc>) -> Self {
        Self {
            id,
            post_id: new.post_id,
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

    pub fn apply(&mut self, patch: CommentPatch, now: DateTime<Utc>) {
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        self.updated_at = now;
    }
}
