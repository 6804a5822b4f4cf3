use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::domain::{
    Announcement, AnnouncementPatch, CarouselSlide, CheckInConfig, CheckInPatch, CommentPatch,
    EntityId, ForumComment, ForumPost, LikeTarget, ModerationStatus, NewAnnouncement, NewComment,
    NewPost, NewSlide, PostPatch, PostView, ReviewNote, SlideMove, SlidePatch, UserId,
};
use crate::error::RepoError;

// Every mutation is atomic on its own. Nothing here groups several calls
// into one transaction.
//
// Creation never fails for domain reasons: ids come from the store. Methods
// returning `bool` report whether the target existed.

/// Announcement storage.
#[async_trait]
pub trait AnnouncementRepository: Send + Sync {
    async fn create_announcement(&self, new: NewAnnouncement) -> Result<Announcement, RepoError>;

    async fn update_announcement(
        &self,
        id: EntityId,
        patch: AnnouncementPatch,
    ) -> Result<bool, RepoError>;

    async fn delete_announcement(&self, id: EntityId) -> Result<bool, RepoError>;

    async fn find_announcement(&self, id: EntityId) -> Result<Option<Announcement>, RepoError>;

    /// Published announcements, pinned first, then newest first.
    async fn list_public_announcements(&self) -> Result<Vec<Announcement>, RepoError>;

    /// Every announcement in id order.
    async fn list_all_announcements(&self) -> Result<Vec<Announcement>, RepoError>;
}

/// Forum post storage and moderation.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Store a new post. It starts out pending review.
    async fn create_post(&self, new: NewPost) -> Result<ForumPost, RepoError>;

    async fn update_post(&self, id: EntityId, patch: PostPatch) -> Result<bool, RepoError>;

    async fn set_post_status(
        &self,
        id: EntityId,
        status: ModerationStatus,
        note: ReviewNote,
    ) -> Result<bool, RepoError>;

    /// Delete a post together with all of its comments.
    async fn delete_post(&self, id: EntityId) -> Result<bool, RepoError>;

    /// Look up a post regardless of its status.
    async fn find_post(&self, id: EntityId) -> Result<Option<PostView>, RepoError>;

    /// Published posts, newest first.
    async fn list_public_posts(&self) -> Result<Vec<PostView>, RepoError>;

    /// Every post, newest first.
    async fn list_all_posts_for_admin(&self) -> Result<Vec<PostView>, RepoError>;

    /// Published posts whose title or content contains `keyword`,
    /// ignoring case. A blank keyword matches everything.
    async fn search_posts(&self, keyword: &str) -> Result<Vec<PostView>, RepoError>;
}

/// Forum comment storage and moderation.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Store a new comment. It starts out pending review.
    async fn add_comment(&self, new: NewComment) -> Result<ForumComment, RepoError>;

    async fn update_comment(&self, id: EntityId, patch: CommentPatch) -> Result<bool, RepoError>;

    async fn set_comment_status(
        &self,
        id: EntityId,
        status: ModerationStatus,
        note: ReviewNote,
    ) -> Result<bool, RepoError>;

    async fn delete_comment(&self, id: EntityId) -> Result<bool, RepoError>;

    async fn find_comment(&self, id: EntityId) -> Result<Option<ForumComment>, RepoError>;

    /// Published comments of a post, oldest first.
    async fn list_public_comments(
        &self,
        post_id: EntityId,
    ) -> Result<Vec<ForumComment>, RepoError>;

    /// Every comment of a post, oldest first.
    async fn list_all_comments_for_admin(
        &self,
        post_id: EntityId,
    ) -> Result<Vec<ForumComment>, RepoError>;
}

/// Per-entity like membership.
///
/// A `None` user is an anonymous caller: nothing is recorded for them.
#[async_trait]
pub trait LikeRegistry: Send + Sync {
    async fn has_liked(
        &self,
        target: LikeTarget,
        id: EntityId,
        user: Option<UserId>,
    ) -> Result<bool, RepoError>;

    /// Flip the user's like. Returns `false` only when nothing was applied
    /// (anonymous caller or missing entity).
    async fn toggle_like(
        &self,
        target: LikeTarget,
        id: EntityId,
        user: Option<UserId>,
    ) -> Result<bool, RepoError>;

    /// Zero for a missing entity.
    async fn like_count(&self, target: LikeTarget, id: EntityId) -> Result<usize, RepoError>;
}

/// Homepage curation state: feed selection, hot tags, carousel and check-in.
#[async_trait]
pub trait CurationRepository: Send + Sync {
    async fn feed_selection(&self) -> Result<Vec<String>, RepoError>;

    async fn set_feed_selection(&self, ids: Vec<String>) -> Result<(), RepoError>;

    async fn hot_tags(&self) -> Result<Vec<String>, RepoError>;

    /// Replace the hot-tag list. Returns the normalized list that was stored.
    async fn set_hot_tags(&self, tags: Vec<String>) -> Result<Vec<String>, RepoError>;

    /// Every tag that has ever been curated or shown in the admin table.
    async fn surfaced_tags(&self) -> Result<BTreeSet<String>, RepoError>;

    async fn remember_tags(&self, tags: Vec<String>) -> Result<(), RepoError>;

    async fn check_in_config(&self) -> Result<CheckInConfig, RepoError>;

    /// Apply a partial update and return the resulting config.
    async fn update_check_in_config(
        &self,
        patch: CheckInPatch,
    ) -> Result<CheckInConfig, RepoError>;

    /// Slides in display order.
    async fn list_slides(&self) -> Result<Vec<CarouselSlide>, RepoError>;

    async fn create_slide(&self, new: NewSlide) -> Result<CarouselSlide, RepoError>;

    async fn update_slide(&self, id: EntityId, patch: SlidePatch) -> Result<bool, RepoError>;

    async fn delete_slide(&self, id: EntityId) -> Result<bool, RepoError>;

    /// Swap a slide with its neighbour. `false` when the slide is missing or
    /// already first (up) or last (down).
    async fn move_slide(&self, id: EntityId, direction: SlideMove) -> Result<bool, RepoError>;
}
