use async_trait::async_trait;

use agora_core::domain::{
    CommentPatch, EntityId, ForumComment, ModerationStatus, NewComment, ReviewNote,
};
use agora_core::error::RepoError;
use agora_core::ports::CommentRepository;

use super::InMemoryCommunityStore;

#[async_trait]
impl CommentRepository for InMemoryCommunityStore {
    async fn add_comment(&self, new: NewComment) -> Result<ForumComment, RepoError> {
        let mut state = self.state.write().await;
        let id = state.comment_ids.next_id();
        let comment = ForumComment::new(id, new, self.clock.now());
        state.comments.insert(id, comment.clone());

        tracing::debug!(
            comment_id = id,
            post_id = comment.post_id,
            "Comment submitted for review"
        );
        Ok(comment)
    }

    async fn update_comment(&self, id: EntityId, patch: CommentPatch) -> Result<bool, RepoError> {
        let mut state = self.state.write().await;
        let Some(comment) = state.comments.get_mut(&id) else {
            return Ok(false);
        };
        comment.apply(patch, self.clock.now());
        Ok(true)
    }

    async fn set_comment_status(
        &self,
        id: EntityId,
        status: ModerationStatus,
        note: ReviewNote,
    ) -> Result<bool, RepoError> {
        let mut state = self.state.write().await;
        let Some(comment) = state.comments.get_mut(&id) else {
            return Ok(false);
        };
        let now = self.clock.now();
        comment.moderation.review(status, note, now);
        comment.updated_at = now;

        tracing::info!(comment_id = id, status = %status, "Comment reviewed");
        Ok(true)
    }

    async fn delete_comment(&self, id: EntityId) -> Result<bool, RepoError> {
        Ok(self.state.write().await.comments.remove(&id).is_some())
    }

    async fn find_comment(&self, id: EntityId) -> Result<Option<ForumComment>, RepoError> {
        Ok(self.state.read().await.comments.get(&id).cloned())
    }

    async fn list_public_comments(
        &self,
        post_id: EntityId,
    ) -> Result<Vec<ForumComment>, RepoError> {
        Ok(self
            .state
            .read()
            .await
            .comments_of(post_id, ForumComment::is_public))
    }

    async fn list_all_comments_for_admin(
        &self,
        post_id: EntityId,
    ) -> Result<Vec<ForumComment>, RepoError> {
        Ok(self.state.read().await.comments_of(post_id, |_| true))
    }
}
