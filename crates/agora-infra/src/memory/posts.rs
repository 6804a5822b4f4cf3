use async_trait::async_trait;

use agora_core::domain::{
    EntityId, ForumPost, ModerationStatus, NewPost, PostPatch, PostView, ReviewNote,
};
use agora_core::error::RepoError;
use agora_core::ports::PostRepository;

use super::InMemoryCommunityStore;

#[async_trait]
impl PostRepository for InMemoryCommunityStore {
    async fn create_post(&self, new: NewPost) -> Result<ForumPost, RepoError> {
        let mut state = self.state.write().await;
        let id = state.post_ids.next_id();
        let post = ForumPost::new(id, new, self.clock.now());
        state.posts.insert(id, post.clone());

        tracing::debug!(post_id = id, "Post submitted for review");
        Ok(post)
    }

    async fn update_post(&self, id: EntityId, patch: PostPatch) -> Result<bool, RepoError> {
        let mut state = self.state.write().await;
        let Some(post) = state.posts.get_mut(&id) else {
            return Ok(false);
        };
        post.apply(patch, self.clock.now());
        Ok(true)
    }

    async fn set_post_status(
        &self,
        id: EntityId,
        status: ModerationStatus,
        note: ReviewNote,
    ) -> Result<bool, RepoError> {
        let mut state = self.state.write().await;
        let Some(post) = state.posts.get_mut(&id) else {
            return Ok(false);
        };
        let now = self.clock.now();
        post.moderation.review(status, note, now);
        post.updated_at = now;

        tracing::info!(post_id = id, status = %status, "Post reviewed");
        Ok(true)
    }

    async fn delete_post(&self, id: EntityId) -> Result<bool, RepoError> {
        let mut state = self.state.write().await;
        if state.posts.remove(&id).is_none() {
            return Ok(false);
        }
        let before = state.comments.len();
        state.comments.retain(|_, comment| comment.post_id != id);

        tracing::info!(
            post_id = id,
            comments_removed = before - state.comments.len(),
            "Post deleted"
        );
        Ok(true)
    }

    async fn find_post(&self, id: EntityId) -> Result<Option<PostView>, RepoError> {
        let state = self.state.read().await;
        Ok(state.posts.get(&id).map(|post| state.post_view(post)))
    }

    async fn list_public_posts(&self) -> Result<Vec<PostView>, RepoError> {
        Ok(self.state.read().await.post_views(ForumPost::is_public))
    }

    async fn list_all_posts_for_admin(&self) -> Result<Vec<PostView>, RepoError> {
        Ok(self.state.read().await.post_views(|_| true))
    }

    async fn search_posts(&self, keyword: &str) -> Result<Vec<PostView>, RepoError> {
        let needle = keyword.trim().to_lowercase();
        let state = self.state.read().await;
        if needle.is_empty() {
            return Ok(state.post_views(ForumPost::is_public));
        }
        Ok(state.post_views(|post| post.is_public() && post.matches_keyword(&needle)))
    }
}
