use async_trait::async_trait;

use agora_core::domain::{EntityId, LikeTarget, LikedBy, UserId};
use agora_core::error::RepoError;
use agora_core::ports::LikeRegistry;

use super::InMemoryCommunityStore;
use super::state::StoreState;

fn likes_of(state: &StoreState, target: LikeTarget, id: EntityId) -> Option<&LikedBy> {
    match target {
        LikeTarget::Post => state.posts.get(&id).map(|p| &p.liked_by_user_ids),
        LikeTarget::Comment => state.comments.get(&id).map(|c| &c.liked_by_user_ids),
    }
}

fn likes_of_mut(state: &mut StoreState, target: LikeTarget, id: EntityId) -> Option<&mut LikedBy> {
    match target {
        LikeTarget::Post => state.posts.get_mut(&id).map(|p| &mut p.liked_by_user_ids),
        LikeTarget::Comment => state.comments.get_mut(&id).map(|c| &mut c.liked_by_user_ids),
    }
}

#[async_trait]
impl LikeRegistry for InMemoryCommunityStore {
    async fn has_liked(
        &self,
        target: LikeTarget,
        id: EntityId,
        user: Option<UserId>,
    ) -> Result<bool, RepoError> {
        let Some(user) = user else {
            return Ok(false);
        };
        let state = self.state.read().await;
        Ok(likes_of(&state, target, id).is_some_and(|likes| likes.contains(user)))
    }

    async fn toggle_like(
        &self,
        target: LikeTarget,
        id: EntityId,
        user: Option<UserId>,
    ) -> Result<bool, RepoError> {
        let Some(user) = user else {
            return Ok(false);
        };
        let mut state = self.state.write().await;
        let Some(likes) = likes_of_mut(&mut state, target, id) else {
            return Ok(false);
        };
        let liked = likes.toggle(user);

        tracing::debug!(
            entity = target.entity_type(),
            id,
            user,
            liked,
            "Like toggled"
        );
        Ok(true)
    }

    async fn like_count(&self, target: LikeTarget, id: EntityId) -> Result<usize, RepoError> {
        let state = self.state.read().await;
        Ok(likes_of(&state, target, id).map_or(0, LikedBy::len))
    }
}
