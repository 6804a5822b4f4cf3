use std::collections::BTreeSet;

use async_trait::async_trait;

use agora_core::domain::{
    CarouselSlide, CheckInConfig, CheckInPatch, EntityId, NewSlide, SlideMove, SlidePatch,
    normalize_hot_tags,
};
use agora_core::error::RepoError;
use agora_core::ports::CurationRepository;

use super::InMemoryCommunityStore;

#[async_trait]
impl CurationRepository for InMemoryCommunityStore {
    async fn feed_selection(&self) -> Result<Vec<String>, RepoError> {
        Ok(self.state.read().await.feed_selection.clone())
    }

    async fn set_feed_selection(&self, ids: Vec<String>) -> Result<(), RepoError> {
        tracing::debug!(selected = ids.len(), "Feed selection replaced");
        self.state.write().await.feed_selection = ids;
        Ok(())
    }

    async fn hot_tags(&self) -> Result<Vec<String>, RepoError> {
        Ok(self.state.read().await.hot_tags.clone())
    }

    async fn set_hot_tags(&self, tags: Vec<String>) -> Result<Vec<String>, RepoError> {
        let tags = normalize_hot_tags(tags);
        let mut state = self.state.write().await;
        state.surfaced_tags.extend(tags.iter().cloned());
        state.hot_tags = tags.clone();
        Ok(tags)
    }

    async fn surfaced_tags(&self) -> Result<BTreeSet<String>, RepoError> {
        Ok(self.state.read().await.surfaced_tags.clone())
    }

    async fn remember_tags(&self, tags: Vec<String>) -> Result<(), RepoError> {
        self.state.write().await.surfaced_tags.extend(tags);
        Ok(())
    }

    async fn check_in_config(&self) -> Result<CheckInConfig, RepoError> {
        Ok(self.state.read().await.check_in.clone())
    }

    async fn update_check_in_config(
        &self,
        patch: CheckInPatch,
    ) -> Result<CheckInConfig, RepoError> {
        let mut state = self.state.write().await;
        state.check_in.apply(patch);
        Ok(state.check_in.clone())
    }

    async fn list_slides(&self) -> Result<Vec<CarouselSlide>, RepoError> {
        Ok(self.state.read().await.slides.clone())
    }

    async fn create_slide(&self, new: NewSlide) -> Result<CarouselSlide, RepoError> {
        let mut state = self.state.write().await;
        let id = state.slide_ids.next_id();
        let slide = CarouselSlide::new(id, new);
        state.slides.push(slide.clone());
        Ok(slide)
    }

    async fn update_slide(&self, id: EntityId, patch: SlidePatch) -> Result<bool, RepoError> {
        let mut state = self.state.write().await;
        let Some(slide) = state.slides.iter_mut().find(|s| s.id == id) else {
            return Ok(false);
        };
        slide.apply(patch);
        Ok(true)
    }

    async fn delete_slide(&self, id: EntityId) -> Result<bool, RepoError> {
        let mut state = self.state.write().await;
        let Some(index) = state.slides.iter().position(|s| s.id == id) else {
            return Ok(false);
        };
        state.slides.remove(index);
        Ok(true)
    }

    async fn move_slide(&self, id: EntityId, direction: SlideMove) -> Result<bool, RepoError> {
        let mut state = self.state.write().await;
        let len = state.slides.len();
        let Some(index) = state.slides.iter().position(|s| s.id == id) else {
            return Ok(false);
        };
        let Some(to) = direction.target(index, len) else {
            return Ok(false);
        };
        state.slides.swap(index, to);
        tracing::debug!(slide_id = id, %direction, "Carousel slide moved");
        Ok(true)
    }
}
