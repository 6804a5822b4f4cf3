use async_trait::async_trait;

use agora_core::domain::{Announcement, AnnouncementPatch, EntityId, NewAnnouncement};
use agora_core::error::RepoError;
use agora_core::ports::AnnouncementRepository;

use super::InMemoryCommunityStore;

#[async_trait]
impl AnnouncementRepository for InMemoryCommunityStore {
    async fn create_announcement(&self, new: NewAnnouncement) -> Result<Announcement, RepoError> {
        let mut state = self.state.write().await;
        let id = state.announcement_ids.next_id();
        let announcement = Announcement::new(id, new, self.clock.now());
        state.announcements.insert(id, announcement.clone());

        tracing::debug!(announcement_id = id, "Announcement created");
        Ok(announcement)
    }

    async fn update_announcement(
        &self,
        id: EntityId,
        patch: AnnouncementPatch,
    ) -> Result<bool, RepoError> {
        let mut state = self.state.write().await;
        let Some(announcement) = state.announcements.get_mut(&id) else {
            return Ok(false);
        };
        announcement.apply(patch, self.clock.now());
        Ok(true)
    }

    async fn delete_announcement(&self, id: EntityId) -> Result<bool, RepoError> {
        let removed = self.state.write().await.announcements.remove(&id).is_some();
        if removed {
            tracing::debug!(announcement_id = id, "Announcement deleted");
        }
        Ok(removed)
    }

    async fn find_announcement(&self, id: EntityId) -> Result<Option<Announcement>, RepoError> {
        Ok(self.state.read().await.announcements.get(&id).cloned())
    }

    async fn list_public_announcements(&self) -> Result<Vec<Announcement>, RepoError> {
        let state = self.state.read().await;
        let mut announcements: Vec<Announcement> = state
            .announcements
            .values()
            .filter(|a| a.is_public())
            .cloned()
            .collect();
        announcements.sort_by(|a, b| {
            b.is_pinned
                .cmp(&a.is_pinned)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(announcements)
    }

    async fn list_all_announcements(&self) -> Result<Vec<Announcement>, RepoError> {
        Ok(self
            .state
            .read()
            .await
            .announcements
            .values()
            .cloned()
            .collect())
    }
}
