//! Feed and tag views derived from the content store.

use std::sync::Arc;

use crate::domain::{FeedCandidate, FeedGroup, TagCount, feed, tags};
use crate::error::RepoError;
use crate::ports::{AnnouncementRepository, CurationRepository, PostRepository};

/// Computes the activity feed and tag statistics on demand.
///
/// Holds no content of its own; every call reads the current store.
#[derive(Clone)]
pub struct FeedService {
    announcements: Arc<dyn AnnouncementRepository>,
    posts: Arc<dyn PostRepository>,
    curation: Arc<dyn CurationRepository>,
}

impl FeedService {
    pub fn new(
        announcements: Arc<dyn AnnouncementRepository>,
        posts: Arc<dyn PostRepository>,
        curation: Arc<dyn CurationRepository>,
    ) -> Self {
        Self {
            announcements,
            posts,
            curation,
        }
    }

    /// Published content split into the four labeled source buckets.
    pub async fn candidates_by_source(&self) -> Result<Vec<FeedGroup>, RepoError> {
        let announcements = self.announcements.list_public_announcements().await?;
        let posts = self.posts.list_public_posts().await?;
        Ok(feed::group_by_source(&announcements, &posts))
    }

    /// Every candidate, newest first.
    pub async fn candidates(&self) -> Result<Vec<FeedCandidate>, RepoError> {
        let groups = self.candidates_by_source().await?;
        Ok(feed::merge(&groups))
    }

    /// The given candidates that still resolve, newest first.
    pub async fn selected(&self, ids: &[String]) -> Result<Vec<FeedCandidate>, RepoError> {
        let merged = self.candidates().await?;
        Ok(feed::select(&merged, ids))
    }

    /// The curator's stored selection, resolved.
    pub async fn homepage(&self) -> Result<Vec<FeedCandidate>, RepoError> {
        let ids = self.curation.feed_selection().await?;
        self.selected(&ids).await
    }

    /// Tag statistics over published announcements and all posts.
    ///
    /// Unpublished posts are counted on purpose so moderators can spot
    /// trending topics before approval. Every tag returned is remembered and
    /// keeps appearing in later calls.
    pub async fn tag_counts(&self) -> Result<Vec<TagCount>, RepoError> {
        let announcements = self.announcements.list_public_announcements().await?;
        let posts = self.posts.list_all_posts_for_admin().await?;
        let hot_tags = self.curation.hot_tags().await?;
        let surfaced = self.curation.surfaced_tags().await?;

        let texts = announcements
            .iter()
            .flat_map(|a| [a.title.as_str(), a.content.as_str()])
            .chain(
                posts
                    .iter()
                    .flat_map(|v| [v.post.title.as_str(), v.post.content.as_str()]),
            );
        let rows = tags::count_tags(texts, &hot_tags, &surfaced);

        self.curation
            .remember_tags(rows.iter().map(|row| row.tag.clone()).collect())
            .await?;
        Ok(rows)
    }
}
