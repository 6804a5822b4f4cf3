//! Application state - shared across all handlers.

use std::sync::Arc;

use agora_core::ports::{
    AnnouncementRepository, Clock, CommentRepository, CurationRepository, LikeRegistry,
    PostRepository, SystemClock,
};
use agora_core::services::FeedService;
use agora_infra::{InMemoryCommunityStore, load_snapshot};

use crate::config::AppConfig;

/// Shared application state.
///
/// Every port points at the same store, so all handlers see one consistent
/// set of collections.
#[derive(Clone)]
pub struct AppState {
    pub announcements: Arc<dyn AnnouncementRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub likes: Arc<dyn LikeRegistry>,
    pub curation: Arc<dyn CurationRepository>,
    pub feed: FeedService,
}

impl AppState {
    /// Build the store, seeding it from `AGORA_SEED_PATH` when configured.
    pub async fn new(config: &AppConfig) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let store = match &config.seed_path {
            Some(path) => match load_snapshot(path).await {
                Ok(snapshot) => InMemoryCommunityStore::from_snapshot(snapshot, clock),
                Err(e) => {
                    tracing::error!("{}. Starting with an empty store.", e);
                    InMemoryCommunityStore::with_clock(clock)
                }
            },
            None => {
                tracing::info!("AGORA_SEED_PATH not set. Starting with an empty store.");
                InMemoryCommunityStore::with_clock(clock)
            }
        };

        tracing::info!("Application state initialized");
        Self::from_store(Arc::new(store))
    }

    pub fn from_store(store: Arc<InMemoryCommunityStore>) -> Self {
        Self {
            announcements: store.clone(),
            posts: store.clone(),
            comments: store.clone(),
            likes: store.clone(),
            curation: store.clone(),
            feed: FeedService::new(store.clone(), store.clone(), store),
        }
    }
}
