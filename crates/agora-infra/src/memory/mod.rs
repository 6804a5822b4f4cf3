//! In-memory content store.
//!
//! All collections sit behind one `tokio::sync::RwLock`. Each port method
//! takes the lock exactly once, which makes every single operation atomic.
//! Sequences of calls are not isolated from each other.
//! Note: Data is lost on process restart.

mod announcements;
mod comments;
mod curation;
mod likes;
mod posts;
mod state;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use agora_core::domain::legacy::LegacySnapshot;
use agora_core::ports::{Clock, SystemClock};
use tokio::sync::RwLock;

use state::StoreState;

/// Owned, injectable store for announcements, posts, comments and curation.
///
/// Build as many as needed; instances share nothing.
pub struct InMemoryCommunityStore {
    state: RwLock<StoreState>,
    clock: Arc<dyn Clock>,
}

impl InMemoryCommunityStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
            clock,
        }
    }

    /// Start from a legacy export. Records without a status load as published.
    pub fn from_snapshot(snapshot: LegacySnapshot, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: RwLock::new(StoreState::from_snapshot(snapshot)),
            clock,
        }
    }

    /// Drop all content and curation state.
    pub async fn reset(&self) {
        *self.state.write().await = StoreState::default();
        tracing::info!("Store reset");
    }
}

impl Default for InMemoryCommunityStore {
    fn default() -> Self {
        Self::new()
    }
}
