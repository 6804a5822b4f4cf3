//! Reading legacy JSON exports from disk.

use std::path::Path;

use agora_core::domain::legacy::LegacySnapshot;

/// Snapshot loading errors.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read snapshot {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Snapshot {path} is not valid JSON: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Read and parse a snapshot file.
pub async fn load_snapshot(path: impl AsRef<Path>) -> Result<LegacySnapshot, SeedError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Read {
            path: path_str.clone(),
            source,
        })?;

    let snapshot: LegacySnapshot =
        serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
            path: path_str.clone(),
            source,
        })?;

    tracing::info!(
        path = %path_str,
        announcements = snapshot.announcements.len(),
        posts = snapshot.forum_posts.len(),
        comments = snapshot.forum_comments.len(),
        "Snapshot loaded"
    );

    Ok(snapshot)
}
