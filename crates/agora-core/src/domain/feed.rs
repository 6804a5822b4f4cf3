//! Feed aggregation - announcements and forum posts as one ranked list.
//!
//! Candidates are grouped into four fixed buckets, each ordered newest first.
//! The merged feed flattens the buckets and re-sorts globally; ties keep the
//! order they had before sorting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Announcement, EntityId, LikedBy, PostView};

/// Title keywords marking a training announcement. Checked first.
const TRAINING_KEYWORDS: &[&str] = &["训练", "题目"];

/// Title keywords marking a competition announcement. Case-sensitive.
const COMPETITION_KEYWORDS: &[&str] = &["比赛", "赛事", "CTF"];

/// Where a feed candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedSource {
    Announcement,
    Forum,
}

impl FeedSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Announcement => "announcement",
            Self::Forum => "forum",
        }
    }
}

/// Labeled bucket of the by-source feed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeedBucket {
    SiteWide,
    Training,
    Competition,
    Forum,
}

impl FeedBucket {
    /// Display order of the buckets.
    pub const ORDER: [FeedBucket; 4] = [
        FeedBucket::SiteWide,
        FeedBucket::Training,
        FeedBucket::Competition,
        FeedBucket::Forum,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::SiteWide => "site-wide announcements",
            Self::Training => "training announcements",
            Self::Competition => "competition announcements",
            Self::Forum => "forum posts",
        }
    }

    /// Pick the announcement bucket for a title.
    pub fn classify_announcement(title: &str) -> Self {
        let mentions = |keywords: &[&str]| keywords.iter().any(|kw| title.contains(kw));

        if mentions(TRAINING_KEYWORDS) {
            Self::Training
        } else if mentions(COMPETITION_KEYWORDS) {
            Self::Competition
        } else {
            Self::SiteWide
        }
    }
}

/// Normalized, source-tagged entry of the activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedCandidate {
    /// `<source>-<entity id>`, e.g. `forum-12`.
    pub id: String,
    pub source: FeedSource,
    pub source_label: String,
    pub title: String,
    pub time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liked_by_user_ids: Option<LikedBy>,
}

impl FeedCandidate {
    pub fn candidate_id(source: FeedSource, id: EntityId) -> String {
        format!("{}-{}", source.as_str(), id)
    }

    fn from_announcement(announcement: &Announcement, bucket: FeedBucket) -> Self {
        Self {
            id: Self::candidate_id(FeedSource::Announcement, announcement.id),
            source: FeedSource::Announcement,
            source_label: bucket.label().to_string(),
            title: announcement.title.clone(),
            time: announcement.created_at,
            author: Some(announcement.author.clone()),
            reply_count: None,
            liked_by_user_ids: None,
        }
    }

    fn from_post(view: &PostView) -> Self {
        let post = &view.post;
        Self {
            id: Self::candidate_id(FeedSource::Forum, post.id),
            source: FeedSource::Forum,
            source_label: FeedBucket::Forum.label().to_string(),
            title: post.title.clone(),
            time: post.created_at,
            author: Some(post.author.clone()),
            reply_count: Some(view.reply_count),
            liked_by_user_ids: Some(post.liked_by_user_ids.clone()),
        }
    }
}

/// One labeled bucket of the by-source view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedGroup {
    pub bucket: FeedBucket,
    pub label: String,
    pub candidates: Vec<FeedCandidate>,
}

/// Build the four source buckets from published content.
///
/// Unpublished announcements and posts are skipped here, so callers may pass
/// whole collections.
pub fn group_by_source(announcements: &[Announcement], posts: &[PostView]) -> Vec<FeedGroup> {
    let mut groups: Vec<FeedGroup> = FeedBucket::ORDER
        .iter()
        .map(|&bucket| FeedGroup {
            bucket,
            label: bucket.label().to_string(),
            candidates: Vec::new(),
        })
        .collect();

    for announcement in announcements.iter().filter(|a| a.is_public()) {
        let bucket = FeedBucket::classify_announcement(&announcement.title);
        groups[bucket_index(bucket)]
            .candidates
            .push(FeedCandidate::from_announcement(announcement, bucket));
    }

    let forum = &mut groups[bucket_index(FeedBucket::Forum)].candidates;
    forum.extend(
        posts
            .iter()
            .filter(|view| view.post.is_public())
            .map(FeedCandidate::from_post),
    );

    for group in &mut groups {
        sort_newest_first(&mut group.candidates);
    }
    groups
}

/// Flatten the buckets in label order and rank globally by time.
pub fn merge(groups: &[FeedGroup]) -> Vec<FeedCandidate> {
    let mut merged: Vec<FeedCandidate> = groups
        .iter()
        .flat_map(|group| group.candidates.iter().cloned())
        .collect();
    sort_newest_first(&mut merged);
    merged
}

/// Resolve a curator selection against the merged feed.
///
/// Ids that no longer resolve (deleted or unpublished content) are dropped,
/// repeated ids are kept once, and the result is ranked by time.
pub fn select(merged: &[FeedCandidate], ids: &[String]) -> Vec<FeedCandidate> {
    let mut selected: Vec<FeedCandidate> = Vec::with_capacity(ids.len());
    for id in ids {
        if selected.iter().any(|c| &c.id == id) {
            continue;
        }
        if let Some(candidate) = merged.iter().find(|c| &c.id == id) {
            selected.push(candidate.clone());
        }
    }
    sort_newest_first(&mut selected);
    selected
}

// Variants are declared in display order.
fn bucket_index(bucket: FeedBucket) -> usize {
    bucket as usize
}

// `sort_by` is stable, which keeps exact time ties in collection order.
fn sort_newest_first(candidates: &mut [FeedCandidate]) {
    candidates.sort_by(|a, b| b.time.cmp(&a.time));
}
