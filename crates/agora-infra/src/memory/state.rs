//! The owned collections behind [`super::InMemoryCommunityStore`].

use std::collections::{BTreeMap, BTreeSet};

use agora_core::domain::legacy::LegacySnapshot;
use agora_core::domain::{
    Announcement, CarouselSlide, CheckInConfig, DEFAULT_FEED_SELECTION, DEFAULT_HOT_TAGS,
    EntityId, ForumComment, ForumPost, PostView, normalize_hot_tags,
};

/// Hands out ids as one more than the largest id the collection has held.
///
/// The high-water mark survives deletions, so ids are never handed out twice.
#[derive(Debug, Default)]
pub(crate) struct IdSequence {
    high_water: EntityId,
}

impl IdSequence {
    pub(crate) fn next_id(&mut self) -> EntityId {
        self.high_water += 1;
        self.high_water
    }

    pub(crate) fn observe(&mut self, id: EntityId) {
        self.high_water = self.high_water.max(id);
    }
}

/// Every collection of the store. Only touched with the store lock held.
#[derive(Debug)]
pub(crate) struct StoreState {
    pub(crate) announcements: BTreeMap<EntityId, Announcement>,
    pub(crate) posts: BTreeMap<EntityId, ForumPost>,
    pub(crate) comments: BTreeMap<EntityId, ForumComment>,
    /// Display order.
    pub(crate) slides: Vec<CarouselSlide>,
    pub(crate) check_in: CheckInConfig,
    pub(crate) feed_selection: Vec<String>,
    pub(crate) hot_tags: Vec<String>,
    pub(crate) surfaced_tags: BTreeSet<String>,
    pub(crate) announcement_ids: IdSequence,
    pub(crate) post_ids: IdSequence,
    pub(crate) comment_ids: IdSequence,
    pub(crate) slide_ids: IdSequence,
}

impl Default for StoreState {
    /// Empty content with the stock homepage curation.
    fn default() -> Self {
        Self {
            announcements: BTreeMap::new(),
            posts: BTreeMap::new(),
            comments: BTreeMap::new(),
            slides: Vec::new(),
            check_in: CheckInConfig::default(),
            feed_selection: DEFAULT_FEED_SELECTION.map(String::from).to_vec(),
            hot_tags: DEFAULT_HOT_TAGS.map(String::from).to_vec(),
            surfaced_tags: BTreeSet::new(),
            announcement_ids: IdSequence::default(),
            post_ids: IdSequence::default(),
            comment_ids: IdSequence::default(),
            slide_ids: IdSequence::default(),
        }
    }
}

impl StoreState {
    /// Build state from a legacy export, filling absent fields on the way in.
    pub(crate) fn from_snapshot(snapshot: LegacySnapshot) -> Self {
        let mut state = Self::default();

        for legacy in snapshot.announcements {
            let announcement = Announcement::from(legacy);
            state.announcement_ids.observe(announcement.id);
            state.announcements.insert(announcement.id, announcement);
        }
        for legacy in snapshot.forum_posts {
            let post = ForumPost::from(legacy);
            state.post_ids.observe(post.id);
            state.posts.insert(post.id, post);
        }
        for legacy in snapshot.forum_comments {
            let comment = ForumComment::from(legacy);
            state.comment_ids.observe(comment.id);
            if !state.posts.contains_key(&comment.post_id) {
                tracing::warn!(
                    comment_id = comment.id,
                    post_id = comment.post_id,
                    "Dropping comment whose post is missing from the snapshot"
                );
                continue;
            }
            state.comments.insert(comment.id, comment);
        }
        for slide in snapshot.carousel_slides {
            state.slide_ids.observe(slide.id);
            state.slides.push(slide);
        }
        if let Some(check_in) = snapshot.check_in_config {
            state.check_in = check_in;
        }
        if let Some(hot_tags) = snapshot.hot_tags {
            state.hot_tags = normalize_hot_tags(hot_tags);
            state.surfaced_tags.extend(state.hot_tags.iter().cloned());
        }
        if let Some(selection) = snapshot.feed_selection {
            state.feed_selection = selection;
        }

        state
    }

    /// Count of a post's published comments.
    pub(crate) fn reply_count(&self, post_id: EntityId) -> usize {
        self.comments
            .values()
            .filter(|c| c.post_id == post_id && c.is_public())
            .count()
    }

    pub(crate) fn post_view(&self, post: &ForumPost) -> PostView {
        PostView {
            post: post.clone(),
            reply_count: self.reply_count(post.id),
        }
    }

    /// Views of the posts accepted by `keep`, newest first.
    pub(crate) fn post_views<F>(&self, keep: F) -> Vec<PostView>
    where
        F: Fn(&ForumPost) -> bool,
    {
        let mut views: Vec<PostView> = self
            .posts
            .values()
            .filter(|post| keep(post))
            .map(|post| self.post_view(post))
            .collect();
        views.sort_by(|a, b| b.post.created_at.cmp(&a.post.created_at));
        views
    }

    /// Comments of one post accepted by `keep`, oldest first.
    pub(crate) fn comments_of<F>(&self, post_id: EntityId, keep: F) -> Vec<ForumComment>
    where
        F: Fn(&ForumComment) -> bool,
    {
        let mut comments: Vec<ForumComment> = self
            .comments
            .values()
            .filter(|c| c.post_id == post_id && keep(c))
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        comments
    }
}
