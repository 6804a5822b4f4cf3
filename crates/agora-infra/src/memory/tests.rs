use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};

use agora_core::domain::legacy::LegacySnapshot;
use agora_core::domain::{
    AnnouncementPatch, AnnouncementStatus, CheckInConfig, CheckInPatch, CommentPatch,
    DEFAULT_HOT_TAGS, LikeTarget, ModerationStatus, NewAnnouncement, NewComment, NewPost,
    NewSlide, PostPatch, ReviewNote, SlideMove, SlidePatch,
};
use agora_core::ports::{
    AnnouncementRepository, Clock, CommentRepository, CurationRepository, LikeRegistry,
    ManualClock, PostRepository,
};
use agora_core::services::FeedService;

use super::InMemoryCommunityStore;

struct Fixture {
    store: Arc<InMemoryCommunityStore>,
    clock: Arc<ManualClock>,
}

impl Fixture {
    fn new() -> Self {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
        ));
        let store = Arc::new(InMemoryCommunityStore::with_clock(clock.clone()));
        Self { store, clock }
    }

    fn tick(&self) {
        self.clock.advance(Duration::minutes(1));
    }

    fn feed(&self) -> FeedService {
        FeedService::new(self.store.clone(), self.store.clone(), self.store.clone())
    }

    async fn announce(&self, title: &str) -> u64 {
        self.tick();
        self.store
            .create_announcement(NewAnnouncement {
                title: title.into(),
                content: String::new(),
                author: "admin".into(),
                is_pinned: false,
                status: AnnouncementStatus::Published,
            })
            .await
            .unwrap()
            .id
    }

    async fn post(&self, title: &str, content: &str) -> u64 {
        self.tick();
        self.store
            .create_post(NewPost {
                title: title.into(),
                content: content.into(),
                author: "dave".into(),
                author_id: Some(7),
            })
            .await
            .unwrap()
            .id
    }

    async fn published_post(&self, title: &str) -> u64 {
        let id = self.post(title, "").await;
        self.publish_post(id).await;
        id
    }

    async fn publish_post(&self, id: u64) {
        assert!(
            self.store
                .set_post_status(id, ModerationStatus::Published, ReviewNote::default())
                .await
                .unwrap()
        );
    }

    async fn comment(&self, post_id: u64, content: &str) -> u64 {
        self.tick();
        self.store
            .add_comment(NewComment {
                post_id,
                content: content.into(),
                author: "erin".into(),
                author_id: Some(8),
            })
            .await
            .unwrap()
            .id
    }
}

#[tokio::test]
async fn test_ids_follow_previous_max_even_after_delete() {
    let fx = Fixture::new();

    let first = fx.post("a", "").await;
    let second = fx.post("b", "").await;
    assert_eq!((first, second), (1, 2));

    assert!(fx.store.delete_post(second).await.unwrap());
    let third = fx.post("c", "").await;
    assert_eq!(third, 3);

    assert_eq!(fx.announce("系统维护通知").await, 1);
    assert_eq!(fx.comment(first, "hi").await, 1);
}

#[tokio::test]
async fn test_delete_post_cascades_to_comments() {
    let fx = Fixture::new();
    let doomed = fx.post("doomed", "").await;
    let kept = fx.post("kept", "").await;
    fx.comment(doomed, "one").await;
    fx.comment(doomed, "two").await;
    let survivor = fx.comment(kept, "three").await;

    assert!(fx.store.delete_post(doomed).await.unwrap());

    assert!(
        fx.store
            .list_all_comments_for_admin(doomed)
            .await
            .unwrap()
            .is_empty()
    );
    assert!(fx.store.find_comment(survivor).await.unwrap().is_some());
    assert!(!fx.store.delete_post(doomed).await.unwrap());
}

#[tokio::test]
async fn test_new_post_hidden_until_published() {
    let fx = Fixture::new();
    let older = fx.published_post("older").await;
    let fresh = fx.post("fresh", "").await;

    let post = fx.store.find_post(fresh).await.unwrap().unwrap();
    assert_eq!(post.post.moderation.status, ModerationStatus::Pending);
    let public: Vec<u64> = ids(fx.store.list_public_posts().await.unwrap());
    assert_eq!(public, vec![older]);

    fx.publish_post(fresh).await;

    let public: Vec<u64> = ids(fx.store.list_public_posts().await.unwrap());
    assert_eq!(public, vec![fresh, older]);
    let admin: Vec<u64> = ids(fx.store.list_all_posts_for_admin().await.unwrap());
    assert_eq!(admin, vec![fresh, older]);
}

#[tokio::test]
async fn test_set_status_stamps_review_fields() {
    let fx = Fixture::new();
    let id = fx.post("spam?", "").await;
    fx.tick();
    let reviewed_at = fx.clock.now();

    let applied = fx
        .store
        .set_post_status(
            id,
            ModerationStatus::Rejected,
            ReviewNote {
                reviewed_by: Some("mod-anna".into()),
                reject_reason: Some("duplicate".into()),
            },
        )
        .await
        .unwrap();
    assert!(applied);

    let post = fx.store.find_post(id).await.unwrap().unwrap().post;
    assert_eq!(post.moderation.status, ModerationStatus::Rejected);
    assert_eq!(post.moderation.reviewed_at, Some(reviewed_at));
    assert_eq!(post.moderation.reviewed_by.as_deref(), Some("mod-anna"));
    assert_eq!(post.moderation.reject_reason.as_deref(), Some("duplicate"));
    assert_eq!(post.updated_at, reviewed_at);

    // Rejections can be reversed.
    fx.publish_post(id).await;
    assert_eq!(fx.store.list_public_posts().await.unwrap().len(), 1);

    let missing = fx
        .store
        .set_post_status(99, ModerationStatus::Published, ReviewNote::default())
        .await
        .unwrap();
    assert!(!missing);
}

#[tokio::test]
async fn test_comment_visible_after_publication_in_time_order() {
    let fx = Fixture::new();
    let post = fx.published_post("writeup").await;
    let early = fx.comment(post, "first!").await;
    let tagged = fx.comment(post, "#pwn nice writeup").await;

    assert!(
        fx.store
            .set_comment_status(early, ModerationStatus::Published, ReviewNote::default())
            .await
            .unwrap()
    );
    let public = fx.store.list_public_comments(post).await.unwrap();
    assert_eq!(public.iter().map(|c| c.id).collect::<Vec<_>>(), vec![early]);

    assert!(
        fx.store
            .set_comment_status(tagged, ModerationStatus::Published, ReviewNote::default())
            .await
            .unwrap()
    );
    let public = fx.store.list_public_comments(post).await.unwrap();
    assert_eq!(
        public.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![early, tagged]
    );

    let view = fx.store.find_post(post).await.unwrap().unwrap();
    assert_eq!(view.reply_count, 2);
}

#[tokio::test]
async fn test_reply_count_ignores_unpublished_comments() {
    let fx = Fixture::new();
    let post = fx.published_post("q").await;
    fx.comment(post, "pending").await;

    let view = fx.store.find_post(post).await.unwrap().unwrap();
    assert_eq!(view.reply_count, 0);
    assert_eq!(
        fx.store.list_all_comments_for_admin(post).await.unwrap().len(),
        1
    );
}

#[tokio::test]
async fn test_update_applies_only_present_fields() {
    let fx = Fixture::new();
    let id = fx.post("title", "body").await;
    fx.tick();

    let updated = fx
        .store
        .update_post(
            id,
            PostPatch {
                content: Some("edited body".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(updated);

    let post = fx.store.find_post(id).await.unwrap().unwrap().post;
    assert_eq!(post.title, "title");
    assert_eq!(post.content, "edited body");
    assert!(post.updated_at > post.created_at);

    assert!(
        !fx.store
            .update_post(42, PostPatch::default())
            .await
            .unwrap()
    );
    assert!(
        !fx.store
            .update_comment(42, CommentPatch::default())
            .await
            .unwrap()
    );
    assert!(
        !fx.store
            .update_announcement(42, AnnouncementPatch::default())
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_reads_are_detached_copies() {
    let fx = Fixture::new();
    let id = fx.post("original", "").await;

    let mut copy = fx.store.find_post(id).await.unwrap().unwrap();
    copy.post.title = "changed".into();
    copy.post.liked_by_user_ids.toggle(1);

    let stored = fx.store.find_post(id).await.unwrap().unwrap();
    assert_eq!(stored.post.title, "original");
    assert!(stored.post.liked_by_user_ids.is_empty());
}

#[tokio::test]
async fn test_like_toggle_twice_restores_state() {
    let fx = Fixture::new();
    let post = fx.published_post("likeable").await;
    let user = Some(11);

    assert!(!fx.store.has_liked(LikeTarget::Post, post, user).await.unwrap());
    assert_eq!(fx.store.like_count(LikeTarget::Post, post).await.unwrap(), 0);

    assert!(fx.store.toggle_like(LikeTarget::Post, post, user).await.unwrap());
    assert!(fx.store.has_liked(LikeTarget::Post, post, user).await.unwrap());
    assert_eq!(fx.store.like_count(LikeTarget::Post, post).await.unwrap(), 1);

    assert!(fx.store.toggle_like(LikeTarget::Post, post, user).await.unwrap());
    assert!(!fx.store.has_liked(LikeTarget::Post, post, user).await.unwrap());
    assert_eq!(fx.store.like_count(LikeTarget::Post, post).await.unwrap(), 0);
}

#[tokio::test]
async fn test_like_noop_for_anonymous_or_missing() {
    let fx = Fixture::new();
    let post = fx.published_post("p").await;
    let comment = fx.comment(post, "c").await;

    assert!(!fx.store.toggle_like(LikeTarget::Post, post, None).await.unwrap());
    assert!(!fx.store.toggle_like(LikeTarget::Post, 404, Some(1)).await.unwrap());
    assert!(!fx.store.has_liked(LikeTarget::Comment, 404, Some(1)).await.unwrap());
    assert_eq!(fx.store.like_count(LikeTarget::Comment, 404).await.unwrap(), 0);

    assert!(fx.store.toggle_like(LikeTarget::Comment, comment, Some(1)).await.unwrap());
    assert!(fx.store.toggle_like(LikeTarget::Comment, comment, Some(2)).await.unwrap());
    assert_eq!(fx.store.like_count(LikeTarget::Comment, comment).await.unwrap(), 2);
    assert_eq!(fx.store.like_count(LikeTarget::Post, post).await.unwrap(), 0);
}

#[tokio::test]
async fn test_search_matches_public_title_or_content() {
    let fx = Fixture::new();
    let heap = fx.published_post("Heap basics").await;
    let kernel = fx.post("Kernel", "a HEAP spray trick").await;
    fx.publish_post(kernel).await;
    fx.post("heap draft", "").await;

    let hits = ids(fx.store.search_posts("heap").await.unwrap());
    assert_eq!(hits, vec![kernel, heap]);

    let all = ids(fx.store.search_posts("   ").await.unwrap());
    assert_eq!(all, vec![kernel, heap]);

    assert!(fx.store.search_posts("rop").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_public_announcements_pinned_first() {
    let fx = Fixture::new();
    let old = fx.announce("old news").await;
    let pinned = fx.announce("read me").await;
    let newest = fx.announce("fresh").await;
    let draft = fx.announce("draft").await;

    fx.store
        .update_announcement(
            pinned,
            AnnouncementPatch {
                is_pinned: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    fx.store
        .update_announcement(
            draft,
            AnnouncementPatch {
                status: Some(AnnouncementStatus::Draft),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let public: Vec<u64> = fx
        .store
        .list_public_announcements()
        .await
        .unwrap()
        .iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(public, vec![pinned, newest, old]);
    assert_eq!(fx.store.list_all_announcements().await.unwrap().len(), 4);

    assert!(fx.store.delete_announcement(old).await.unwrap());
    assert!(fx.store.find_announcement(old).await.unwrap().is_none());
}

#[tokio::test]
async fn test_feed_classifies_and_ranks_sources() {
    let fx = Fixture::new();
    fx.announce("训练题目更新公告").await;
    fx.announce("CTF赛事开启").await;
    let post = fx.published_post("My first writeup").await;
    fx.post("still pending", "").await;
    fx.announce("系统维护通知").await;

    let feed = fx.feed();
    let groups = feed.candidates_by_source().await.unwrap();
    let sizes: Vec<(&str, usize)> = groups
        .iter()
        .map(|g| (g.label.as_str(), g.candidates.len()))
        .collect();
    assert_eq!(
        sizes,
        vec![
            ("site-wide announcements", 1),
            ("training announcements", 1),
            ("competition announcements", 1),
            ("forum posts", 1),
        ]
    );
    assert_eq!(groups[1].candidates[0].title, "训练题目更新公告");
    assert_eq!(groups[2].candidates[0].title, "CTF赛事开启");
    assert_eq!(groups[0].candidates[0].title, "系统维护通知");

    let forum_id = format!("forum-{post}");
    let merged = feed.candidates().await.unwrap();
    let merged_ids: Vec<&str> = merged.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(
        merged_ids,
        vec![
            "announcement-3",
            forum_id.as_str(),
            "announcement-2",
            "announcement-1",
        ]
    );
}

#[tokio::test]
async fn test_selected_feed_drops_stale_ids() {
    let fx = Fixture::new();
    let a = fx.announce("系统维护通知").await;
    let p = fx.published_post("pinned thread").await;
    let gone = fx.published_post("will be deleted").await;
    fx.store.delete_post(gone).await.unwrap();

    let selection = vec![
        format!("announcement-{a}"),
        format!("forum-{gone}"),
        format!("forum-{p}"),
    ];
    fx.store.set_feed_selection(selection.clone()).await.unwrap();

    let feed = fx.feed();
    let selected = feed.selected(&selection).await.unwrap();
    let resolved: Vec<&str> = selected.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(resolved, vec![selection[2].as_str(), selection[0].as_str()]);

    let homepage = feed.homepage().await.unwrap();
    assert_eq!(homepage, selected);

    // Unpublishing drops the post from the resolved selection.
    fx.store
        .set_post_status(p, ModerationStatus::Pending, ReviewNote::default())
        .await
        .unwrap();
    let homepage = feed.homepage().await.unwrap();
    assert_eq!(homepage.len(), 1);
}

#[tokio::test]
async fn test_tag_counts_include_unpublished_posts() {
    let fx = Fixture::new();
    fx.announce("#ctf 赛事开启").await;
    fx.published_post("#pwn writeup").await;
    fx.post("#pwn draft", "more #pwn and #web").await;

    let rows = fx.feed().tag_counts().await.unwrap();
    let summary: Vec<(&str, usize, bool)> = rows
        .iter()
        .map(|r| (r.tag.as_str(), r.count, r.hot))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("#pwn", 3, true),
            ("#ctf", 1, false),
            ("#web", 1, false),
            ("#ctf2024", 0, true),
            ("#docker", 0, true),
            ("#python", 0, true),
            ("#writeup", 0, true),
        ]
    );
}

#[tokio::test]
async fn test_surfaced_tags_are_retained() {
    let fx = Fixture::new();
    let id = fx.post("#crypto notes", "").await;
    fx.store
        .set_hot_tags(vec!["misc".into(), "#forensics".into()])
        .await
        .unwrap();

    let feed = fx.feed();
    let first = feed.tag_counts().await.unwrap();
    assert!(first.iter().any(|r| r.tag == "#misc" && r.count == 0 && r.hot));

    fx.store.set_hot_tags(vec![]).await.unwrap();
    fx.store.delete_post(id).await.unwrap();

    let second = feed.tag_counts().await.unwrap();
    let mut tags: Vec<(&str, usize, bool)> = second
        .iter()
        .map(|r| (r.tag.as_str(), r.count, r.hot))
        .collect();
    tags.sort();
    assert_eq!(
        tags,
        vec![
            ("#crypto", 0, false),
            ("#forensics", 0, false),
            ("#misc", 0, false),
        ]
    );
}

#[tokio::test]
async fn test_curated_hot_tag_retained_without_admin_view() {
    let fx = Fixture::new();
    fx.store.set_hot_tags(vec!["#reverse".into()]).await.unwrap();
    fx.store.set_hot_tags(vec![]).await.unwrap();

    let rows = fx.feed().tag_counts().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tag, "#reverse");
    assert_eq!(rows[0].count, 0);
}

fn slide(title: &str) -> NewSlide {
    NewSlide {
        image_url: format!("/img/{title}.png"),
        title: title.into(),
        subtitle: String::new(),
        badge: None,
    }
}

async fn slide_titles(store: &InMemoryCommunityStore) -> Vec<String> {
    store
        .list_slides()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.title)
        .collect()
}

#[tokio::test]
async fn test_carousel_keeps_insertion_order_and_moves() {
    let fx = Fixture::new();
    let a = fx.store.create_slide(slide("a")).await.unwrap();
    let b = fx.store.create_slide(slide("b")).await.unwrap();
    let c = fx.store.create_slide(slide("c")).await.unwrap();
    assert_eq!(slide_titles(&fx.store).await, vec!["a", "b", "c"]);

    assert!(fx.store.move_slide(c.id, SlideMove::Up).await.unwrap());
    assert_eq!(slide_titles(&fx.store).await, vec!["a", "c", "b"]);
    assert!(fx.store.move_slide(a.id, SlideMove::Down).await.unwrap());
    assert_eq!(slide_titles(&fx.store).await, vec!["c", "a", "b"]);

    // Edges and unknown ids leave the order alone.
    assert!(!fx.store.move_slide(c.id, SlideMove::Up).await.unwrap());
    assert!(!fx.store.move_slide(b.id, SlideMove::Down).await.unwrap());
    assert!(!fx.store.move_slide(99, SlideMove::Up).await.unwrap());
    assert_eq!(slide_titles(&fx.store).await, vec!["c", "a", "b"]);

    assert!(
        fx.store
            .update_slide(
                b.id,
                SlidePatch {
                    badge: Some("新功能".into()),
                    ..Default::default()
                }
            )
            .await
            .unwrap()
    );
    assert!(!fx.store.update_slide(99, SlidePatch::default()).await.unwrap());
    assert!(fx.store.delete_slide(a.id).await.unwrap());
    assert!(!fx.store.delete_slide(a.id).await.unwrap());

    let slides = fx.store.list_slides().await.unwrap();
    assert_eq!(slides.len(), 2);
    assert_eq!(slides[1].badge.as_deref(), Some("新功能"));
    assert_eq!(fx.store.create_slide(slide("d")).await.unwrap().id, 4);
}

#[tokio::test]
async fn test_check_in_partial_update() {
    let fx = Fixture::new();
    assert_eq!(
        fx.store.check_in_config().await.unwrap(),
        CheckInConfig::default()
    );

    let updated = fx
        .store
        .update_check_in_config(CheckInPatch {
            daily_challenge_id: Some("WEB-011".into()),
            daily_challenge_title: Some("Blind SQLi".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.daily_challenge_id, "WEB-011");
    assert_eq!(updated.fortune, "中吉");
    assert_eq!(fx.store.check_in_config().await.unwrap(), updated);
}

#[tokio::test]
async fn test_fresh_store_curation_defaults() {
    let fx = Fixture::new();
    assert_eq!(fx.store.hot_tags().await.unwrap(), DEFAULT_HOT_TAGS.to_vec());
    assert_eq!(
        fx.store.feed_selection().await.unwrap(),
        vec!["announcement-1", "announcement-2", "forum-1"]
    );

    let a = fx.announce("系统维护通知").await;
    fx.tick();
    let p = fx.published_post("first thread").await;
    let home: Vec<String> = fx
        .feed()
        .homepage()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(home, vec![format!("forum-{p}"), format!("announcement-{a}")]);
}

#[tokio::test]
async fn test_snapshot_defaults_and_id_continuation() {
    let snapshot: LegacySnapshot = serde_json::from_str(
        r#"{
            "announcements": [
                {"id": 5, "title": "CTF赛事开启", "createdAt": "2024-02-01T00:00:00Z"}
            ],
            "forumPosts": [
                {"id": 8, "title": "legacy thread", "createdAt": "2024-01-01T00:00:00Z",
                 "likedByUserIds": [3]},
                {"id": 9, "title": "queued", "createdAt": "2024-01-02T00:00:00Z",
                 "status": "pending"}
            ]
        }"#,
    )
    .unwrap();
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
    ));
    let store = InMemoryCommunityStore::from_snapshot(snapshot, clock);

    let public = ids(store.list_public_posts().await.unwrap());
    assert_eq!(public, vec![8]);
    assert!(store.has_liked(LikeTarget::Post, 8, Some(3)).await.unwrap());
    assert_eq!(store.list_public_announcements().await.unwrap().len(), 1);

    let created = store
        .create_post(NewPost {
            title: "new".into(),
            content: String::new(),
            author: "x".into(),
            author_id: None,
        })
        .await
        .unwrap();
    assert_eq!(created.id, 10);

    store.set_hot_tags(vec!["#misc".into()]).await.unwrap();
    store.reset().await;
    assert!(store.list_all_posts_for_admin().await.unwrap().is_empty());
    assert!(store.list_public_announcements().await.unwrap().is_empty());
    assert_eq!(store.hot_tags().await.unwrap(), DEFAULT_HOT_TAGS.to_vec());
    assert!(store.surfaced_tags().await.unwrap().is_empty());

    // Ids start over after a reset.
    let fresh = store
        .create_post(NewPost {
            title: "after reset".into(),
            content: String::new(),
            author: "x".into(),
            author_id: None,
        })
        .await
        .unwrap();
    assert_eq!(fresh.id, 1);
}

fn ids(views: Vec<agora_core::domain::PostView>) -> Vec<u64> {
    views.iter().map(|v| v.post.id).collect()
}
