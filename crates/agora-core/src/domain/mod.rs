//! Domain entities - the core business objects.

mod announcement;
mod comment;
mod curation;
pub mod feed;
pub mod legacy;
mod likes;
mod post;
mod status;
pub mod tags;

pub use announcement::{Announcement, AnnouncementPatch, NewAnnouncement};
pub use comment::{CommentPatch, ForumComment, NewComment};
pub use curation::{
    CarouselSlide, CheckInConfig, CheckInPatch, DEFAULT_FEED_SELECTION, DEFAULT_HOT_TAGS, NewSlide,
    SlideMove, SlidePatch, normalize_hot_tags,
};
pub use feed::{FeedBucket, FeedCandidate, FeedGroup, FeedSource};
pub use likes::{LikeTarget, LikedBy};
pub use post::{ForumPost, NewPost, PostPatch, PostView};
pub use status::{AnnouncementStatus, Moderation, ModerationStatus, ReviewNote};
pub use tags::TagCount;

/// Identifier of a stored entity, unique within its collection.
pub type EntityId = u64;

/// Identifier of an already-authenticated user.
pub type UserId = u64;
