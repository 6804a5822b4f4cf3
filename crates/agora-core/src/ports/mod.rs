//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod clock;
mod repository;

pub use clock::{Clock, ManualClock, SystemClock};
pub use repository::{
    AnnouncementRepository, CommentRepository, CurationRepository, LikeRegistry, PostRepository,
};
