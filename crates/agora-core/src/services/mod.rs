//! Read-side services composed from several ports.

mod feed;

pub use feed::FeedService;
