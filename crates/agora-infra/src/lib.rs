//! # Agora Infrastructure
//!
//! Concrete implementations of the ports defined in `agora-core`.
//!
//! Content is held in process memory: one [`InMemoryCommunityStore`] owns
//! every collection behind a single lock. It can start empty or from a
//! legacy JSON export (see [`seed`]).

pub mod memory;
pub mod seed;

pub use memory::InMemoryCommunityStore;
pub use seed::{SeedError, load_snapshot};
