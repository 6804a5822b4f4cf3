//! # Agora Core
//!
//! The domain layer of the Agora community engine.
//! Moderation workflow, like registry, feed aggregation and tag statistics
//! live here as plain types and pure functions; storage is reached through
//! the traits in [`ports`].

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, RepoError};
