//! # Agora Shared
//!
//! Wire types exchanged between the Agora server and its clients.
//! Kept free of domain dependencies so a frontend can compile it on its own.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
