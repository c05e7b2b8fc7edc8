//! Shared helpers used across the server layers.

pub mod extract;
pub mod slug;
pub mod token;
pub mod validate;
