//! Adapters between external formats (JSON files, urlencoded replies) and domain types.

pub mod json;
pub mod reply_reader;
