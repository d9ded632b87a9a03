//! Podcast episode page parser
//!
//! Extracts the podcast feed URL and a clean episode title from the HTML of
//! an episode page. Recognized hosting platforms:
//! - Apple Podcasts (embedded `serialized-server-data` JSON)
//! - Transistor (`<link rel="alternate">` RSS feed)
//!
//! Exposed both as a Rust API and through a C-compatible FFI layer.

pub mod config;
pub mod episode;
pub mod error;
pub mod extractors;
pub mod ffi;

pub use config::ExtractorConfig;
pub use episode::{Episode, TitleFormat};
pub use error::ExtractError;
pub use extractors::{extract_feed, extract_feed_bytes, extract_feed_with};
pub use ffi::*;
