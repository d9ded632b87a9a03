//! Extractor configuration
//!
//! Passed as JSON across the FFI boundary, so every field has a default and
//! a partial document such as `{"strict": true}` is valid.

use serde::{Deserialize, Serialize};

/// `id` attribute of the Apple Podcasts server-data script tag
pub const APPLE_SCRIPT_ID: &str = "serialized-server-data";

/// Feed host served in Transistor `<link rel="alternate">` tags
pub const TRANSISTOR_FEED_PREFIX: &str = "https://feeds.transistor.fm";

/// Platform markers and parse strictness
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Identifying `id` of the script tag holding Apple-style server data
    pub apple_script_id: String,
    /// Accepted `href` prefixes for link-style RSS feeds
    pub link_feed_prefixes: Vec<String>,
    /// Fail with a parse error if the HTML parser recorded any errors
    pub strict: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            apple_script_id: APPLE_SCRIPT_ID.to_string(),
            link_feed_prefixes: vec![TRANSISTOR_FEED_PREFIX.to_string()],
            strict: false,
        }
    }
}

impl ExtractorConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub(crate) fn is_link_feed(&self, href: &str) -> bool {
        self.link_feed_prefixes
            .iter()
            .any(|prefix| href.starts_with(prefix.as_str()))
    }
}
