//! Apple Podcasts feed extraction
//!
//! Episode pages embed their server state as JSON in
//! `<script id="serialized-server-data">`. The show's feed URL sits at
//! `[0].data.shelves[0].items[0].contextAction.episodeOffer.showOffer.feedUrl`.

use log::debug;
use scraper::ElementRef;
use serde_json::Value;

use super::first_text_child;
use crate::config::ExtractorConfig;

/// JSON pointer to the first show offer's feed URL
const FEED_URL_POINTER: &str =
    "/0/data/shelves/0/items/0/contextAction/episodeOffer/showOffer/feedUrl";

/// Feed URL from an Apple Podcasts server-data script element.
///
/// Returns `None` for any other element, and for server data that is not
/// valid JSON or lacks the feed URL.
pub fn extract_apple_feed(element: ElementRef<'_>, config: &ExtractorConfig) -> Option<String> {
    let el = element.value();
    if el.name() != "script" || el.attr("id") != Some(config.apple_script_id.as_str()) {
        return None;
    }

    let text = first_text_child(element)?;
    parse_server_data(text)
}

/// Pull the first feed URL out of serialized server data.
///
/// Only the indexed path is inspected; unrelated records, shelves and items
/// may hold anything.
pub fn parse_server_data(json: &str) -> Option<String> {
    let data: Value = match serde_json::from_str(json) {
        Ok(data) => data,
        Err(e) => {
            debug!("Ignoring malformed Apple Podcasts server data: {}", e);
            return None;
        }
    };

    let feed_url = match data.pointer(FEED_URL_POINTER).and_then(Value::as_str) {
        Some(url) if !url.is_empty() => url,
        _ => {
            debug!("Apple Podcasts server data has no feed URL");
            return None;
        }
    };

    Some(feed_url.to_string())
}
