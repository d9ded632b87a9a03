//! Episode page extraction
//!
//! The document is walked once in pre-order. Each element is checked against
//! the title capture and every platform signature; a platform match records
//! the feed and binds the title format applied after the walk.

mod apple_extractor;
mod link_extractor;

pub use apple_extractor::*;
pub use link_extractor::*;

use log::{debug, trace};
use scraper::{ElementRef, Html};

use crate::config::ExtractorConfig;
use crate::episode::{Episode, EpisodeBuilder, TitleFormat};
use crate::error::{ExtractError, Result};

/// Extract feed and title using the default platform markers
pub fn extract_feed(source: &str) -> Result<Episode> {
    extract_feed_with(source, &ExtractorConfig::default())
}

/// Extract from raw bytes; input that is not UTF-8 cannot form a document
pub fn extract_feed_bytes(source: &[u8]) -> Result<Episode> {
    let html = std::str::from_utf8(source)
        .map_err(|e| ExtractError::Parse(format!("invalid UTF-8 in HTML: {}", e)))?;
    extract_feed(html)
}

/// Extract feed and title from an episode page
pub fn extract_feed_with(source: &str, config: &ExtractorConfig) -> Result<Episode> {
    let document = Html::parse_document(source);

    if config.strict && !document.errors.is_empty() {
        return Err(ExtractError::Parse(document.errors.join("; ")));
    }

    let mut episode = EpisodeBuilder::default();

    for node in document.tree.root().descendants() {
        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };

        if element.value().name() == "title" {
            if let Some(text) = first_text_child(element) {
                trace!("Captured raw title: {:?}", text);
                episode.set_raw_title(text);
            }
        }

        if let Some(feed) = extract_apple_feed(element, config) {
            debug!("Detected Apple Podcasts page, feed {}", feed);
            episode.set_platform(feed, TitleFormat::AppleStyle);
        }

        if let Some(feed) = extract_link_feed(element, config) {
            debug!("Detected link-style RSS feed {}", feed);
            episode.set_platform(feed, TitleFormat::LinkStyle);
        }
    }

    Ok(episode.finish())
}

/// Text of the element's first child, if that child is a text node
pub(crate) fn first_text_child<'a>(element: ElementRef<'a>) -> Option<&'a str> {
    let child = element.first_child()?;
    child.value().as_text().map(|text| &**text)
}
