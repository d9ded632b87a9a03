//! RSS feed discovery from `<link rel="alternate">` tags
//!
//! Transistor episode pages advertise the show feed in the document head.
//! Only hrefs on a configured feed host count; arbitrary site feeds are
//! ignored.

use scraper::ElementRef;

use crate::config::ExtractorConfig;

const RSS_MIME_TYPE: &str = "application/rss+xml";

/// Feed URL from a link-style RSS `<link>` element
pub fn extract_link_feed(element: ElementRef<'_>, config: &ExtractorConfig) -> Option<String> {
    let el = element.value();
    if el.name() != "link"
        || el.attr("rel") != Some("alternate")
        || el.attr("type") != Some(RSS_MIME_TYPE)
    {
        return None;
    }

    let href = el.attr("href")?;
    if config.is_link_feed(href) {
        Some(href.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first_link_feed(html: &str) -> Option<String> {
        let document = Html::parse_document(html);
        let selector = Selector::parse("link").unwrap();
        let config = ExtractorConfig::default();
        document
            .select(&selector)
            .find_map(|element| extract_link_feed(element, &config))
    }

    #[test]
    fn test_transistor_link() {
        let html = r#"<link rel="alternate" type="application/rss+xml" href="https://feeds.transistor.fm/abc">"#;
        assert_eq!(
            first_link_feed(html).as_deref(),
            Some("https://feeds.transistor.fm/abc")
        );
    }

    #[test]
    fn test_requires_all_attributes() {
        let cases = [
            r#"<link rel="stylesheet" type="application/rss+xml" href="https://feeds.transistor.fm/abc">"#,
            r#"<link rel="alternate" type="application/atom+xml" href="https://feeds.transistor.fm/abc">"#,
            r#"<link rel="alternate" type="application/rss+xml">"#,
            r#"<link rel="alternate" type="application/rss+xml" href="https://example.com/feed.xml">"#,
            r#"<a rel="alternate" type="application/rss+xml" href="https://feeds.transistor.fm/abc">feed</a>"#,
        ];

        for html in cases {
            assert_eq!(first_link_feed(html), None, "input: {}", html);
        }
    }
}
