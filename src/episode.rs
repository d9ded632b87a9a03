//! Extraction result and title formatting

use serde::{Deserialize, Serialize};

/// Separator between episode and show name in Apple Podcasts titles
const APPLE_TITLE_SEPARATOR: &str = " - ";

/// Separator between show and episode name in link-style titles
const LINK_TITLE_SEPARATOR: &str = " | ";

/// Metadata extracted from a podcast episode page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Feed URL, empty if no platform was recognized
    pub feed: String,
    /// Human-presentable episode title
    pub title: String,
}

/// Title formatting rule bound by the detected platform
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TitleFormat {
    /// Raw title unchanged
    #[default]
    Identity,
    /// `Episode - Show - Apple Podcasts`: keep the part before the first separator
    AppleStyle,
    /// `Show | Episode`: keep the second segment
    LinkStyle,
}

impl TitleFormat {
    pub fn apply(self, raw: &str) -> String {
        match self {
            TitleFormat::Identity => raw.to_string(),
            TitleFormat::AppleStyle => raw
                .split_once(APPLE_TITLE_SEPARATOR)
                .map_or(raw, |(head, _)| head)
                .to_string(),
            TitleFormat::LinkStyle => raw
                .split(LINK_TITLE_SEPARATOR)
                .nth(1)
                .unwrap_or(raw)
                .to_string(),
        }
    }
}

/// Episode state accumulated during the tree walk.
///
/// Only [`EpisodeBuilder::finish`] hands anything to the caller, so a
/// partially walked document is never observable.
#[derive(Debug, Default)]
pub(crate) struct EpisodeBuilder {
    raw_title: String,
    feed: String,
    format: TitleFormat,
}

impl EpisodeBuilder {
    pub(crate) fn set_raw_title(&mut self, title: &str) {
        self.raw_title = title.to_string();
    }

    /// Record a platform match; later matches replace earlier ones
    pub(crate) fn set_platform(&mut self, feed: String, format: TitleFormat) {
        self.feed = feed;
        self.format = format;
    }

    pub(crate) fn finish(self) -> Episode {
        Episode {
            title: self.format.apply(&self.raw_title),
            feed: self.feed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(TitleFormat::Identity.apply("A - B | C"), "A - B | C");
    }

    #[test]
    fn test_apple_style() {
        let raw = "Episode Title - Show Title - Apple Podcasts";
        assert_eq!(TitleFormat::AppleStyle.apply(raw), "Episode Title");
        assert_eq!(TitleFormat::AppleStyle.apply("JustATitle"), "JustATitle");
        // Hyphen without surrounding spaces is not a separator
        assert_eq!(TitleFormat::AppleStyle.apply("Part-Two"), "Part-Two");
    }

    #[test]
    fn test_link_style() {
        assert_eq!(TitleFormat::LinkStyle.apply("Show Name | Episode Name"), "Episode Name");
        assert_eq!(TitleFormat::LinkStyle.apply("Show | Episode | Extra"), "Episode");
        assert_eq!(TitleFormat::LinkStyle.apply("No Separator"), "No Separator");
    }

    #[test]
    fn test_empty_raw_title() {
        for format in [TitleFormat::Identity, TitleFormat::AppleStyle, TitleFormat::LinkStyle] {
            assert_eq!(format.apply(""), "");
        }
    }

    #[test]
    fn test_builder_last_platform_wins() {
        let mut builder = EpisodeBuilder::default();
        builder.set_raw_title("Show | Episode - Part");
        builder.set_platform("https://a.example/feed".to_string(), TitleFormat::AppleStyle);
        builder.set_platform("https://b.example/feed".to_string(), TitleFormat::LinkStyle);

        let episode = builder.finish();
        assert_eq!(episode.feed, "https://b.example/feed");
        assert_eq!(episode.title, "Episode - Part");
    }

    #[test]
    fn test_episode_json_fields() {
        let episode = Episode {
            feed: "https://feeds.transistor.fm/abc".to_string(),
            title: "Episode Name".to_string(),
        };
        let json = serde_json::to_value(&episode).unwrap();
        assert_eq!(json["feed"], "https://feeds.transistor.fm/abc");
        assert_eq!(json["title"], "Episode Name");
        assert_eq!(json.as_object().unwrap().len(), 2);
    }
}
