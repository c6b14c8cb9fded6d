use std::fmt::Display;

use crate::my_regex;

/// The opaque 11 character id YouTube assigns to a video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    /// Find the id in any of the known URL shapes
    /// (`watch?v=`, `youtu.be/`, `/shorts/`, `/embed/`).
    ///
    /// Returns `None` for anything else, which callers treat as
    /// "no deep links", not as an error.
    pub fn extract(url: &str) -> Option<Self> {
        my_regex::video_id_patterns()
            .iter()
            .find_map(|re| re.captures(url))
            .map(|cap| Self(cap["id"].to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The canonical watch URL for this video.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }

    /// A watch URL that starts playback at `seconds`.
    pub fn deep_link(&self, seconds: u64) -> String {
        format!("{}&t={seconds}s", self.watch_url())
    }
}

impl Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(url: &str) -> Option<String> {
        VideoId::extract(url).map(|v| v.as_str().to_owned())
    }

    #[test]
    fn extracts_from_watch_url() {
        assert_eq!(
            id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_owned())
        );
    }

    #[test]
    fn extracts_with_other_query_parameters() {
        assert_eq!(
            id("https://www.youtube.com/watch?list=PL123&v=dQw4w9WgXcQ&t=30s"),
            Some("dQw4w9WgXcQ".to_owned())
        );
    }

    #[test]
    fn extracts_from_short_host() {
        assert_eq!(
            id("https://youtu.be/dQw4w9WgXcQ?t=5"),
            Some("dQw4w9WgXcQ".to_owned())
        );
    }

    #[test]
    fn extracts_from_shorts_and_embed() {
        assert_eq!(
            id("https://www.youtube.com/shorts/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_owned())
        );
        assert_eq!(
            id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_owned())
        );
    }

    #[test]
    fn rejects_unknown_urls() {
        assert_eq!(id("https://not-youtube.example/x"), None);
        assert_eq!(id(""), None);
        assert_eq!(id("plain text, no url at all"), None);
    }

    #[test]
    fn rejects_id_runs_of_the_wrong_length() {
        // 12+ alphabet characters cannot be an id
        assert_eq!(id("https://youtu.be/dQw4w9WgXcQX"), None);
        assert_eq!(id("https://www.youtube.com/watch?v=short"), None);
    }

    #[test]
    fn builds_deep_links() {
        let vid = VideoId::extract("https://youtu.be/dQw4w9WgXcQ").unwrap();
        assert_eq!(
            vid.watch_url(),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
        assert_eq!(
            vid.deep_link(4205),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=4205s"
        );
    }
}
