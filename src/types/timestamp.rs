use std::fmt::Display;

/// A position in the video, kept both as the display text it was matched
/// from and as the equivalent number of seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    pub text: String,
    pub seconds: u64,
}

impl Timestamp {
    /// Build from regex-matched `H:MM:SS` or `M:SS` text.
    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            seconds: Self::to_seconds(text),
        }
    }

    /// `1:10:05` -> 4205. Fields must be numeric, which the matching
    /// pattern guarantees.
    pub fn to_seconds(tstamp: &str) -> u64 {
        let mut sec = 0;
        for n in tstamp.split(':').map(|s| s.parse::<u64>().unwrap()) {
            sec = 60 * sec + n;
        }
        sec
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
