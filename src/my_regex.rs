use std::sync::OnceLock;

use regex::Regex;

// Every pattern of the crate lives here, assembled from small named
// fragments so each rule stays readable on its own.

/// A leading `H:MM:SS` or `M:SS` timestamp
macro_rules! tstamp {
    () => {
        r"(?P<time>(?:[0-9]{1,2}:)?[0-9]{1,2}:[0-9]{2})"
    };
}
/// Whatever follows the timestamp, separated by required whitespace
macro_rules! rest {
    () => {
        r"(?:\s+(?P<rest>.*))?"
    };
}
/// A whole song-list line: the timestamp, then the title/artist text.
/// Example: "1:10:05 アーティスト名C「楽曲名C」"
const TIMESTAMP_LINE: &str = concat!("^", tstamp!(), rest!(), "$");

/// A span enclosed in one pair of quote marks.
/// One branch per pair so a stray opening mark cannot close another pair.
macro_rules! quoted {
    ($open:literal, $close:literal) => {
        concat!($open, "([^", $close, "]*)", $close)
    };
}
const QUOTED_SPAN: &str = concat!(
    quoted!("「", "」"),
    "|",
    quoted!("『", "』"),
    "|",
    quoted!("“", "”"),
    "|",
    "\"([^\"]*)\""
);

/// A title/artist delimiter: a spaced hyphen (bare in-title hyphens must
/// survive), a slash, or a standalone `by`
const DELIMITER: &str = r"\s-\s|/|(?i:\bby\b)";

/// A leftover `by` token at either edge of an artist name,
/// e.g. what remains of `"Song" by Artist` once the quoted span is cut out
const ARTIST_EDGE_BY: &str = r"(?i)^by\s+|\s+by$|^by$";

/// A run of whitespace, collapsed to a single space on output
const WHITESPACE_RUN: &str = r"\s+";

/// The 11 character id YouTube assigns to a video
macro_rules! video_id {
    () => {
        r"(?P<id>[A-Za-z0-9_-]{11})"
    };
}
/// Ids are exactly 11 characters; whatever follows must not extend the run,
/// so trailing query parameters cannot leak into the id
macro_rules! id_end {
    () => {
        r"(?:[^A-Za-z0-9_-]|$)"
    };
}
/// Watch URL: "youtube.com/watch?v=<id>", possibly with other parameters
const WATCH_URL: &str = concat!(r"[?&]v=", video_id!(), id_end!());
/// Shortened host form: "youtu.be/<id>"
const SHORT_URL: &str = concat!(r"youtu\.be/", video_id!(), id_end!());
/// Shorts form: ".../shorts/<id>"
const SHORTS_URL: &str = concat!(r"/shorts/", video_id!(), id_end!());
/// Embed form: ".../embed/<id>"
const EMBED_URL: &str = concat!(r"/embed/", video_id!(), id_end!());

static TIMESTAMP_LINE_RE: OnceLock<Regex> = OnceLock::new();
static QUOTED_SPAN_RE: OnceLock<Regex> = OnceLock::new();
static DELIMITER_RE: OnceLock<Regex> = OnceLock::new();
static ARTIST_EDGE_BY_RE: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_RUN_RE: OnceLock<Regex> = OnceLock::new();
static VIDEO_ID_RE_LIST: OnceLock<[Regex; 4]> = OnceLock::new();

pub fn timestamp_line() -> &'static Regex {
    TIMESTAMP_LINE_RE.get_or_init(|| Regex::new(TIMESTAMP_LINE).unwrap())
}

pub fn quoted_span() -> &'static Regex {
    QUOTED_SPAN_RE.get_or_init(|| Regex::new(QUOTED_SPAN).unwrap())
}

pub fn delimiter() -> &'static Regex {
    DELIMITER_RE.get_or_init(|| Regex::new(DELIMITER).unwrap())
}

pub fn artist_edge_by() -> &'static Regex {
    ARTIST_EDGE_BY_RE.get_or_init(|| Regex::new(ARTIST_EDGE_BY).unwrap())
}

pub fn whitespace_run() -> &'static Regex {
    WHITESPACE_RUN_RE.get_or_init(|| Regex::new(WHITESPACE_RUN).unwrap())
}

/// The known URL shapes, tried in order until one matches
pub fn video_id_patterns() -> &'static [Regex] {
    VIDEO_ID_RE_LIST.get_or_init(|| {
        [WATCH_URL, SHORT_URL, SHORTS_URL, EMBED_URL].map(|p| Regex::new(p).unwrap())
    })
}
