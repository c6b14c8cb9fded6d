use crate::{
    my_regex,
    types::{Timestamp, Track, Tracklist},
};

/// The outcome of parsing a whole text block. Lines that matched no rule
/// are kept verbatim so the caller can report them.
#[derive(Debug)]
pub struct Parsed {
    pub tracks: Tracklist,
    pub skipped: Vec<String>,
}

/// Parse a song list, one track per non-blank line.
///
/// Each line is expected to start with a `H:MM:SS` or `M:SS` timestamp,
/// followed by a title and an optional artist. Blank lines produce
/// nothing; malformed lines are skipped and counted, never an error.
pub fn parse_lines(text: &str) -> Parsed {
    let mut tracks = Vec::new();
    let mut skipped = Vec::new();

    for raw in text.lines() {
        let line = normalize_widths(raw);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Some(track) => tracks.push(track),
            None => skipped.push(raw.to_owned()),
        }
    }

    Parsed {
        tracks: Tracklist::new(tracks),
        skipped,
    }
}

fn parse_line(line: &str) -> Option<Track> {
    let cap = my_regex::timestamp_line().captures(line)?;
    let time = cap.name("time").unwrap().as_str();
    let rest = cap.name("rest").map_or("", |m| m.as_str());

    let TitleArtist { title, artist } = split_rest(rest);
    if title.is_empty() {
        // A timestamp without any recoverable title is no track
        return None;
    }

    Some(Track {
        timestamp: Timestamp::from_text(time),
        title,
        artist,
    })
}

/// A split of the free text that follows the timestamp.
#[derive(Debug, PartialEq, Eq)]
struct TitleArtist {
    title: String,
    artist: Option<String>,
}

/// Try the split rules in priority order: a closed quoted span wins over
/// a delimiter, and a remainder with neither is all title.
fn split_rest(rest: &str) -> TitleArtist {
    quoted_title(rest)
        .or_else(|| delimiter_split(rest))
        .unwrap_or_else(|| TitleArtist {
            title: collapse_ws(rest),
            artist: None,
        })
}

/// `アーティスト「曲名」` style: the first closed quote pair holds the
/// title, everything around it is the artist. An unterminated quote mark
/// does not match and falls through to the delimiter rule.
fn quoted_title(rest: &str) -> Option<TitleArtist> {
    let cap = my_regex::quoted_span().captures(rest)?;
    let span = cap.get(0).unwrap();
    let inner = cap.iter().skip(1).flatten().next().unwrap();

    let outside = format!("{}{}", &rest[..span.start()], &rest[span.end()..]);
    let artist = trim_separator_edges(&outside);

    Some(TitleArtist {
        title: collapse_ws(inner.as_str()),
        artist: (!artist.is_empty()).then_some(artist),
    })
}

/// `Title - Artist`, `Title/Artist`, `Title by Artist`.
/// The leftmost delimiter wins.
fn delimiter_split(rest: &str) -> Option<TitleArtist> {
    let m = my_regex::delimiter().find(rest)?;
    let artist = collapse_ws(&rest[m.end()..]);

    Some(TitleArtist {
        title: collapse_ws(&rest[..m.start()]),
        artist: (!artist.is_empty()).then_some(artist),
    })
}

/// Strip the leftover separator punctuation around an artist name,
/// e.g. the ` by ` in `"Song" by Artist` or the dash in `Artist - 「曲」`.
fn trim_separator_edges(s: &str) -> String {
    let s = s.trim_matches(|c: char| c.is_whitespace() || c == '-' || c == '/');
    let s = my_regex::artist_edge_by().replace_all(s, "");
    collapse_ws(&s)
}

/// Fold the full-width characters common in Japanese song lists into
/// their half-width equivalents. Idempotent.
///
/// The katakana prolonged sound mark is left alone on purpose: folding it
/// to a hyphen would mangle ordinary words such as アーティスト.
pub(crate) fn normalize_widths(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{3000}' => ' ',
            '／' => '/',
            '–' | '—' | '―' => '-',
            c => c,
        })
        .collect()
}

fn collapse_ws(s: &str) -> String {
    my_regex::whitespace_run()
        .replace_all(s.trim(), " ")
        .into_owned()
}
