use miette::IntoDiagnostic;
use serde::Serialize;

use crate::{
    result::Result,
    types::{Track, VideoId},
};

/// Spreadsheet software defaults to the local code page unless the stream
/// carries a BOM, which garbles any non-ASCII title.
pub const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// One output row. Field order is the column order.
#[derive(Debug, Serialize)]
struct Row<'a> {
    timestamp: &'a str,
    seconds: u64,
    title: &'a str,
    artist: Option<&'a str>,
    link: Option<String>,
}

fn rows<'a>(tracks: &'a [Track], video_id: Option<&VideoId>) -> Vec<Row<'a>> {
    tracks
        .iter()
        .map(|track| Row {
            timestamp: &track.timestamp.text,
            seconds: track.timestamp.seconds,
            title: &track.title,
            artist: track.artist.as_deref(),
            link: video_id.map(|id| id.deep_link(track.timestamp.seconds)),
        })
        .collect()
}

/// Serialize the tracklist as a BOM-prefixed CSV table.
pub fn to_csv(tracks: &[Track], video_id: Option<&VideoId>) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(UTF8_BOM.to_vec());
    for row in rows(tracks, video_id) {
        writer.serialize(row).into_diagnostic()?;
    }
    writer.into_inner().into_diagnostic().map_err(Into::into)
}

/// Serialize the tracklist as pretty-printed JSON.
pub fn to_json(tracks: &[Track], video_id: Option<&VideoId>) -> Result<Vec<u8>> {
    let mut buf = serde_json::to_vec_pretty(&rows(tracks, video_id)).into_diagnostic()?;
    buf.push(b'\n');
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use crate::types::Timestamp;

    use super::*;

    fn track(time: &str, title: &str, artist: Option<&str>) -> Track {
        Track {
            timestamp: Timestamp::from_text(time),
            title: title.to_owned(),
            artist: artist.map(str::to_owned),
        }
    }

    #[test]
    fn csv_starts_with_utf8_bom() {
        let bytes = to_csv(&[track("0:35", "曲", None)], None).unwrap();
        assert_eq!(&bytes[..3], UTF8_BOM);
    }

    #[test]
    fn csv_contains_deep_links_when_id_is_known() {
        let vid = VideoId::extract("https://youtu.be/dQw4w9WgXcQ").unwrap();
        let bytes = to_csv(&[track("0:35", "曲", Some("歌手"))], Some(&vid)).unwrap();
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();

        assert!(text.starts_with("timestamp,seconds,title,artist,link"));
        assert!(text.contains("0:35,35,曲,歌手,https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=35s"));
    }

    #[test]
    fn csv_link_column_is_empty_without_an_id() {
        let bytes = to_csv(&[track("0:35", "曲", None)], None).unwrap();
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        assert!(text.lines().nth(1).unwrap().ends_with(",,"));
    }

    #[test]
    fn csv_round_trips_tricky_fields() {
        let tracks = [
            track("0:10", "A, \"quoted\" title", Some("Artist - X")),
            track("1:10:05", "Multi\nline", None),
        ];
        let bytes = to_csv(&tracks, None).unwrap();

        let mut reader = csv::Reader::from_reader(&bytes[UTF8_BOM.len()..]);
        let records: Vec<csv::StringRecord> =
            reader.records().collect::<std::result::Result<_, _>>().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][0], "0:10");
        assert_eq!(&records[0][2], "A, \"quoted\" title");
        assert_eq!(&records[0][3], "Artist - X");
        assert_eq!(&records[1][2], "Multi\nline");
        assert_eq!(&records[1][3], "");
    }

    #[test]
    fn json_lists_every_track() {
        let vid = VideoId::extract("https://youtu.be/dQw4w9WgXcQ").unwrap();
        let bytes = to_json(&[track("6:23", "曲B", Some("歌手B"))], Some(&vid)).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value[0]["timestamp"], "6:23");
        assert_eq!(value[0]["seconds"], 383);
        assert_eq!(value[0]["title"], "曲B");
        assert_eq!(value[0]["artist"], "歌手B");
        assert_eq!(
            value[0]["link"],
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=383s"
        );
    }
}
