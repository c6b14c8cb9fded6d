use std::{fmt::Display, ops::Deref};

use super::Timestamp;

/// One parsed line of the song list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub timestamp: Timestamp,
    pub title: String,
    pub artist: Option<String>,
}

impl Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>8}  {}", self.timestamp, self.title)?;
        if let Some(artist) = &self.artist {
            write!(f, " ({artist})")?;
        }
        Ok(())
    }
}

/// The tracks of a whole list, in input order.
#[derive(Debug)]
pub struct Tracklist(Vec<Track>);

impl Tracklist {
    pub fn new(data: Vec<Track>) -> Self {
        Self(data)
    }
}

impl Deref for Tracklist {
    type Target = Vec<Track>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Tracklist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[")?;
        for v in self.0.iter() {
            writeln!(f, "\t{v}")?;
        }
        writeln!(f, "]")?;
        Ok(())
    }
}
