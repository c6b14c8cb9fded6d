use std::path::Path;

use clap::ValueEnum;

/// The serialization format of the output table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Json,
}

impl Format {
    /// Parse the path file extension.
    /// Return None in case of no or unknown extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext {
                "csv" => Some(Self::Csv),
                "json" => Some(Self::Json),
                _ => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_format_from_extension() {
        assert_eq!(Format::from_path("songs.csv"), Some(Format::Csv));
        assert_eq!(Format::from_path("out/songs.json"), Some(Format::Json));
        assert_eq!(Format::from_path("songs.txt"), None);
        assert_eq!(Format::from_path("songs"), None);
    }
}
