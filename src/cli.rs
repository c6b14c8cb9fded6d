use std::path::PathBuf;

use clap::Parser;

use crate::types::Format;

macro_rules! arg_env {
    ($v:literal) => {
        concat!("TRACKSHEET_", $v)
    };
}

/// Turn a YouTube timestamp song list into a spreadsheet-ready table.
/// Parses `M:SS Title - Artist` style lines, resolves the video id from
/// the URL, and writes a UTF-8 BOM CSV that opens cleanly in Excel.
#[derive(Parser, Debug)]
pub struct Args {
    /// The file containing the timestamp lines, or `-` for stdin
    #[clap(default_value = "-", env=arg_env!("INPUT"))]
    pub input: PathBuf,

    /// The URL of the video the timestamps belong to.
    /// Used to build per-song deep links; without it (or when no video id
    /// can be found in it) the link column is left empty.
    #[clap(long, env=arg_env!("URL"))]
    pub url: Option<String>,

    /// The path of the output file. Prints to stdout when not set
    #[clap(long, short, env=arg_env!("OUT"))]
    pub out: Option<PathBuf>,

    /// The output format. Defaults to the `--out` file extension, or CSV
    #[clap(long, value_enum, env=arg_env!("FORMAT"))]
    pub format: Option<Format>,

    /// Print the parsed tracklist before writing the output
    #[clap(long, env=arg_env!("PREVIEW"))]
    pub preview: bool,

    /// Also log the lines that could not be parsed
    #[clap(long, env=arg_env!("VERBOSE"))]
    pub verbose: bool,
}
