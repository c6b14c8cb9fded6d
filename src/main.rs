mod cli;
mod export;
mod io;
mod logging;
mod my_regex;
mod parser;
mod result;
mod types;

use clap::Parser;
use tracing::{debug, info, warn, Level};

use crate::{
    cli::Args,
    parser::Parsed,
    result::{Error, Result},
    types::{Format, VideoId},
};

fn main() -> miette::Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    logging::init_logging(level)?;

    run(&args).map_err(miette::Report::from)
}

fn run(args: &Args) -> Result<()> {
    let text = io::read_input(&args.input)
        .map_err(|e| e.wrap_err_with(|| format!("Could not read {}", args.input.display())))?;

    let Parsed { tracks, skipped } = parser::parse_lines(&text);
    info!(
        "{} tracks parsed, {} lines skipped",
        tracks.len(),
        skipped.len()
    );
    for line in &skipped {
        debug!("Skipped line: {line}");
    }

    let video_id = args.url.as_deref().and_then(VideoId::extract);
    match (&args.url, &video_id) {
        (Some(url), None) => warn!("No video id found in {url}, deep links will be left empty"),
        (_, Some(id)) => debug!("Video id: {id}"),
        _ => {}
    }

    if tracks.is_empty() {
        return Err(Error::EmptyTracklist);
    }

    if args.preview {
        info!("Parsed tracklist: {tracks}");
    }

    let format = args
        .format
        .or_else(|| args.out.as_deref().and_then(Format::from_path))
        .unwrap_or(Format::Csv);

    let bytes = match format {
        Format::Csv => export::to_csv(&tracks, video_id.as_ref())?,
        Format::Json => export::to_json(&tracks, video_id.as_ref())?,
    };

    io::write_output(args.out.as_deref(), &bytes)?;
    if let Some(out) = &args.out {
        info!("Wrote {} tracks to {}", tracks.len(), out.display());
    }

    Ok(())
}
