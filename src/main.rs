// allocreplay: allocator event log → animated occupancy timeline

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use allocreplay::encode::replay_to_gif;
use allocreplay::timeline::progress::{NullProgress, TerminalProgress};
use allocreplay::Replay;

#[derive(Debug, Parser)]
#[command(about = "Render an allocator replay log as an animated GIF, one frame per event")]
struct Args {
    /// Replay log with one `+ offset size` or `- offset size` event per line
    #[arg(short = 'i', long)]
    input_replay_file: PathBuf,

    /// Where to write the animation
    #[arg(short = 'o', long)]
    output_gif: PathBuf,

    /// Do not print the progress line
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let log = fs::read_to_string(&args.input_replay_file).with_context(|| {
        format!(
            "failed to read replay log {}",
            args.input_replay_file.display()
        )
    })?;

    let replay = Replay::from_log(&log);
    if replay.is_empty() {
        warn!(
            input = %args.input_replay_file.display(),
            "no events found, nothing written"
        );
        return Ok(());
    }

    let file = File::create(&args.output_gif)
        .with_context(|| format!("failed to create {}", args.output_gif.display()))?;
    let out = BufWriter::new(file);

    let written = if args.quiet {
        replay_to_gif(replay, out, NullProgress)
    } else {
        replay_to_gif(replay, out, TerminalProgress::stdout())
    }
    .with_context(|| format!("failed to write {}", args.output_gif.display()))?;

    eprintln!(
        "Wrote {} frames to {}",
        written,
        args.output_gif.display()
    );
    Ok(())
}
