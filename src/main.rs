use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use tracing::Level;

use imgmeta::batch::{self, InputKind, ProbeOptions};
use imgmeta::ImageFormat;

#[derive(Clone, Copy, ValueEnum)]
enum TargetKind {
    /// Targets are image files
    #[value(alias = "file")]
    Files,
    /// Targets are directories of images
    #[value(alias = "dir")]
    Dirs,
}

impl From<TargetKind> for InputKind {
    fn from(kind: TargetKind) -> Self {
        match kind {
            TargetKind::Files => InputKind::Files,
            TargetKind::Dirs => InputKind::Dirs,
        }
    }
}

#[derive(Parser)]
#[command(name = "imgmeta")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print format and pixel dimensions of JPEG, PNG, GIF and BMP images")]
struct Cli {
    #[arg(value_enum)]
    kind: TargetKind,

    #[arg(required = true)]
    targets: Vec<PathBuf>,

    /// Exclude invalid files instead of failing
    #[arg(long)]
    exclude_invalid_files: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Probe files one at a time
    #[arg(long)]
    sequential: bool,

    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut options = ProbeOptions::new().with_skip_invalid(cli.exclude_invalid_files);
    if let Some(threads) = cli.threads {
        options = options.with_thread_count(threads);
    }
    if cli.sequential {
        options = options.sequential();
    }

    let inputs = batch::collect_inputs(&cli.targets, cli.kind.into(), &options)
        .context("Failed to collect input files")?;
    let report = batch::probe_all(&inputs.files, &options).context("Failed to probe images")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for entry in &report.entries {
        println!(
            "{}\t{}\t{}x{}",
            entry.path.display(),
            entry.metadata.format(),
            entry.metadata.width(),
            entry.metadata.height()
        );
    }

    tracing::info!(
        "JPEG: {}, PNG: {}, GIF: {}, BMP: {}, excluded: {}",
        report.count(ImageFormat::Jpeg),
        report.count(ImageFormat::Png),
        report.count(ImageFormat::Gif),
        report.count(ImageFormat::Bmp),
        report.skipped.len() + inputs.rejected.len()
    );

    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
