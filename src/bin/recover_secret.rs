use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use shamir_recover::{samples::Sample, Report, ShareDocument};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "recover_secret")]
#[command(about = "Recover f(0) from Shamir shares by exact Lagrange interpolation", long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["file", "sample"])))]
struct Args {
    /// Share document (JSON with "keys" and one entry per share)
    file: Option<PathBuf>,

    /// Use a built-in share set instead of a file
    #[arg(short, long, value_enum)]
    sample: Option<Sample>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
}

fn load_document(args: &Args) -> Result<ShareDocument> {
    if let Some(sample) = args.sample {
        info!(?sample, "using built-in sample");
        return Ok(sample.document());
    }

    let path = args.file.as_ref().context("no input given")?;
    let json = fs::read_to_string(path).with_context(|| format!("read {:?}", path))?;
    ShareDocument::from_json(&json).with_context(|| format!("parse {:?}", path))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let document = load_document(&args)?;
    let share_set = document.into_share_set()?;
    info!(
        k = share_set.threshold(),
        available = share_set.shares().len(),
        "resolved share set"
    );
    let reconstruction = share_set.reconstruct()?;

    println!("{}", Report::new(&reconstruction));
    Ok(())
}
