//! Writes a reference successor log that the validator accepts as correct.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use perft_validator::config::DEFAULT_LOG_PATH;
use perft_validator::generate::{reference_records, write_log};
use perft_validator::oracle::{StandardOracle, START_FEN};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = String::from(START_FEN))]
    fen: String,

    /// Plies to expand before emitting records
    #[arg(short, long, default_value_t = 1)]
    depth: u8,

    #[arg(short, long, default_value = DEFAULT_LOG_PATH)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let records = reference_records(&StandardOracle::new(), &args.fen, args.depth)
        .context("failed to expand root position")?;

    let file = File::create(&args.out)
        .with_context(|| format!("failed to create {}", args.out.display()))?;
    let mut out = BufWriter::new(file);
    write_log(&mut out, &records).context("failed to write log")?;
    out.flush().context("failed to flush log")?;

    println!("Wrote {} records to {}", records.len(), args.out.display());
    Ok(())
}
