use anyhow::Context;
use clap::Parser;
use perft_validator::generate::perft;
use perft_validator::oracle::{StandardOracle, START_FEN};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = String::from(START_FEN))]
    fen: String,

    #[arg(short, long, default_value_t = 4)]
    depth: u8,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    println!("Running perft on FEN: '{}' at depth {}", args.fen, args.depth);

    let oracle = StandardOracle::new();
    let start = std::time::Instant::now();
    let nodes = perft(&oracle, &args.fen, args.depth).context("perft failed")?;
    let duration = start.elapsed();

    println!(
        "perft({}) = {} nodes ({} ms)",
        args.depth,
        nodes,
        duration.as_millis()
    );
    Ok(())
}
