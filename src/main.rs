//! perft-validator entry point: checks a successor log against the reference oracle.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use perft_validator::config::DEFAULT_LOG_PATH;
use perft_validator::{report, MalformedPolicy, StandardOracle, ValidatorConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Position log to validate
    #[arg(default_value = DEFAULT_LOG_PATH)]
    log: PathBuf,

    /// What to do with an origin position the oracle cannot parse
    #[arg(long, value_enum, default_value_t = MalformedPolicy::Skip)]
    on_malformed: MalformedPolicy,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let args = Args::parse();
    let config = ValidatorConfig::new(args.log).with_policy(args.on_malformed);

    let summary = perft_validator::run(&config, &StandardOracle::new())
        .with_context(|| format!("validation of {} failed", config.log_path.display()))?;

    let mut stdout = std::io::stdout().lock();
    report::write_report(&mut stdout, &summary).context("failed to write report")?;
    stdout.flush().context("failed to flush report")?;

    if let Some(index) = summary.aborted_at {
        anyhow::bail!("run aborted at malformed position {}", index);
    }

    if summary.all_valid() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
