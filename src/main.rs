// Commit Miner - Free and Open Source Software Statement
//
// File: src/main.rs
// Version: 1.0.0
//
// Command-line entry point: miner TARGET THREADS TIMEOUT < commit > mined

use anyhow::Context;
use clap::Parser;
use commit_miner::core::types::{EXIT_FAULT, EXIT_INVOCATION, EXIT_NO_SOLUTION};
use commit_miner::utils::io::{load_payload, write_commit};
use commit_miner::utils::logging::init_logging;
use commit_miner::{
    core::types::Args, CpuMiner, MinerConfig, MinerError, SearchOutcome, TargetDigest,
};
use log::{error, info};
use std::io;
use std::process;

const LOG_TARGET: &str = "commit_miner::main";

fn main() {
    let args = Args::parse();

    // Validate arguments
    if let Err(err) = args.validate() {
        eprintln!("❌ Error: {}", err);
        process::exit(EXIT_INVOCATION);
    }

    let code = match run(&args) {
        Ok(code) => code,
        Err(err) => {
            let code = exit_code_for(&err);
            if log::log_enabled!(log::Level::Error) {
                error!(target: LOG_TARGET, "❌ {:#}", err);
            } else {
                eprintln!("❌ Error: {:#}", err);
            }
            code
        }
    };
    process::exit(code);
}

fn run(args: &Args) -> anyhow::Result<i32> {
    init_logging(args.log_level, args.log_config.as_deref())
        .context("Could not set up logging")?;

    let target = TargetDigest::from_hex(&args.target)?;
    let payload = load_payload(args.input.as_deref())?;

    let config = MinerConfig::new(target, args.thread_count(), args.timeout_duration());
    let report = CpuMiner::new(config).run(&payload)?;

    match report.outcome {
        SearchOutcome::Solved(solution) => {
            info!(target: LOG_TARGET,
                "✅ Mined commit {} with nonce {:?}",
                solution.digest_hex(),
                solution.nonce.to_string()
            );
            write_commit(io::stdout().lock(), &payload, &solution.nonce)
                .context("Failed to write the mined commit to stdout")?;
            Ok(0)
        }
        SearchOutcome::Exhausted => Ok(EXIT_NO_SOLUTION),
    }
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<MinerError>() {
        Some(e) if e.is_invocation_error() => EXIT_INVOCATION,
        _ => EXIT_FAULT,
    }
}

// Changelog:
// - v1.0.0 (2026-10-17): Initial release.
//   - Exit codes: 0 solved, 1 no solution, 2 invocation error, 3 fault.
