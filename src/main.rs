//! Money Split CLI
//!
//! Reads who paid what from a CSV file and prints the transfers that even
//! everyone out.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- payments.csv > transfers.csv
//! cargo run -- payments.csv --summary > summary.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `info` or `debug` to control logging verbosity

use log::error;
use money_split::{report, read_payments, settle, Result, SplitError};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        if e.is_internal() {
            error!("Settlement defect: {}", e);
        }
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let summary = args.iter().any(|arg| arg == "--summary");
    let input_path = args
        .iter()
        .find(|arg| !arg.starts_with("--"))
        .ok_or(SplitError::MissingArgument)?;

    let file = File::open(input_path)?;
    let payments = read_payments(BufReader::new(file))?;
    let result = settle(payments)?;

    report::log_results(&result);

    let stdout = io::stdout();
    let handle = stdout.lock();
    if summary {
        report::write_summary(&result, handle)
    } else {
        report::write_transfers(&result, handle)
    }
}
