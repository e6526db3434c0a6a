//! wfo-runner: command-line front end for the workforce optimizer.
//!
//! Usage:
//!   wfo-runner --input teams.csv
//!   wfo-runner --input teams.json --json
//!   cat teams.csv | wfo-runner --format csv

mod decode;
mod report;

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::{self, Read};
use workforce_core::pipeline;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }

    let input_path = flag_value(&args, "--input");
    let format_arg = flag_value(&args, "--format").unwrap_or("auto");
    let json_output = args.iter().any(|a| a == "--json");

    let text = match input_path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading input file '{path}'"))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let format = decode::resolve_format(format_arg, &text)?;
    let records = decode::decode(&text, format)?;
    log::info!("decoded {} raw records ({format:?})", records.len());

    let batch = pipeline::run(&records);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&batch)?);
    } else {
        print!("{}", report::render(&batch));
    }

    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn print_usage() {
    println!("wfo-runner — support-team staffing analysis");
    println!();
    println!("USAGE:");
    println!("  wfo-runner [--input FILE] [--format csv|json|auto] [--json]");
    println!();
    println!("Reads CSV or JSON staffing records (stdin when --input is absent),");
    println!("runs the validation-and-scoring pipeline, and prints a markdown");
    println!("report. --json emits the structured batch result instead.");
}
