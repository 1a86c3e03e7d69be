//! Karnaugh-map simplifier - Command Line Interface
//!
//! Reads recognizer output (a JSON array of detections) and prints the
//! simplified expression.

use clap::Parser;
use kmap_vision::{analyze, Analysis, Detection, KmapConfig, KmapError, NothingDetected};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "kmap")]
#[command(about = "Simplify a recognized Karnaugh map", long_about = None)]
#[command(version)]
struct Args {
    /// Detections JSON file (reads stdin if not specified)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Pixel distance within which cells share a row or column
    #[arg(short = 't', long = "tolerance", default_value_t = kmap_vision::DEFAULT_CLUSTER_TOLERANCE)]
    tolerance: f64,

    /// Print the full solution as JSON
    #[arg(long = "json")]
    json: bool,

    /// Print the recognized grid and groups to stderr
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn read_detections(input: Option<&PathBuf>) -> Result<Vec<Detection>, KmapError> {
    match input {
        Some(path) => Detection::from_json_file(path),
        None => Detection::from_json_reader(io::stdin().lock()),
    }
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let detections = match read_detections(args.input.as_ref()) {
        Ok(detections) => detections,
        Err(e) => {
            match &args.input {
                Some(path) => eprintln!("Error reading detections '{}': {}", path.display(), e),
                None => eprintln!("Error reading detections from stdin: {}", e),
            }
            process::exit(1);
        }
    };

    let config = KmapConfig::new().with_tolerance(args.tolerance);

    let solution = match analyze(&detections, &config) {
        Ok(Analysis::Solved(solution)) => solution,
        Ok(Analysis::NothingDetected(reason)) => {
            match reason {
                NothingDetected::NoText => eprintln!("No text detected."),
                NothingDetected::NoRelevantElements => {
                    eprintln!("No relevant elements ('1' or 'X') detected.")
                }
            }
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if args.summary {
        let encoding = solution.encoding();
        eprintln!(
            "Grid: {}x{} (rows: {:?}, columns: {:?})",
            solution.grid().rows(),
            solution.grid().cols(),
            encoding.row_variables(),
            encoding.col_variables()
        );
        eprintln!("{}", solution.grid());
        eprintln!();
        for (group, term) in solution.groups().iter().zip(solution.terms()) {
            eprintln!(
                "  {}x{} at ({}, {}): {}",
                group.height,
                group.width,
                group.row,
                group.col,
                if term.is_tautology() { "1".to_string() } else { term.to_string() }
            );
        }
        eprintln!();
    }

    if args.json {
        match serde_json::to_string_pretty(&solution.report()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing solution: {}", e);
                process::exit(1);
            }
        }
    } else if solution.expression().is_empty() {
        eprintln!("No terms.");
    } else {
        println!("{}", solution.expression());
    }
}
