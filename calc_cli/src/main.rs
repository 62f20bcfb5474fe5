//! CLI entry point for the damage calculator

use calc_core::prelude::*;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "calc")]
#[command(version)]
#[command(about = "Expected-damage calculator and loadout optimizer", long_about = None)]
struct Cli {
    /// Path to a TOML catalog file; defaults to the builtin item table
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a loadout into a damage report
    Calculate {
        /// Loadout JSON file, or '-' for stdin
        #[arg(short, long, default_value = "-")]
        input: String,
    },
    /// Search equipment subsets for the best-scoring loadouts
    Optimize {
        /// Request JSON file, or '-' for stdin
        #[arg(short, long, default_value = "-")]
        input: String,

        /// Partition the search across worker threads
        #[arg(long, default_value = "false")]
        parallel: bool,
    },
    /// List the item catalog
    Items,
}

/// Body of an optimize request: the base loadout plus search parameters
#[derive(Debug, Deserialize)]
struct OptimizeBody {
    base: LoadoutConfig,
    #[serde(flatten)]
    request: OptimizeRequest,
}

#[derive(Serialize)]
struct Success<T: Serialize> {
    success: bool,
    #[serde(flatten)]
    body: T,
}

#[derive(Serialize)]
struct Failure {
    success: bool,
    error: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => match ItemCatalog::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Error loading catalog: {e}");
                std::process::exit(1);
            }
        },
        None => ItemCatalog::with_defaults(),
    };

    match cli.command {
        Command::Calculate { input } => run_calculate(&catalog, &input),
        Command::Optimize { input, parallel } => run_optimize(&catalog, &input, parallel),
        Command::Items => run_items(&catalog),
    }
}

fn run_calculate(catalog: &ItemCatalog, input: &str) {
    let raw = read_input(input);
    let resolver = DamageResolver::new(catalog);

    let result = serde_json::from_str::<LoadoutConfig>(&raw)
        .map_err(|e| e.to_string())
        .and_then(|config| resolver.resolve(&config).map_err(|e| e.to_string()));
    print_envelope(result);
}

fn run_optimize(catalog: &ItemCatalog, input: &str, parallel: bool) {
    let raw = read_input(input);
    let resolver = DamageResolver::new(catalog);
    let control = SearchControl {
        parallel,
        ..Default::default()
    };

    let result = serde_json::from_str::<OptimizeBody>(&raw)
        .map_err(|e| e.to_string())
        .and_then(|body| {
            resolver
                .optimize_with(&body.base, &body.request, &control)
                .map_err(|e| e.to_string())
        });
    print_envelope(result);
}

fn run_items(catalog: &ItemCatalog) {
    let output = serde_json::json!({
        "success": true,
        "items": catalog.items(),
    });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

/// Read from the given file, or stdin for '-'
fn read_input(input: &str) -> String {
    let result = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map(|_| buffer)
    } else {
        std::fs::read_to_string(input)
    };
    match result {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Error reading input: {e}");
            std::process::exit(1);
        }
    }
}

/// Print the success/failure JSON envelope; malformed requests are reported
/// in-band, not as a crash
fn print_envelope<T: Serialize>(result: Result<T, String>) {
    match result {
        Ok(body) => {
            let envelope = Success {
                success: true,
                body,
            };
            println!("{}", serde_json::to_string_pretty(&envelope).unwrap());
        }
        Err(error) => {
            let envelope = Failure {
                success: false,
                error,
            };
            println!("{}", serde_json::to_string_pretty(&envelope).unwrap());
        }
    }
}
