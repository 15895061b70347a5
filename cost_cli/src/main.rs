//! # Costing CLI Application
//!
//! Terminal front end for `cost_core`. Prompts for batch or per-piece
//! inputs (or reads them from a JSON file), runs the engine and prints a
//! report. Validation warnings are shown but never stop a calculation.
//!
//! ## Usage
//!
//! ```text
//! cost_cli batch
//! cost_cli per-piece
//! cost_cli --config display.json --json eval inputs.json
//! cost_cli fields
//! ```

mod config;
mod logging;
mod prompt;
mod report;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cost_core::calculations::CostReport;
use cost_core::errors::CalcResult;
use cost_core::fields::{InputFieldConfig, BATCH_INPUT_FIELDS, PERPIECE_COST_FIELDS, PROFIT_FIELD, QUANTITY_FIELD};
use cost_core::inputs::CostInputs;
use cost_core::settings::DisplayConfig;
use serde::Serialize;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "cost_cli")]
#[command(author, version, about = "Manufacturing cost calculator", long_about = None)]
struct Cli {
    /// Display settings file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Also print the inputs and report as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter batch totals and get per-piece costs
    Batch,
    /// Enter per-piece costs and get batch totals
    PerPiece,
    /// Evaluate a JSON inputs document (`-` reads stdin)
    Eval {
        /// Path to the inputs file
        input: PathBuf,
    },
    /// List the input fields of both forms
    Fields,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    inputs: &'a CostInputs,
    report: &'a CostReport,
}

#[derive(Serialize)]
struct FieldsOutput {
    batch: &'static [InputFieldConfig],
    per_piece: &'static [InputFieldConfig],
    profit: &'static InputFieldConfig,
    quantity: &'static InputFieldConfig,
}

fn main() {
    logging::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!(code = e.error_code(), "{}", e);
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CalcResult<()> {
    let display = config::load_display_config(cli.config.as_deref())?;

    let inputs = match cli.command {
        Commands::Fields => {
            print!("{}", report::render_fields());
            if cli.json {
                let output = FieldsOutput {
                    batch: &BATCH_INPUT_FIELDS,
                    per_piece: &PERPIECE_COST_FIELDS,
                    profit: &PROFIT_FIELD,
                    quantity: &QUANTITY_FIELD,
                };
                println!();
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            return Ok(());
        }
        Commands::Batch => {
            let mut stdout = io::stdout();
            CostInputs::Batch(prompt::collect_batch(&mut io::stdin().lock(), &mut stdout)?)
        }
        Commands::PerPiece => {
            let mut stdout = io::stdout();
            CostInputs::PerPiece(prompt::collect_per_piece(&mut io::stdin().lock(), &mut stdout)?)
        }
        Commands::Eval { input } => config::load_inputs(&input)?,
    };

    print_report(&inputs, &display, cli.json)
}

fn print_report(inputs: &CostInputs, display: &DisplayConfig, json: bool) -> CalcResult<()> {
    let report = cost_core::calculate(inputs);
    info!(mode = %report.mode, warnings = report.warnings.len(), "calculated");

    println!();
    print!("{}", report::render(inputs, &report, display));

    if json {
        let output = JsonOutput { inputs, report: &report };
        println!();
        println!("{}", serde_json::to_string_pretty(&output)?);
    }
    Ok(())
}
