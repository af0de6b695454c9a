//! CLI command definitions for reckon.
//!
//! The binary is a thin wrapper over the library: `eval` runs a batch of
//! operation specs through a single [`Calculator`] and optionally saves
//! the resulting history file, `show` prints a previously saved file.

use anyhow::{anyhow, bail, Context};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use crate::calculator::Calculator;
use crate::history::Operation;
use crate::store::HistoryStore;

/// Calculator with structured operation history and text export.
#[derive(Parser)]
#[command(name = "reckon")]
#[command(about = "Evaluate calculator operations and manage their history")]
#[command(version)]
#[command(
    long_about = "reckon evaluates calculator operations and records each one in a history log.\n\nExample usage:\n  reckon eval add,2,3 divide,1,0 circle-area,2 --history history.txt\n  reckon show --history history.txt"
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Evaluate operation specs through a single calculator.
    Eval(EvalArgs),

    /// Print a previously saved history file.
    Show(ShowArgs),
}

/// Arguments for `reckon eval`.
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Operation specs in the form "op,x[,y]", e.g. "add,2,3" or "circle-area,2".
    #[arg(required = true)]
    pub specs: Vec<String>,

    /// History file to save the evaluated operations to.
    #[arg(long, env = "RECKON_HISTORY")]
    pub history: Option<PathBuf>,

    /// Print the records as JSON instead of rendered lines.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `reckon show`.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// History file to read.
    #[arg(long, env = "RECKON_HISTORY")]
    pub history: PathBuf,
}

/// Parses command-line arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments and runs the selected command.
pub fn run() -> anyhow::Result<()> {
    run_with_cli(parse_cli())
}

/// Runs the selected command with already-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Eval(args) => run_eval(args),
        Commands::Show(args) => run_show(args),
    }
}

fn run_eval(args: EvalArgs) -> anyhow::Result<()> {
    let mut calculator = Calculator::new();

    for spec in &args.specs {
        let (operation, operands) = parse_spec(spec)?;
        apply(&mut calculator, operation, &operands);
    }

    if args.json {
        let json = serde_json::to_string_pretty(calculator.history().entries())
            .context("failed to serialize history records")?;
        println!("{json}");
    } else {
        for record in calculator.history().entries() {
            println!("{record}");
        }
    }

    if let Some(path) = args.history {
        let store = HistoryStore::with_path(&path);
        store.save(calculator.history())?;
        info!(path = %path.display(), entries = calculator.history().len(), "History saved");
    }

    Ok(())
}

fn run_show(args: ShowArgs) -> anyhow::Result<()> {
    let store = HistoryStore::with_path(&args.history);
    for line in store.load()? {
        println!("{line}");
    }
    Ok(())
}

/// Runs one operation on the calculator. A failed divide is recorded in
/// the history like any other outcome, not treated as a CLI error.
fn apply(calculator: &mut Calculator, operation: Operation, operands: &[f64]) {
    match operation {
        Operation::Add => {
            calculator.add(operands[0], operands[1]);
        }
        Operation::Subtract => {
            calculator.subtract(operands[0], operands[1]);
        }
        Operation::Multiply => {
            calculator.multiply(operands[0], operands[1]);
        }
        Operation::Divide => {
            let _ = calculator.divide(operands[0], operands[1]);
        }
        Operation::Power => {
            calculator.power(operands[0], operands[1]);
        }
        Operation::CircleArea => {
            calculator.circle_area(operands[0]);
        }
    }
}

/// Parses a spec of the form "op,x[,y]" into an operation and its operands.
fn parse_spec(spec: &str) -> anyhow::Result<(Operation, Vec<f64>)> {
    let mut parts = spec.split(',');
    let name = parts.next().unwrap_or_default().trim();

    let operation = Operation::from_name(name)
        .ok_or_else(|| anyhow!("unknown operation '{name}' in spec '{spec}'"))?;

    let operands = parts
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>()
                .map_err(|err| anyhow!("invalid operand '{part}' in spec '{spec}': {err}"))
        })
        .collect::<anyhow::Result<Vec<f64>>>()?;

    let expected = operation.operand_count();
    if operands.len() != expected {
        bail!(
            "operation '{name}' expects {expected} operand(s), got {} in spec '{spec}'",
            operands.len()
        );
    }

    Ok((operation, operands))
}
