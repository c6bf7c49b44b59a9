//! Truth table generator - Command Line Interface
//!
//! Plays the editor's part: takes the selected formula, prints the table that
//! would be inserted below it, and reports success or failure on stderr.

use clap::Parser;
use latex_truth_table::{TruthTableConfig, TruthTableGenerator};
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "truth-table")]
#[command(about = "Generate a truth table from a LaTeX propositional formula", long_about = None)]
#[command(version)]
struct Args {
    /// Formula, e.g. 'p \to (q \wedge \neg r)' (read from stdin if omitted)
    #[arg(value_name = "FORMULA", conflicts_with = "file")]
    formula: Option<String>,

    /// Read the formula from a file
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    file: Option<PathBuf>,

    /// Refuse formulas with more variables than this
    #[arg(short = 'm', long = "max-vars", default_value_t = TruthTableConfig::default().max_variables)]
    max_variables: usize,

    /// Header of the result column
    #[arg(short = 'l', long = "result-label", default_value = latex_truth_table::DEFAULT_RESULT_LABEL)]
    result_label: String,

    /// Give up after this many milliseconds
    #[arg(short = 't', long = "timeout-ms", value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Refuse formulas nesting operators deeper than this
    #[arg(short = 'd', long = "max-depth", default_value_t = TruthTableConfig::default().max_depth)]
    max_depth: usize,

    /// Print the rewritten canonical formula to stderr
    #[arg(short = 'c', long = "show-canonical")]
    show_canonical: bool,
}

fn read_selection(args: &Args) -> io::Result<String> {
    if let Some(formula) = &args.formula {
        return Ok(formula.clone());
    }
    if let Some(path) = &args.file {
        return fs::read_to_string(path);
    }
    let mut buffer = String::new();
    if !io::stdin().is_terminal() {
        io::stdin().read_to_string(&mut buffer)?;
    }
    Ok(buffer)
}

/// Generate the table for `selection`, writing it to `out` and notices to `err`
///
/// Returns whether a table was produced. Nothing reaches `out` on failure.
fn run(
    args: &Args,
    selection: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    if selection.trim().is_empty() {
        writeln!(err, "ERROR: No text selected!")?;
        return Ok(false);
    }

    let generator = TruthTableGenerator::new(TruthTableConfig {
        max_variables: args.max_variables,
        max_depth: args.max_depth,
        result_label: args.result_label.clone(),
        timeout: args.timeout_ms.map(Duration::from_millis),
    });

    if args.show_canonical {
        match generator.prepare(selection) {
            Ok(prepared) => writeln!(
                err,
                "Canonical: {}  (variables {})",
                prepared.canonical(),
                prepared.variables()
            )?,
            Err(e) => {
                writeln!(err, "ERROR: {}", e)?;
                return Ok(false);
            }
        }
    }

    match generator.generate(selection) {
        Ok(table) => {
            writeln!(out, "{}", table)?;
            writeln!(err, "Success!")?;
            Ok(true)
        }
        Err(e) => {
            writeln!(err, "ERROR: {}", e)?;
            Ok(false)
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let selection = match read_selection(&args) {
        Ok(selection) => selection,
        Err(e) => {
            eprintln!("ERROR: Could not read formula: {}", e);
            process::exit(1);
        }
    };

    match run(&args, &selection, &mut io::stdout(), &mut io::stderr()) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    }
}
