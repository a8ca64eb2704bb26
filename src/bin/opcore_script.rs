use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use wasm_opcore::{run_script, Report, Script};

#[derive(Parser, Debug)]
#[command(name = "opcore-script")]
#[command(about = "Run JSON assertion scripts against the numeric/memory backend")]
#[command(long_about = "
opcore-script - run JSON assertion scripts

Each script is a list of commands (memory, init, action, assert_return,
assert_trap) executed in order against a fresh runner.

Examples:
  # Run a single script
  opcore-script tests/core/i32.json

  # Run several scripts and show every failure
  opcore-script tests/core/*.json --verbose

  # Quiet mode (only show failures)
  opcore-script tests/core/*.json --quiet
")]
struct Args {
    /// Path(s) to JSON script file(s)
    script_files: Vec<PathBuf>,

    /// Print each failing assertion
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only show errors
    #[arg(short, long)]
    quiet: bool,
}

fn run_file(path: &Path) -> Result<Report, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let mut script = Script::from_json(&text)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;
    if script.source_filename.is_empty() {
        script.source_filename = path.display().to_string();
    }
    Ok(run_script(&script))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.script_files.is_empty() {
        eprintln!("Error: No script files specified");
        eprintln!("Usage: opcore-script <SCRIPT_FILES>...");
        std::process::exit(1);
    }

    let mut total_passes = 0u32;
    let mut total_failures = 0usize;
    let mut errors = Vec::new();

    for path in &args.script_files {
        match run_file(path) {
            Ok(report) => {
                total_passes += report.passes;
                total_failures += report.failures.len();
                if !args.quiet {
                    println!("{}: {} passed, {} failed", path.display(), report.passes, report.failures.len());
                }
                if args.verbose {
                    for failure in &report.failures {
                        eprintln!("  {}", failure);
                    }
                }
            }
            Err(e) => errors.push(e.to_string()),
        }
    }

    if !errors.is_empty() {
        eprintln!("\nScript errors:");
        for error in &errors {
            eprintln!("{}", error);
        }
    }

    if args.script_files.len() > 1 && !args.quiet {
        println!("\nTotal: {} passed, {} failed", total_passes, total_failures);
    }

    if errors.is_empty() && total_failures == 0 {
        Ok(())
    } else {
        std::process::exit(1);
    }
}
