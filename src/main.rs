use std::{fs, path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser};
use defmap_calc::{interpreter::context::Context, run_block, run_script};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// defmap-calc evaluates arithmetic statements over scalar variables and
/// numeric maps.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read statements from a script, one per line, instead of the
    /// command line.
    #[arg(short, long, value_name = "PATH", conflicts_with = "contents")]
    file: Option<PathBuf>,

    /// Print every scalar and map once evaluation finishes.
    #[arg(short, long)]
    dump: bool,

    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Statements to evaluate in order against one context.
    #[arg(required_unless_present = "file", allow_hyphen_values = true)]
    contents: Vec<String>,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr))
                                  .with(filter)
                                  .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut context = Context::new();
    let outcome = if let Some(path) = &args.file {
        let Ok(script) = fs::read_to_string(path) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            return ExitCode::FAILURE;
        };
        run_script(&mut context, &script).map_err(|e| e.to_string())
    } else {
        run_block(&mut context, &args.contents).map_err(|e| e.to_string())
    };

    let code = match outcome {
        Ok(Some(value)) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    };

    if args.dump {
        print!("{context}");
    }
    code
}
