use std::io::{stdin, stdout};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use argh::interpreter::{EofPolicy, Interpreter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Argh! script to run
    path: std::path::PathBuf,

    /// What `plunder` stores once stdin is exhausted
    #[arg(long, value_enum, default_value_t = EofPolicy::Keep)]
    eof: EofPolicy,

    /// More log output on stderr, repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Cli) -> anyhow::Result<()> {
    let code = std::fs::read_to_string(&args.path)
        .with_context(|| format!("could not read script {}", args.path.display()))?;
    let interpreter = Interpreter::build(&code)?.with_eof_policy(args.eof);
    tracing::info!(path = %args.path.display(), commands = interpreter.len(), "running");
    interpreter.execute(&mut stdin().lock(), &mut stdout().lock())?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("\nAargh!! {:#}", err);
            ExitCode::FAILURE
        }
    }
}
