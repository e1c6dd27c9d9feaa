// crates/quotemend-cli/src/main.rs

use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod cmd;
mod exit;
mod io;
mod replacement;
mod report;

#[derive(Parser)]
#[command(name = "quotemend")]
#[command(about = "Repair line breaks inside quoted CSV fields", long_about = None)]
pub struct Cli {
    /// Debug logging to stderr (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite a file: flatten breaks inside guarded fields, collapse CR CR LF
    Fix(cmd::fix::FixArgs),

    /// Scan a file and report what `fix` would change, without writing
    Inspect(cmd::inspect::InspectArgs),
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("quotemend=debug,quotemend_core=debug")
    } else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let res = match cli.cmd {
        Commands::Fix(args) => cmd::fix::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            exit::code_for(&e)
        }
    }
}
