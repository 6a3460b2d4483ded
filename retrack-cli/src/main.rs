//! retrack — keep tracked file mappings in sync with repository renames
//! and deletions.
//!
//! # Usage
//!
//! ```text
//! retrack run [--file <path>] [--message <msg>] [--no-commit]
//! retrack check --base <ref> --head <ref> [--file <path>] [--json]
//! ```
//!
//! `run` is the CI entrypoint: it resolves the trigger context from the
//! environment, reconciles the tracked mapping against the commit diff,
//! patches the workflow file, and commits the result back. `check` is a
//! manual dry-run against two explicit refs.

mod commands;
mod commit;
mod trigger;

use clap::{Parser, Subcommand};

use commands::{check::CheckArgs, run::RunArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "retrack",
    version,
    about = "Keep tracked file mappings in sync with repository renames and deletions",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reconcile the tracked mapping for this CI run and commit the result.
    Run(RunArgs),

    /// Show what a run would change for two explicit refs, without writing.
    Check(CheckArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    init_logging();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run(args) => args.run(),
        Commands::Check(args) => args.run(),
    };
    if let Err(err) = result {
        // The hosting platform surfaces ::error:: lines as run annotations.
        eprintln!("::error::{err:#}");
        std::process::exit(1);
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}
