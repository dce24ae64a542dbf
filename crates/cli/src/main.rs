use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod commands;
mod provenance;

#[derive(Parser)]
#[command(name = "twisty")]
#[command(about = "Load, drive and inspect twisty puzzles")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Load and validate a puzzle; print piece and generator counts
    Check {
        /// Definition file path or builtin name
        #[arg(long)]
        puzzle: String,
    },
    /// Apply a move sequence and report whether the puzzle ends solved
    Run {
        #[arg(long)]
        puzzle: String,
        /// Move notation, e.g. "R,U,R',U'" or "2{R,U}"
        #[arg(long)]
        sequence: String,
        /// Enforce bandage checks even if the definition does not
        #[arg(long)]
        bandaged: bool,
        /// Write the final permutation snapshot here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Apply a random scramble
    Scramble {
        #[arg(long)]
        puzzle: String,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 100)]
        moves: usize,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Restore a permutation snapshot and report whether it is solved
    Restore {
        #[arg(long)]
        puzzle: String,
        #[arg(long)]
        state: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Check { puzzle } => print(&commands::check(&puzzle)?),
        Action::Run {
            puzzle,
            sequence,
            bandaged,
            out,
        } => print(&commands::run(&puzzle, &sequence, bandaged, out.as_deref())?),
        Action::Scramble {
            puzzle,
            seed,
            moves,
            out,
        } => print(&commands::scramble(&puzzle, seed, moves, out.as_deref())?),
        Action::Restore { puzzle, state } => print(&commands::restore(&puzzle, &state)?),
        Action::Report => report(),
    }
}

fn print<T: Serialize>(summary: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "twisty_version": twisty::VERSION,
        "builtins": twisty::puzzle::catalog::names(),
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
