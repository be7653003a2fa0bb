//! Terminal front end for the felt engine: an interactive table and a
//! bots-only simulator. All timing and turn scheduling lives here; the
//! engine itself is synchronous and owns the rules.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod commands;

#[derive(Debug, Parser)]
#[command(name = "felt", version, about = "No-Limit Hold'em at the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play an interactive table against bot seats
    Play(TableArgs),
    /// Run a bots-only simulation and print the outcome
    Sim(SimArgs),
}

#[derive(Debug, Args)]
pub struct TableArgs {
    /// Small blind amount
    #[arg(long, default_value_t = 10)]
    pub small_blind: u32,

    /// Big blind amount
    #[arg(long, default_value_t = 20)]
    pub big_blind: u32,

    /// Starting stack for every seat
    #[arg(long, default_value_t = 1000)]
    pub chips: u32,

    /// Number of seats at the table (clamped to 2-7)
    #[arg(long, default_value_t = 4)]
    pub seats: usize,

    /// RNG seed for a reproducible session
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Args)]
pub struct SimArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Number of hands to play
    #[arg(long, default_value_t = 100)]
    pub hands: u64,

    /// Write a JSONL hand history to this path
    #[arg(long)]
    pub log: Option<PathBuf>,
}

impl TableArgs {
    /// Configuration errors are rejected here, at the setup boundary;
    /// the engine itself never validates blinds.
    pub fn validate(&self) -> Result<(), String> {
        if self.small_blind == 0 {
            return Err("small blind must be positive".to_string());
        }
        if self.big_blind < self.small_blind {
            return Err("big blind must be at least the small blind".to_string());
        }
        if self.chips < self.big_blind {
            return Err("starting chips must cover the big blind".to_string());
        }
        Ok(())
    }
}
