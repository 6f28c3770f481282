// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::{CliCommand, GenerateOptions};

#[derive(Parser, Debug)]
#[command(author, version, about = "Random password generator with strength scoring", long_about = None)]
pub struct Args {
    /// Use JSON for output
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to execute (defaults to the interactive generator)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
