//! CLI module for the club membership server
//!
//! Provides the `serve` subcommand that runs the HTTP API server.

pub mod serve;

use clap::{Parser, Subcommand};

/// Club membership server - users, clubs and the join workflow over HTTP
#[derive(Parser)]
#[command(name = "club-server")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
