use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tl", about = concat!("[x] tasklist v", env!("CARGO_PKG_VERSION"), " - a small in-memory task list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: <config dir>/tasklist/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error, off
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay an intent script and print the resulting list
    Run(RunArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// Script file (default: read stdin)
    pub file: Option<PathBuf>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
