//! CLI argument parsing for the event listener

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "el")]
#[command(author, version, about = "Supervisor event listener", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Audit log path (default: tmp/date.log)
    #[arg(short, long)]
    pub audit_log: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Extra arguments passed by the supervisor; accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub args: Vec<String>,
}
