//! CLI argument definitions for the dotpath binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Read and write nested JSON values by dot-delimited path
#[derive(Parser, Debug)]
#[command(name = "dotpath")]
#[command(about = "dotpath: read and write nested JSON values by path")]
#[command(version)]
pub struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a path
    Get(GetArgs),
    /// Assign a value at a path and print the updated document
    Set(SetArgs),
}

/// Where the JSON document comes from
#[derive(clap::Args, Debug, Clone)]
pub struct InputArgs {
    /// JSON file to read (stdin when omitted)
    #[arg(short, long, env = "DOTPATH_FILE")]
    pub file: Option<PathBuf>,
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Path such as `user.profiles[0].city`
    pub path: String,

    /// JSON value printed when the path does not resolve
    #[arg(short, long)]
    pub default: Option<String>,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the set command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Path such as `user.settings.theme`
    pub path: String,

    /// JSON value to assign (for a string, quote it: '"dark"')
    pub value: String,

    /// Write the result back to --file instead of printing it
    #[arg(short, long, requires = "file")]
    pub in_place: bool,

    #[command(flatten)]
    pub input: InputArgs,
}
