use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "propline",
    about = "Inspect and edit .properties files",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with output and resolver settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the value of a key
    Get(GetArgs),
    /// Set a key and rewrite the file
    Set(SetArgs),
    /// Remove a key and rewrite the file
    Remove(RemoveArgs),
    /// List every entry, sorted by key
    List(ListArgs),
    /// Parse a file and report skipped lines
    Check(CheckArgs),
}

#[derive(Args)]
pub struct GetArgs {
    pub file: PathBuf,
    pub key: String,
    /// Value printed when the key is missing
    #[arg(short, long)]
    pub default: Option<String>,
    /// Substitute ${NAME} from the environment
    #[arg(long)]
    pub resolve_env: bool,
}

#[derive(Args)]
pub struct SetArgs {
    pub file: PathBuf,
    pub key: String,
    pub value: String,
}

#[derive(Args)]
pub struct RemoveArgs {
    pub file: PathBuf,
    pub key: String,
}

#[derive(Args)]
pub struct ListArgs {
    pub file: PathBuf,
    /// Substitute ${NAME} from the environment
    #[arg(long)]
    pub resolve_env: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    pub file: PathBuf,
}
