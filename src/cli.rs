use camino::Utf8PathBuf;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, disable_help_flag = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Use verbose output, repeat for trace output
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity_level: u8,

    /// Print help information, use `--help` for more detail
    #[arg(short, long, action=ArgAction::Help, global=true)]
    pub help: Option<bool>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sum the integers in the given files
    Sum(SumCmd),
}

#[derive(Debug, clap::Args)]
pub struct SumCmd {
    /// Files of whitespace-separated integers
    #[arg(required = true)]
    pub paths: Vec<Utf8PathBuf>,

    /// File to read in place of any which cannot be read
    #[arg(long)]
    pub fallback: Option<Utf8PathBuf>,
}
