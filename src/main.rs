#![deny(missing_debug_implementations)]

mod cli;
mod logger;
mod verbosity;

use std::{fs, io, num::ParseIntError, process::ExitCode};

use camino::Utf8Path;
use clap::Parser as _;
use log::{error, info, warn};
use tryutils::Attempt;

use crate::{
    cli::{Args, Command, SumCmd},
    verbosity::Verbosity,
};

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    logger::init(Verbosity::try_from(args.verbosity_level)?)?;

    match args.command {
        Command::Sum(cmd_args) => sum(cmd_args),
    }?;

    Ok(logger::exit_code())
}

fn sum(cmd_args: SumCmd) -> anyhow::Result<()> {
    let SumCmd { paths, fallback } = cmd_args;
    let total: i64 = paths
        .iter()
        .filter_map(|path| sum_file(path, fallback.as_deref()))
        .sum();
    println!("{total}");
    Ok(())
}

fn sum_file(path: &Utf8Path, fallback: Option<&Utf8Path>) -> Option<i64> {
    read_numbers(path, fallback)
        .ok(|numbers| info!("read {} from {path}", numbers.len()))
        .fail_kind::<io::Error>(|err| warn!("cannot read {path}: {err}"))
        .fail_kind::<ParseIntError>(|err| error!("cannot parse {path}: {err}"))
        .fail(|err| error!("cannot sum {path}: {err:#}"))
        .map(|numbers| Some(numbers.into_iter().sum()))
        .or_else(None)
}

fn read_numbers(path: &Utf8Path, fallback: Option<&Utf8Path>) -> Attempt<Vec<i64>> {
    let mut content = tryutils::run(|| fs::read_to_string(path));
    if let Some(fallback) = fallback {
        content = content
            .fail(|err| info!("cannot read {path} ({err}), reading {fallback} instead"))
            .or(|| fs::read_to_string(fallback));
    }
    content.flat_map(|content| tryutils::run(|| parse_numbers(&content)))
}

fn parse_numbers(content: &str) -> Result<Vec<i64>, ParseIntError> {
    content.split_whitespace().map(str::parse).collect()
}
