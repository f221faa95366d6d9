use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;

use csv_sieve::data::loader::LoadOptions;
use csv_sieve::render::{render, OutputFormat};
use csv_sieve::{to_exit_code, Error, Query};

#[derive(Parser, Debug)]
#[command(name = "csv-sieve", version)]
#[command(about = "Filter and aggregate a CSV file")]
struct Args {
    /// Path to the CSV file
    #[arg(long, value_name = "PATH")]
    file: PathBuf,

    /// Keep rows matching a condition, e.g. "rating>4.7" or "brand=apple"
    #[arg(long = "where", value_name = "EXPR")]
    filter: Option<String>,

    /// Reduce one column, e.g. "rating=avg", "price=max"
    #[arg(long, value_name = "EXPR")]
    aggregate: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Grid)]
    format: OutputFormat,

    /// Field separator of the input file
    #[arg(long, default_value_t = ',')]
    delimiter: char,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<Error>() {
            // Core errors carry their cause in the message already.
            Some(core) => {
                eprintln!("Error: {core}");
                ExitCode::from(to_exit_code(core.kind()) as u8)
            }
            None => {
                eprintln!("Error: {err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(args: &Args) -> Result<()> {
    let options = LoadOptions {
        delimiter: delimiter_byte(args.delimiter)?,
    };
    log::debug!("query {args:?}");

    let query = Query {
        file: args.file.clone(),
        filter: args.filter.clone(),
        aggregate: args.aggregate.clone(),
    };
    let table = query.run_with(options)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&table, args.format, &mut out)?;
    out.flush().context("flushing stdout")?;
    Ok(())
}

fn delimiter_byte(c: char) -> Result<u8> {
    if !c.is_ascii() {
        bail!("delimiter must be a single ASCII character, got {c:?}");
    }
    Ok(c as u8)
}
