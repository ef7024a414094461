//! Command handlers
//!
//! Every handler takes its input and output streams explicitly so the
//! prompts and answers can be exercised without a terminal.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use bloom_filters::generator::validate_operation_count;
use bloom_filters::{
    BatchFileSource, BloomConfig, BloomFilter, Dispatcher, GeneratedStats, InteractiveSource,
    Metrics, OperationGenerator, RunSummary, MAX_OPERATIONS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::args::{Args, Command};

/// What a command produced
#[derive(Debug)]
pub enum Outcome {
    /// An operation stream was processed
    Ran(RunSummary),
    /// A test stream was written
    Generated(GeneratedStats),
    /// The menu choice was not recognised
    InvalidChoice,
    /// Input ended before a choice was made
    Aborted,
}

/// Run the command selected by `args`
pub fn run<R: BufRead, W: Write>(
    args: &Args,
    input: &mut R,
    out: &mut W,
    metrics: Arc<Metrics>,
) -> Result<Outcome> {
    match &args.command {
        Some(Command::Generate {
            file,
            operations,
            seed,
        }) => run_generate(file, *operations, *seed, input, out).map(Outcome::Generated),
        Some(Command::Interactive) => {
            let filter = build_filter(&args.filter_config())?;
            run_interactive(filter, input, out, metrics).map(Outcome::Ran)
        }
        Some(Command::Batch { file }) => {
            let filter = build_filter(&args.filter_config())?;
            run_batch(filter, file, out, metrics).map(Outcome::Ran)
        }
        None => {
            let filter = build_filter(&args.filter_config())?;
            run_menu(filter, input, out, metrics)
        }
    }
}

/// Construct the filter, logging its derived parameters
pub fn build_filter(config: &BloomConfig) -> Result<BloomFilter> {
    let filter = BloomFilter::from_config(config).context("Invalid filter configuration")?;
    info!(
        capacity = filter.capacity(),
        false_positive_rate = filter.false_positive_rate(),
        size_bits = filter.size_bits(),
        hash_count = filter.hash_count(),
        "Bloom filter created"
    );
    Ok(filter)
}

/// Ask for the input method, then run it
pub fn run_menu<R: BufRead, W: Write>(
    filter: BloomFilter,
    input: &mut R,
    out: &mut W,
    metrics: Arc<Metrics>,
) -> Result<Outcome> {
    writeln!(out, "Choose input method:")?;
    writeln!(out, "1. Terminal")?;
    writeln!(out, "2. File")?;
    let Some(choice) = prompt(input, out, "Enter your choice (1/2): ")? else {
        return Ok(Outcome::Aborted);
    };

    match choice.as_str() {
        "1" => {
            writeln!(out)?;
            run_interactive(filter, input, out, metrics).map(Outcome::Ran)
        }
        "2" => {
            let Some(file) = prompt(input, out, "Enter input file name: ")? else {
                return Ok(Outcome::Aborted);
            };
            run_batch(filter, Path::new(&file), out, metrics).map(Outcome::Ran)
        }
        _ => {
            writeln!(out, "Invalid choice")?;
            Ok(Outcome::InvalidChoice)
        }
    }
}

/// Process operations typed on `input` until `#` or end of input
pub fn run_interactive<R: BufRead, W: Write>(
    filter: BloomFilter,
    input: &mut R,
    out: &mut W,
    metrics: Arc<Metrics>,
) -> Result<RunSummary> {
    writeln!(out, "Enter operations (format: <+/? string>, # to end):")?;
    out.flush()?;

    let mut source = InteractiveSource::new(input);
    let mut dispatcher = Dispatcher::new(filter, out).with_metrics(metrics);
    let summary = dispatcher
        .run(&mut source)
        .context("Failed to read interactive input")?;
    Ok(summary)
}

/// Process the stream in `path`
///
/// A missing file is reported on `out` and treated as an empty stream.
pub fn run_batch<W: Write>(
    filter: BloomFilter,
    path: &Path,
    out: &mut W,
    metrics: Arc<Metrics>,
) -> Result<RunSummary> {
    let mut source = BatchFileSource::open_or_empty(path, out)?;
    let mut dispatcher = Dispatcher::new(filter, out).with_metrics(metrics);
    let summary = dispatcher
        .run(&mut source)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(summary)
}

/// Write a random stream to `path`, prompting for the length if needed
pub fn run_generate<R: BufRead, W: Write>(
    path: &Path,
    operations: Option<usize>,
    seed: Option<u64>,
    input: &mut R,
    out: &mut W,
) -> Result<GeneratedStats> {
    let count = match operations {
        Some(count) => validate_operation_count(count)?,
        None => match prompt_operation_count(input, out)? {
            Some(count) => count,
            None => anyhow::bail!("Input ended before a number of operations was given"),
        },
    };

    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    let stats = OperationGenerator::new(rng).generate(count, &mut writer)?;

    writeln!(
        out,
        "Generated test file '{}' with {} operations",
        path.display(),
        count
    )?;
    Ok(stats)
}

/// Re-prompt until a count in `1..=MAX_OPERATIONS` is entered
fn prompt_operation_count<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<usize>> {
    let question = format!("Enter number of operations (max {}): ", MAX_OPERATIONS);
    loop {
        let Some(answer) = prompt(input, out, &question)? else {
            return Ok(None);
        };
        match answer.parse::<usize>() {
            Ok(count) if validate_operation_count(count).is_ok() => return Ok(Some(count)),
            Ok(_) => writeln!(out, "Please enter a number between 1 and {}", MAX_OPERATIONS)?,
            Err(_) => writeln!(out, "Please enter a valid number")?,
        }
    }
}

/// Print `question` and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> Result<Option<String>> {
    write!(out, "{}", question)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
