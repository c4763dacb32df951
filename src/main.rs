mod engine;
mod input;
mod models;
mod transform;
mod types;

use std::io::{BufWriter, Write, stderr, stdout};
use std::path::Path;
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

use crate::engine::ExportEngine;
use crate::input::JsonFileBackend;
use crate::transform::OperationRecord;

#[tokio::main]
async fn main() -> Result<()> {
    //NOTE: A much more sophisticated CLI would reach for the clap crate; three
    //      positional arguments do not justify it.
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 4 {
        eprintln!(
            "Usage: ledger-etl [ledgers].json [start] [end] [limit:optional] [log_level:optional] > [records].json"
        );
        eprintln!("A negative limit exports all operations in range (default: -1)");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = &args[1];
    let start: u32 = args[2].parse()?;
    let end: u32 = args[3].parse()?;
    let limit: i64 = match args.get(4) {
        Some(raw) => raw.parse()?,
        None => -1,
    };
    let log_level = args
        .get(5)
        .map(|s| parse_log_level(s))
        .unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let backend = Arc::new(JsonFileBackend::open(Path::new(path))?);
    let engine = ExportEngine::new(backend);

    let timer = Instant::now();
    let records = engine.run(start, end, limit).await?;
    let duration = timer.elapsed();

    info!("Exported {} operation records in: {duration:?}", records.len());

    write_records_to_stdout(&records)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Records go to stdout, so logging has to stay on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry().with(terminal_log).init();
}

fn write_records_to_stdout(records: &[OperationRecord]) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    for record in records {
        serde_json::to_writer(&mut output, record)?;
        writeln!(output)?;
    }

    output.flush()?;

    Ok(())
}
