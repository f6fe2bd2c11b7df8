use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing::level_filters::LevelFilter;

use coordscan::reader::{InputReader, ReaderConfig};
use coordscan::report::{self, OutputFormat, RunStats};
use coordscan::{CoordinateExtractor, ExtractionConfig, DEFAULT_MAX_SENTENCE_LEN};

#[derive(Parser, Debug)]
#[command(name = "coordscan")]
#[command(about = "Extracts latitude/longitude pairs from free-form text")]
#[command(version)]
struct Args {
    /// Text file to scan for coordinates
    input_file: PathBuf,

    /// Maximum sentence length shown for each match
    #[arg(long, default_value_t = DEFAULT_MAX_SENTENCE_LEN)]
    max_sentence_len: usize,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Use memory-mapped I/O instead of async buffered
    #[arg(long)]
    use_mmap: bool,

    /// Print the loaded text before the report
    #[arg(long)]
    show_text: bool,

    /// Stats output file path
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Log at debug level, including every discarded candidate
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // WHY: stdout carries the report, structured logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(if args.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN })
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    let reader = InputReader::new(ReaderConfig {
        use_mmap: args.use_mmap,
        ..Default::default()
    });
    let (text, read_stats) = reader.read_text(&args.input_file).await?;

    if args.show_text {
        println!("{}", report::render_text_content(&text));
    }

    let extractor = CoordinateExtractor::new(ExtractionConfig {
        max_sentence_len: args.max_sentence_len,
    })?;

    let extraction_start = Instant::now();
    let extraction = extractor.extract(&text);
    let extraction_time_ms = extraction_start.elapsed().as_millis() as u64;

    println!("{}", report::render(&extraction, args.format)?);

    if let Some(stats_path) = &args.stats_out {
        let stats = RunStats::new(&read_stats, extraction_time_ms, &extraction);
        report::write_stats(stats_path, &stats).await?;
        info!("Wrote run stats to {}", stats_path.display());
    }

    Ok(())
}
