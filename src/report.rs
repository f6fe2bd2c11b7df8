// WHY: presentation of an ExtractionReport for the console and the stats file
// Nothing here feeds back into extraction

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::aggregator::ExtractionReport;
use crate::coordinate::Coordinate;
use crate::reader::ReadStats;

/// Console output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Per-run statistics written with `--stats-out`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RunStats {
    /// Input file as given on the command line
    pub input_path: String,
    pub bytes_read: u64,
    pub chars_processed: u64,
    pub read_time_ms: u64,
    pub extraction_time_ms: u64,
    /// Coordinates per convention label, in aggregation order
    pub counts: Vec<(String, usize)>,
    pub total_coordinates: usize,
}

/// Format one coordinate entry with a 1-based index
pub fn format_coordinate(index: usize, coordinate: &Coordinate) -> String {
    format!(
        "[{}] {:.6}, {:.6} ({})\n    Text: \"{}\"\n    Sentence: \"{}\"",
        index,
        coordinate.latitude(),
        coordinate.longitude(),
        coordinate.convention(),
        coordinate.original_text(),
        coordinate.sentence()
    )
}

/// Per-convention counts followed by the grand total
pub fn format_summary(report: &ExtractionReport) -> String {
    let mut out = String::from("Summary:\n");
    for entry in &report.counts {
        let _ = writeln!(out, "  {}: {}", entry.convention, entry.count);
    }
    let _ = write!(out, "  Total: {}", report.total());
    out
}

/// Full plain-text report
pub fn render_text(report: &ExtractionReport) -> String {
    let mut out = String::new();

    if report.is_empty() {
        out.push_str("No coordinates found.\n");
    } else {
        let _ = writeln!(out, "Found {} coordinates:", report.total());
        for (i, coordinate) in report.coordinates.iter().enumerate() {
            let _ = writeln!(out, "{}", format_coordinate(i + 1, coordinate));
        }
    }

    out.push('\n');
    out.push_str(&format_summary(report));
    out
}

pub fn render_json(report: &ExtractionReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render(report: &ExtractionReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

/// Echo of the loaded input between banner lines, followed by its length in bytes
pub fn render_text_content(text: &str) -> String {
    format!(
        "=== TEXT CONTENT ===\n{}\n====================\nText length: {} characters",
        text,
        text.len()
    )
}

impl RunStats {
    pub fn new(read_stats: &ReadStats, extraction_time_ms: u64, report: &ExtractionReport) -> Self {
        Self {
            input_path: read_stats.file_path.clone(),
            bytes_read: read_stats.bytes_read,
            chars_processed: read_stats.chars_read,
            read_time_ms: read_stats.duration_ms,
            extraction_time_ms,
            counts: report
                .counts
                .iter()
                .map(|c| (c.convention.label().to_string(), c.count))
                .collect(),
            total_coordinates: report.total(),
        }
    }
}

/// Write run statistics as pretty JSON
pub async fn write_stats(stats_path: &Path, stats: &RunStats) -> Result<()> {
    let json = serde_json::to_string_pretty(stats)?;
    let file = tokio::fs::File::create(stats_path).await?;
    let mut writer = BufWriter::new(file);
    writer.write_all(json.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
