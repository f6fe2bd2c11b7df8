use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, BufReader};
use tracing::{debug, info, warn};

/// Configuration for input file reading
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Read through a memory map instead of async buffered I/O
    pub use_mmap: bool,
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            use_mmap: false,
            buffer_size: 8192,
        }
    }
}

/// Statistics for one input read, carried into the run stats file
#[derive(Debug, Clone)]
pub struct ReadStats {
    /// Input path as given by the caller
    pub file_path: String,
    pub bytes_read: u64,
    pub chars_read: u64,
    pub duration_ms: u64,
}

/// Loads a whole text file for extraction
pub struct InputReader {
    config: ReaderConfig,
}

impl InputReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read the whole file as UTF-8 text
    ///
    /// Missing, unreadable, non-UTF-8 and zero-length files are errors naming the path.
    pub async fn read_text<P: AsRef<Path>>(&self, file_path: P) -> Result<(String, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();

        debug!(use_mmap = self.config.use_mmap, "Starting read of file: {}", path.display());

        let text = if self.config.use_mmap {
            read_mmap(path)?
        } else {
            self.read_buffered(path).await?
        };

        if text.is_empty() {
            warn!("Input file is empty: {}", path.display());
            anyhow::bail!("Failed to read file or file is empty: {}", path.display());
        }

        let stats = ReadStats {
            file_path: path.display().to_string(),
            bytes_read: text.len() as u64,
            chars_read: text.chars().count() as u64,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Successfully read {}: {} bytes, {} chars in {}ms",
            path.display(),
            stats.bytes_read,
            stats.chars_read,
            stats.duration_ms
        );
        Ok((text, stats))
    }

    async fn read_buffered(&self, path: &Path) -> Result<String> {
        let file = File::open(path)
            .await
            .with_context(|| format!("Failed to read file {}", path.display()))?;

        let mut reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .await
            .with_context(|| format!("Failed to read file {}", path.display()))?;

        String::from_utf8(bytes)
            .with_context(|| format!("File is not valid UTF-8: {}", path.display()))
    }
}

fn read_mmap(path: &Path) -> Result<String> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to read file {}", path.display()))?;
    let len = file
        .metadata()
        .with_context(|| format!("Failed to read file {}", path.display()))?
        .len();

    // Zero-length files cannot be mapped on every platform
    if len == 0 {
        return Ok(String::new());
    }

    // SAFETY: the map is read-only and copied out before the file handle is dropped
    let mmap = unsafe { memmap2::MmapOptions::new().map(&file) }
        .with_context(|| format!("Failed to map file {}", path.display()))?;
    let text = std::str::from_utf8(&mmap)
        .with_context(|| format!("File is not valid UTF-8: {}", path.display()))?;
    Ok(text.to_owned())
}
