// WHY: runs every matcher over the same text and concatenates in a fixed order
// Results are never deduplicated or re-validated here

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use crate::coordinate::{Convention, Coordinate};
use crate::matchers::{BareDecimalMatcher, CommaDecimalMatcher, CoordinateMatcher, HemisphereMatcher};
use crate::sentence_locator::DEFAULT_MAX_SENTENCE_LEN;

/// Tunables for coordinate extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// Maximum sentence length in characters before truncation
    pub max_sentence_len: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_sentence_len: DEFAULT_MAX_SENTENCE_LEN,
        }
    }
}

/// Number of coordinates one convention contributed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConventionCount {
    pub convention: Convention,
    pub count: usize,
}

/// Combined matcher output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionReport {
    /// Bare-decimal matches first, then hemisphere-letter, then comma-decimal
    pub coordinates: Vec<Coordinate>,
    /// One entry per convention in the same order
    pub counts: Vec<ConventionCount>,
    pub total: usize,
}

impl ExtractionReport {
    /// Concatenate per-matcher results in the order given
    pub fn from_matcher_results(results: Vec<(Convention, Vec<Coordinate>)>) -> Self {
        let mut coordinates = Vec::new();
        let mut counts = Vec::with_capacity(results.len());

        for (convention, found) in results {
            counts.push(ConventionCount {
                convention,
                count: found.len(),
            });
            coordinates.extend(found);
        }

        let total = coordinates.len();
        Self {
            coordinates,
            counts,
            total,
        }
    }

    pub fn count_for(&self, convention: Convention) -> usize {
        self.counts
            .iter()
            .find(|c| c.convention == convention)
            .map_or(0, |c| c.count)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

/// Runs all three matchers with a shared configuration
pub struct CoordinateExtractor {
    config: ExtractionConfig,
    bare_decimal: BareDecimalMatcher,
    hemisphere: HemisphereMatcher,
    comma_decimal: CommaDecimalMatcher,
}

impl CoordinateExtractor {
    pub fn new(config: ExtractionConfig) -> Result<Self> {
        info!(max_sentence_len = config.max_sentence_len, "Compiling coordinate matchers");
        Ok(Self {
            config,
            bare_decimal: BareDecimalMatcher::new()?,
            hemisphere: HemisphereMatcher::new()?,
            comma_decimal: CommaDecimalMatcher::new()?,
        })
    }

    pub fn with_default_config() -> Result<Self> {
        Self::new(ExtractionConfig::default())
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Matchers in aggregation order
    pub fn matchers(&self) -> [&dyn CoordinateMatcher; 3] {
        [&self.bare_decimal, &self.hemisphere, &self.comma_decimal]
    }

    /// Run each matcher once and concatenate their results
    pub fn extract(&self, text: &str) -> ExtractionReport {
        let results = self
            .matchers()
            .into_iter()
            .map(|matcher| {
                (
                    matcher.convention(),
                    matcher.find_coordinates(text, self.config.max_sentence_len),
                )
            })
            .collect();

        let report = ExtractionReport::from_matcher_results(results);
        info!(total = report.total, "Coordinate extraction complete");
        report
    }

    /// Same output as `extract`, with each matcher on its own scoped thread
    pub fn extract_parallel(&self, text: &str) -> ExtractionReport {
        let max_sentence_len = self.config.max_sentence_len;

        let results = std::thread::scope(|scope| {
            let handles: Vec<_> = self
                .matchers()
                .into_iter()
                .map(|matcher| {
                    let handle =
                        scope.spawn(move || matcher.find_coordinates(text, max_sentence_len));
                    (matcher, handle)
                })
                .collect();

            // WHY: join in spawn order so results stay in aggregation order
            handles
                .into_iter()
                .map(|(matcher, handle)| {
                    let found = match handle.join() {
                        Ok(found) => found,
                        Err(panic) => std::panic::resume_unwind(panic),
                    };
                    (matcher.convention(), found)
                })
                .collect()
        });

        let report = ExtractionReport::from_matcher_results(results);
        info!(total = report.total, "Parallel coordinate extraction complete");
        report
    }
}
