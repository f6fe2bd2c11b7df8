pub mod aggregator;
pub mod coordinate;
pub mod matchers;
pub mod reader;
pub mod report;
pub mod sentence_locator;

// Re-export main types for convenient access
pub use coordinate::{Convention, Coordinate, Rejection};

pub use aggregator::{ConventionCount, CoordinateExtractor, ExtractionConfig, ExtractionReport};

pub use matchers::{BareDecimalMatcher, CommaDecimalMatcher, CoordinateMatcher, HemisphereMatcher};

pub use sentence_locator::{locate_sentence, DEFAULT_MAX_SENTENCE_LEN, TRUNCATION_MARKER};
