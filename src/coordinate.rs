// WHY: single value type shared by every matcher, the aggregator and the reporter
// Fields are private so a constructed Coordinate always satisfies the geographic bounds

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Inclusive latitude bounds in degrees
pub const LATITUDE_BOUNDS: (f64, f64) = (-90.0, 90.0);

/// Inclusive longitude bounds in degrees
pub const LONGITUDE_BOUNDS: (f64, f64) = (-180.0, 180.0);

/// Textual convention a coordinate was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Convention {
    /// `45.5 -93.2`
    BareDecimal,
    /// `N45.5 W93.2`
    HemisphereLetter,
    /// `48,8566 2,3522`
    CommaDecimal,
}

impl Convention {
    /// Fixed aggregation order
    pub const ALL: [Convention; 3] = [
        Convention::BareDecimal,
        Convention::HemisphereLetter,
        Convention::CommaDecimal,
    ];

    /// Human readable label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Convention::BareDecimal => "bare-decimal",
            Convention::HemisphereLetter => "hemisphere-letter",
            Convention::CommaDecimal => "comma-decimal",
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reason a syntactic match did not become a Coordinate
///
/// These are filtering outcomes, not failures: matchers log them and move on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    #[error("unparseable numeral {0:?}")]
    UnparseableNumeral(String),

    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("matched text is empty")]
    EmptyText,
}

pub fn is_valid_latitude(latitude: f64) -> bool {
    LATITUDE_BOUNDS.0 <= latitude && latitude <= LATITUDE_BOUNDS.1
}

pub fn is_valid_longitude(longitude: f64) -> bool {
    LONGITUDE_BOUNDS.0 <= longitude && longitude <= LONGITUDE_BOUNDS.1
}

/// Parse a captured numeral that already uses `.` as decimal separator
pub fn parse_numeral(raw: &str) -> Result<f64, Rejection> {
    raw.parse::<f64>()
        .map_err(|_| Rejection::UnparseableNumeral(raw.to_string()))
}

/// Check a (latitude, longitude) pair against the geographic bounds
///
/// NaN fails both comparisons and is therefore rejected as out of range.
pub fn validate_pair(latitude: f64, longitude: f64) -> Result<(f64, f64), Rejection> {
    if !is_valid_latitude(latitude) {
        return Err(Rejection::LatitudeOutOfRange(latitude));
    }
    if !is_valid_longitude(longitude) {
        return Err(Rejection::LongitudeOutOfRange(longitude));
    }
    Ok((latitude, longitude))
}

/// A validated coordinate pair with the text it was read from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
    original_text: String,
    sentence: String,
    convention: Convention,
}

impl Coordinate {
    /// Build a coordinate, rejecting out-of-range pairs and empty match text
    pub fn new(
        latitude: f64,
        longitude: f64,
        original_text: impl Into<String>,
        sentence: impl Into<String>,
        convention: Convention,
    ) -> Result<Self, Rejection> {
        let original_text = original_text.into();
        if original_text.is_empty() {
            return Err(Rejection::EmptyText);
        }
        let (latitude, longitude) = validate_pair(latitude, longitude)?;

        Ok(Self {
            latitude,
            longitude,
            original_text,
            sentence: sentence.into(),
            convention,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Exact substring matched in the source text
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    /// Sentence surrounding the match, possibly truncated
    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    /// Convention of the matcher that produced this coordinate
    pub fn convention(&self) -> Convention {
        self.convention
    }
}
