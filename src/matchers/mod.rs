// WHY: one matcher per textual convention, all sharing the same scan pipeline
// Each matcher only knows its pattern and how to read a pair out of its capture groups

use regex_automata::meta::Regex;
use regex_automata::util::captures::Captures;
use tracing::{debug, info};

use crate::coordinate::{Convention, Coordinate, Rejection};
use crate::sentence_locator::locate_sentence;

pub mod bare_decimal;
pub mod comma_decimal;
pub mod hemisphere;

pub use bare_decimal::BareDecimalMatcher;
pub use comma_decimal::CommaDecimalMatcher;
pub use hemisphere::HemisphereMatcher;

/// Scanner for a single coordinate convention
pub trait CoordinateMatcher: Send + Sync {
    /// Convention this matcher recognizes
    fn convention(&self) -> Convention;

    /// Compiled pattern whose match is the coordinate's original text
    fn pattern(&self) -> &Regex;

    /// Read a raw (latitude, longitude) pair from one match's capture groups
    fn read_pair(&self, text: &str, caps: &Captures) -> Result<(f64, f64), Rejection>;

    /// Scan `text` left to right and keep every match that parses and validates
    ///
    /// Matches never overlap: scanning resumes after the whole matched pair.
    fn find_coordinates(&self, text: &str, max_sentence_len: usize) -> Vec<Coordinate> {
        let convention = self.convention();
        let mut coordinates = Vec::new();
        let mut rejected = 0usize;

        for caps in self.pattern().captures_iter(text) {
            let Some(whole) = caps.get_match() else {
                continue;
            };
            let original_text = &text[whole.range()];

            let outcome = self
                .read_pair(text, &caps)
                .and_then(|(latitude, longitude)| {
                    let sentence = locate_sentence(text, original_text, max_sentence_len);
                    Coordinate::new(latitude, longitude, original_text, sentence, convention)
                });

            match outcome {
                Ok(coordinate) => coordinates.push(coordinate),
                Err(rejection) => {
                    rejected += 1;
                    debug!(%convention, original_text, %rejection, "Discarded candidate");
                }
            }
        }

        info!(
            %convention,
            found = coordinates.len(),
            rejected,
            "Matcher scan complete"
        );
        coordinates
    }
}

/// Text of capture group `index`, or an unparseable-numeral rejection if it did not participate
pub(crate) fn group_text<'t>(
    text: &'t str,
    caps: &Captures,
    index: usize,
) -> Result<&'t str, Rejection> {
    caps.get_group(index)
        .map(|span| &text[span.range()])
        .ok_or_else(|| Rejection::UnparseableNumeral(String::new()))
}

/// Compile a matcher pattern, logging like the other compiled detectors
pub(crate) fn compile_pattern(convention: Convention, pattern: &str) -> anyhow::Result<Regex> {
    let regex = Regex::new(pattern)?;
    debug!(%convention, pattern, "Compiled coordinate pattern");
    Ok(regex)
}
