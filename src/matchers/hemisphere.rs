// WHY: hemisphere-prefixed pairs such as `N45.5 W93.2`, sign comes from the letter

use anyhow::Result;
use regex_automata::meta::Regex;
use regex_automata::util::captures::Captures;

use super::{compile_pattern, group_text, CoordinateMatcher};
use crate::coordinate::{parse_numeral, Convention, Rejection};

/// N|S decimal, optional whitespace, W|E decimal, as a whole word.
/// Letters are ASCII only, in either case.
pub const HEMISPHERE_PATTERN: &str = r"\b([NnSs])(\d+\.\d+)\s*([WwEe])(\d+\.\d+)\b";

pub struct HemisphereMatcher {
    pattern: Regex,
}

impl HemisphereMatcher {
    pub fn new() -> Result<Self> {
        let pattern = compile_pattern(Convention::HemisphereLetter, HEMISPHERE_PATTERN)?;
        Ok(Self { pattern })
    }
}

/// Apply the hemisphere sign: south and west are negative
fn signed(magnitude: f64, letter: &str, negative: char) -> f64 {
    let is_negative = letter
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&negative));
    if is_negative {
        -magnitude
    } else {
        magnitude
    }
}

impl CoordinateMatcher for HemisphereMatcher {
    fn convention(&self) -> Convention {
        Convention::HemisphereLetter
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn read_pair(&self, text: &str, caps: &Captures) -> Result<(f64, f64), Rejection> {
        let latitude = parse_numeral(group_text(text, caps, 2)?)?;
        let longitude = parse_numeral(group_text(text, caps, 4)?)?;
        Ok((
            signed(latitude, group_text(text, caps, 1)?, 'S'),
            signed(longitude, group_text(text, caps, 3)?, 'W'),
        ))
    }
}
