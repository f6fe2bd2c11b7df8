// WHY: "lat lon" written as two whitespace separated dot decimals, e.g. `45.5 -93.2`

use anyhow::Result;
use regex_automata::meta::Regex;
use regex_automata::util::captures::Captures;

use super::{compile_pattern, group_text, CoordinateMatcher};
use crate::coordinate::{parse_numeral, Convention, Rejection};

/// Signed dot decimal, whitespace, signed dot decimal. Integers and exponents are not accepted.
pub const BARE_DECIMAL_PATTERN: &str = r"(-?\d+\.\d+)\s+(-?\d+\.\d+)";

pub struct BareDecimalMatcher {
    pattern: Regex,
}

impl BareDecimalMatcher {
    pub fn new() -> Result<Self> {
        let pattern = compile_pattern(Convention::BareDecimal, BARE_DECIMAL_PATTERN)?;
        Ok(Self { pattern })
    }
}

impl CoordinateMatcher for BareDecimalMatcher {
    fn convention(&self) -> Convention {
        Convention::BareDecimal
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn read_pair(&self, text: &str, caps: &Captures) -> Result<(f64, f64), Rejection> {
        let latitude = parse_numeral(group_text(text, caps, 1)?)?;
        let longitude = parse_numeral(group_text(text, caps, 2)?)?;
        Ok((latitude, longitude))
    }
}
