// WHY: European style pairs with ',' as the decimal separator, e.g. `48,8566° 2,3522°`

use anyhow::Result;
use regex_automata::meta::Regex;
use regex_automata::util::captures::Captures;

use super::{compile_pattern, group_text, CoordinateMatcher};
use crate::coordinate::{parse_numeral, Convention, Rejection};

/// Signed comma decimal with optional degree mark, whitespace or comma, then another one
pub const COMMA_DECIMAL_PATTERN: &str = r"(-?\d+,\d+)°?[\s,]+(-?\d+,\d+)°?";

pub struct CommaDecimalMatcher {
    pattern: Regex,
}

impl CommaDecimalMatcher {
    pub fn new() -> Result<Self> {
        let pattern = compile_pattern(Convention::CommaDecimal, COMMA_DECIMAL_PATTERN)?;
        Ok(Self { pattern })
    }
}

/// Parse `12,5` as `12.5`
fn parse_comma_numeral(raw: &str) -> Result<f64, Rejection> {
    parse_numeral(&raw.replacen(',', ".", 1))
}

impl CoordinateMatcher for CommaDecimalMatcher {
    fn convention(&self) -> Convention {
        Convention::CommaDecimal
    }

    fn pattern(&self) -> &Regex {
        &self.pattern
    }

    fn read_pair(&self, text: &str, caps: &Captures) -> Result<(f64, f64), Rejection> {
        let latitude = parse_comma_numeral(group_text(text, caps, 1)?)?;
        let longitude = parse_comma_numeral(group_text(text, caps, 2)?)?;
        Ok((latitude, longitude))
    }
}
