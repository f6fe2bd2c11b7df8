// End-to-end checks of the public extraction API
// WHY: the aggregated report is what the CLI and external callers consume

use coordscan::{
    locate_sentence, BareDecimalMatcher, CommaDecimalMatcher, Convention, CoordinateExtractor,
    CoordinateMatcher, ExtractionConfig, HemisphereMatcher, DEFAULT_MAX_SENTENCE_LEN,
};

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::MIXED_CONVENTIONS;

fn pairs(matcher: &dyn CoordinateMatcher, text: &str) -> Vec<(f64, f64)> {
    matcher
        .find_coordinates(text, DEFAULT_MAX_SENTENCE_LEN)
        .iter()
        .map(|c| (c.latitude(), c.longitude()))
        .collect()
}

#[test]
fn test_each_convention_recovers_pair() {
    let bare = BareDecimalMatcher::new().unwrap();
    let hemisphere = HemisphereMatcher::new().unwrap();
    let comma = CommaDecimalMatcher::new().unwrap();

    assert_eq!(pairs(&bare, "-89.999 179.5"), vec![(-89.999, 179.5)]);
    assert_eq!(pairs(&bare, "0.0 -0.5"), vec![(0.0, -0.5)]);
    assert_eq!(pairs(&hemisphere, "N45.5 W93.2"), vec![(45.5, -93.2)]);
    assert_eq!(pairs(&hemisphere, "S45.5 E93.2"), vec![(-45.5, 93.2)]);
    assert_eq!(pairs(&comma, "48,8566 2,3522"), vec![(48.8566, 2.3522)]);
}

#[test]
fn test_out_of_range_never_reported() {
    let extractor = CoordinateExtractor::with_default_config().unwrap();
    let text = "Bad: 91.0 45.0. Bad: 45.0 181.0. Bad: N90.5 E1.0. Bad: 1,0 -180,5.";
    let report = extractor.extract(text);

    assert!(report.is_empty(), "unexpected matches: {:?}", report.coordinates);
    assert_eq!(report.total(), 0);
}

#[test]
fn test_mixed_document_order_and_context() {
    let extractor = CoordinateExtractor::with_default_config().unwrap();
    let report = extractor.extract(MIXED_CONVENTIONS);

    assert_eq!(report.total(), 3);

    let bare = &report.coordinates[0];
    assert_eq!(bare.convention(), Convention::BareDecimal);
    assert_eq!((bare.latitude(), bare.longitude()), (27.9881, 86.9250));
    assert_eq!(bare.sentence(), "Base camp sits at 27.9881 86.9250 below the summit.");

    let hemisphere = &report.coordinates[1];
    assert_eq!(hemisphere.convention(), Convention::HemisphereLetter);
    assert_eq!((hemisphere.latitude(), hemisphere.longitude()), (-33.85, 151.21));
    assert_eq!(hemisphere.sentence(), "The buoy drifted to S33.85 E151.21 overnight.");

    let comma = &report.coordinates[2];
    assert_eq!(comma.convention(), Convention::CommaDecimal);
    assert_eq!((comma.latitude(), comma.longitude()), (47.2692, 11.4041));
    assert_eq!(comma.sentence(), "Die Hütte liegt bei 47,2692 11,4041 im Tal.");
}

#[test]
fn test_counts_are_derivable_from_coordinates() {
    let extractor = CoordinateExtractor::with_default_config().unwrap();
    let text = format!("{MIXED_CONVENTIONS} Extra 1.0 2.0 3.0 4.0 and n5.5e6.5.");
    let report = extractor.extract(&text);

    for convention in Convention::ALL {
        let tagged = report
            .coordinates
            .iter()
            .filter(|c| c.convention() == convention)
            .count();
        assert_eq!(report.count_for(convention), tagged, "count mismatch for {convention}");
    }
    assert_eq!(report.count_for(Convention::BareDecimal), 3);
    assert_eq!(report.count_for(Convention::HemisphereLetter), 2);
    assert_eq!(report.total(), report.coordinates.len());
}

#[test]
fn test_repeated_literal_uses_first_sentence() {
    let extractor = CoordinateExtractor::with_default_config().unwrap();
    let report = extractor.extract("Alpha hut 10.5 20.5. Beta hut 10.5 20.5.");

    assert_eq!(report.total(), 2);
    assert_eq!(report.coordinates[0].sentence(), "Alpha hut 10.5 20.5.");
    assert_eq!(report.coordinates[1].sentence(), "Alpha hut 10.5 20.5.");
}

#[test]
fn test_sentence_truncation_through_extractor() {
    let extractor = CoordinateExtractor::new(ExtractionConfig { max_sentence_len: 20 }).unwrap();
    let report = extractor.extract("The survey marker was finally found at 12.5 45.25 today.");

    let sentence = report.coordinates[0].sentence();
    assert_eq!(sentence, "The survey marker wa...");
    assert_eq!(sentence.chars().count(), 23);
}

#[test]
fn test_locator_public_contract() {
    let text = "Hello. The point 45.5 93.2 is here. Next sentence.";
    assert_eq!(locate_sentence(text, "45.5 93.2", 200), "The point 45.5 93.2 is here.");
    assert_eq!(locate_sentence(text, "absent", 200), "absent");
}

#[test]
fn test_empty_and_whitespace_inputs() {
    let extractor = CoordinateExtractor::with_default_config().unwrap();
    for text in ["", " ", "\n\r\n\t"] {
        assert!(extractor.extract(text).is_empty());
        assert!(extractor.extract_parallel(text).is_empty());
    }
}
