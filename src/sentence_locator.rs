// WHY: context lookup for a matched coordinate, bounded by '.' characters only
// Kept separate from the matchers so callers can reuse it with their own display length

/// Default maximum sentence length in characters
pub const DEFAULT_MAX_SENTENCE_LEN: usize = 200;

/// Appended when a sentence is cut to the maximum length
pub const TRUNCATION_MARKER: &str = "...";

const SENTENCE_TERMINATOR: char = '.';
const TRIMMED_WHITESPACE: [char; 4] = [' ', '\t', '\n', '\r'];

/// Find the sentence enclosing the first occurrence of `needle` in `text`
///
/// The sentence starts after the nearest `.` before the match (or at the start
/// of the text) and ends at the first `.` after the match, inclusive (or at the
/// end of the text). Later occurrences of the same literal are attributed to
/// the first one. Falls back to `needle` itself when it cannot be found.
pub fn locate_sentence(text: &str, needle: &str, max_len: usize) -> String {
    let Some(match_start) = text.find(needle) else {
        return needle.to_string();
    };
    let match_end = match_start + needle.len();

    let sentence_start = text[..match_start]
        .rfind(SENTENCE_TERMINATOR)
        .map_or(0, |dot| dot + SENTENCE_TERMINATOR.len_utf8());

    // WHY: search after the match, the matched numerals carry their own '.'
    let sentence_end = text[match_end..]
        .find(SENTENCE_TERMINATOR)
        .map_or(text.len(), |dot| match_end + dot + SENTENCE_TERMINATOR.len_utf8());

    let sentence = text[sentence_start..sentence_end].trim_matches(&TRIMMED_WHITESPACE[..]);
    truncate_sentence(sentence, max_len)
}

/// Cut `sentence` to `max_len` characters, appending the truncation marker when cut
pub fn truncate_sentence(sentence: &str, max_len: usize) -> String {
    match sentence.char_indices().nth(max_len) {
        Some((cut, _)) => {
            let mut truncated = String::with_capacity(cut + TRUNCATION_MARKER.len());
            truncated.push_str(&sentence[..cut]);
            truncated.push_str(TRUNCATION_MARKER);
            truncated
        }
        None => sentence.to_string(),
    }
}
