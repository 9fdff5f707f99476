use crate::analysis::stopwords::StopWords;
use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::core::error::{Error, Result};
use crate::query::types::ParsedQuery;

/// Parses a raw query string into plus/minus word sets, skipping stop words
/// (§4.5). Grounded on the classic plus/minus search-query grammar: a `-`
/// prefix marks a negated word, a bare `-` or a `-` immediately followed by
/// another `-` is a malformed query.
pub fn parse(raw_query: &str, stop_words: &StopWords) -> Result<ParsedQuery> {
    let mut parsed = ParsedQuery::default();

    for word in split_into_words(raw_query) {
        if !is_valid_word(word) {
            return Err(Error::invalid_input(format!(
                "query word '{word}' contains a control character"
            )));
        }

        let (text, is_minus) = match word.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (word, false),
        };

        if is_minus && (text.is_empty() || text.starts_with('-')) {
            return Err(Error::invalid_input(format!(
                "malformed negated word '{word}'"
            )));
        }

        if stop_words.contains(text) {
            continue;
        }

        if is_minus {
            parsed.minus_words.insert(text.to_owned());
        } else {
            parsed.plus_words.insert(text.to_owned());
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops(text: &str) -> StopWords {
        StopWords::from_text(text).unwrap()
    }

    #[test]
    fn splits_plus_and_minus_words() {
        let query = parse("fluffy cat -angry", &stops("")).unwrap();
        assert!(query.plus_words.contains("fluffy"));
        assert!(query.plus_words.contains("cat"));
        assert!(query.minus_words.contains("angry"));
    }

    #[test]
    fn stop_words_are_dropped_from_both_sets() {
        let query = parse("cat и -на", &stops("и на")).unwrap();
        assert_eq!(query.plus_words.len(), 1);
        assert!(query.minus_words.is_empty());
    }

    #[test]
    fn a_bare_minus_is_rejected() {
        assert!(parse("cat -", &stops("")).is_err());
    }

    #[test]
    fn a_double_minus_is_rejected() {
        assert!(parse("cat --angry", &stops("")).is_err());
    }

    #[test]
    fn a_control_character_is_rejected() {
        assert!(parse("ca\tt", &stops("")).is_err());
    }
}
