//! Shared helpers for the per-command parsers.

use crate::index::Index;
use crate::parser::syntax::Prefix;
use crate::parser::tokenizer::{tokenize, ArgumentMultimap};
use crate::parser::{ParseError, ParseResult};
use std::collections::BTreeSet;

/// Parses one 1-based index. Rejects signs, zero and non-digits.
pub fn parse_index(raw: &str) -> ParseResult<Index> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

/// Parses whitespace-separated indices, keeping input order.
///
/// Fails with [`ParseError::DuplicateIndex`] when one index repeats.
pub fn parse_indices(raw: &str) -> ParseResult<Vec<Index>> {
    let mut seen = BTreeSet::new();
    let mut indices = Vec::new();
    for token in raw.split_whitespace() {
        let index = parse_index(token)?;
        if !seen.insert(index) {
            return Err(ParseError::DuplicateIndex);
        }
        indices.push(index);
    }
    if indices.is_empty() {
        return Err(ParseError::InvalidIndex);
    }
    Ok(indices)
}

/// Maps a bad index to the command's format error; duplicates pass through.
pub fn with_usage<T>(result: ParseResult<T>, usage: &'static str) -> ParseResult<T> {
    result.map_err(|err| match err {
        ParseError::InvalidIndex => ParseError::InvalidFormat { usage },
        other => other,
    })
}

/// Tokenizes and checks presence of `required` and absence of a preamble.
pub fn tokenize_required(
    args: &str,
    declared: &[Prefix],
    required: &[Prefix],
    usage: &'static str,
) -> ParseResult<ArgumentMultimap> {
    let map = tokenize(args, declared)?;
    if !map.contains_all(required) || !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat { usage });
    }
    Ok(map)
}

/// Splits a keyword list; empty input is a format error.
pub fn parse_keywords(raw: &str, usage: &'static str) -> ParseResult<Vec<String>> {
    let keywords: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::InvalidFormat { usage });
    }
    Ok(keywords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_rejects_zero_sign_and_text() {
        assert_eq!(parse_index("0"), Err(ParseError::InvalidIndex));
        assert_eq!(parse_index("+1"), Err(ParseError::InvalidIndex));
        assert_eq!(parse_index("-1"), Err(ParseError::InvalidIndex));
        assert_eq!(parse_index("one"), Err(ParseError::InvalidIndex));
        assert_eq!(parse_index(" 2 ").unwrap().zero_based(), 1);
    }

    #[test]
    fn indices_keep_order_and_reject_repeats() {
        let indices = parse_indices("3 1").unwrap();
        assert_eq!(
            indices.iter().map(|index| index.one_based()).collect::<Vec<_>>(),
            vec![3, 1]
        );
        assert_eq!(parse_indices("1 2 1"), Err(ParseError::DuplicateIndex));
        assert_eq!(parse_indices(""), Err(ParseError::InvalidIndex));
    }
}
