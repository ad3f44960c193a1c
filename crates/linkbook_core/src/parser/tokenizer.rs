//! Prefix tokenizer.
//!
//! # Responsibility
//! - Split an argument string into a preamble and per-prefix value lists.
//!
//! # Invariants
//! - A prefix is recognized only at string start or right after whitespace.
//! - Repeated prefixes keep every value, in input order.
//! - Values and preamble are trimmed; empty values are kept.
//! - No value and no preamble may contain `/` once tokenized.

use crate::parser::syntax::Prefix;
use crate::parser::{ParseError, ParseResult};
use std::collections::BTreeMap;

/// Tokenized arguments: preamble plus values keyed by prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: BTreeMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value supplied for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    pub fn contains_all(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|prefix| self.contains(*prefix))
    }

    /// Fails naming every prefix in `prefixes` that was given more than once.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> ParseResult<()> {
        let duplicated: Vec<Prefix> = prefixes
            .iter()
            .copied()
            .filter(|prefix| self.all_values(*prefix).len() > 1)
            .collect();
        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes(duplicated))
        }
    }
}

/// Tokenizes `args` against the declared `prefixes`.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ParseResult<ArgumentMultimap> {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|prefix| {
            args.match_indices(prefix.as_str())
                .filter(|(start, _)| is_boundary(args, *start))
                .map(move |(start, _)| (start, *prefix))
        })
        .collect();
    positions.sort_by_key(|(start, _)| *start);

    let preamble_end = positions.first().map_or(args.len(), |(start, _)| *start);
    let preamble = args[..preamble_end].trim();
    if preamble.contains('/') {
        return Err(ParseError::Tokenize { prefix: None });
    }

    let mut multimap = ArgumentMultimap {
        preamble: preamble.to_string(),
        values: BTreeMap::new(),
    };

    for (slot, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions
            .get(slot + 1)
            .map_or(args.len(), |(next, _)| *next);
        let value = args[value_start..value_end].trim();
        if value.contains('/') {
            return Err(ParseError::Tokenize {
                prefix: Some(*prefix),
            });
        }
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(value.to_string());
    }

    Ok(multimap)
}

fn is_boundary(args: &str, start: usize) -> bool {
    args[..start]
        .chars()
        .next_back()
        .map_or(true, char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::syntax::{PREFIX_DESCRIPTION, PREFIX_NAME, PREFIX_TODO_DESCRIPTION};

    #[test]
    fn prefix_inside_a_word_is_not_recognized() {
        let map = tokenize(" td/Call venue", &[PREFIX_DESCRIPTION, PREFIX_TODO_DESCRIPTION]).unwrap();
        assert_eq!(map.value(PREFIX_TODO_DESCRIPTION), Some("Call venue"));
        assert!(!map.contains(PREFIX_DESCRIPTION));
    }

    #[test]
    fn value_runs_until_the_next_recognized_prefix() {
        let map = tokenize("1 2 n/Alex Yeoh d/x", &[PREFIX_NAME, PREFIX_DESCRIPTION]).unwrap();
        assert_eq!(map.preamble(), "1 2");
        assert_eq!(map.value(PREFIX_NAME), Some("Alex Yeoh"));
        assert_eq!(map.value(PREFIX_DESCRIPTION), Some("x"));
    }

    #[test]
    fn unknown_prefix_inside_value_trips_slash_policy() {
        let err = tokenize(" n/Alex x/y", &[PREFIX_NAME]).unwrap_err();
        assert_eq!(err, ParseError::Tokenize { prefix: Some(PREFIX_NAME) });
    }
}
