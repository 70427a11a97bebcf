//! Error types for pattern set construction.

use strsim::levenshtein;
use thiserror::Error;

use crate::parser::ParseError;
use crate::patterns::PatternSlot;

/// Names accepted as non-numeric pattern keys.
pub(crate) const SLOT_NAMES: [&str; 3] = ["start", "middle", "end"];

/// An error that prevents a [`PatternSet`](crate::PatternSet) from being built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A template's placeholder syntax could not be parsed.
    #[error("pattern '{slot}': {source}")]
    InvalidTemplate {
        slot: PatternSlot,
        #[source]
        source: ParseError,
    },

    /// A template is missing or does not reference the expected placeholders.
    ///
    /// `found` is `None` when the slot is absent altogether.
    #[error("pattern '{slot}' {}", describe_arity(*expected, found.as_deref()))]
    ArityMismatch {
        slot: PatternSlot,
        expected: usize,
        found: Option<Vec<usize>>,
    },

    /// A key is neither `start`/`middle`/`end` nor a positive item count.
    #[error("unrecognized pattern key '{key}'{}", describe_suggestions(suggestions))]
    UnrecognizedKey {
        key: String,
        suggestions: Vec<String>,
    },
}

fn describe_arity(expected: usize, found: Option<&[usize]>) -> String {
    match found {
        None => "is missing".to_string(),
        Some(found) => format!(
            "must reference placeholders 0..{expected} exactly once each, found {found:?}"
        ),
    }
}

fn describe_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Suggest slot names close to an unrecognized key.
///
/// Keys of up to three characters allow one edit, longer keys allow two.
/// At most three suggestions are returned, closest first.
pub fn compute_suggestions(key: &str, available: &[&str]) -> Vec<String> {
    let max_distance = if key.chars().count() <= 3 { 1 } else { 2 };
    let mut candidates: Vec<(usize, &str)> = available
        .iter()
        .map(|name| (levenshtein(key, name), *name))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    candidates.sort();
    candidates
        .into_iter()
        .take(3)
        .map(|(_, name)| name.to_string())
        .collect()
}
