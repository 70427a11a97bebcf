//! Validated pattern sets for one (mode, style) combination.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::parser::Pattern;
use crate::patterns::error::{PatternError, SLOT_NAMES, compute_suggestions};

/// Identifies one template within a pattern set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PatternSlot {
    /// Outermost template, joins the first item to the rest.
    Start,
    /// Joins an inner item to the rest.
    Middle,
    /// Innermost template, joins the last two items.
    End,
    /// Template for exactly this many items.
    Fixed(usize),
}

impl PatternSlot {
    /// Parse a raw data key: `"start"`, `"middle"`, `"end"`, or a positive
    /// integer without sign or leading zeros.
    pub fn from_key(key: &str) -> Result<PatternSlot, PatternError> {
        match key {
            "start" => return Ok(PatternSlot::Start),
            "middle" => return Ok(PatternSlot::Middle),
            "end" => return Ok(PatternSlot::End),
            _ => {}
        }

        let canonical_digits =
            !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) && !key.starts_with('0');
        if let Some(count) = key.parse::<usize>().ok().filter(|_| canonical_digits) {
            return Ok(PatternSlot::Fixed(count));
        }

        Err(PatternError::UnrecognizedKey {
            key: key.to_string(),
            suggestions: compute_suggestions(key, &SLOT_NAMES),
        })
    }

    /// Number of placeholders the slot's template must reference.
    pub fn arity(self) -> usize {
        match self {
            PatternSlot::Start | PatternSlot::Middle | PatternSlot::End => 2,
            PatternSlot::Fixed(count) => count,
        }
    }
}

impl Display for PatternSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            PatternSlot::Start => f.write_str("start"),
            PatternSlot::Middle => f.write_str("middle"),
            PatternSlot::End => f.write_str("end"),
            PatternSlot::Fixed(count) => write!(f, "{count}"),
        }
    }
}

/// The `start`, `middle`, `end` and fixed-count templates for one
/// (mode, style) combination.
///
/// A `PatternSet` only exists if every template parsed and has the right
/// arity: `start`/`middle`/`end` reference `{0}` (the new item) and `{1}`
/// (the composed remainder) once each, and a fixed template for `n` items
/// references `{0}`..`{n-1}` once each.
///
/// # Example
///
/// ```
/// use listfmt::PatternSet;
///
/// let set = PatternSet::from_entries([
///     ("2", "{0} and {1}"),
///     ("start", "{0}, {1}"),
///     ("middle", "{0}, {1}"),
///     ("end", "{0}, and {1}"),
/// ])
/// .unwrap();
/// assert_eq!(set.fixed(2).map(|p| p.source()), Some("{0} and {1}"));
/// assert!(set.fixed(3).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSet {
    start: Pattern,
    middle: Pattern,
    end: Pattern,
    fixed: BTreeMap<usize, Pattern>,
}

impl PatternSet {
    /// Build a pattern set from raw `(key, template)` entries.
    ///
    /// Fails on the first entry that cannot be used; no partial set is
    /// ever returned.
    pub fn from_entries<I, K, V>(entries: I) -> Result<PatternSet, PatternError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut start = None;
        let mut middle = None;
        let mut end = None;
        let mut fixed = BTreeMap::new();

        for (key, template) in entries {
            let slot = PatternSlot::from_key(key.as_ref())?;
            let pattern = Pattern::parse(template.as_ref())
                .map_err(|source| PatternError::InvalidTemplate { slot, source })?;

            if !pattern.references_exactly(slot.arity()) {
                return Err(PatternError::ArityMismatch {
                    slot,
                    expected: slot.arity(),
                    found: Some(pattern.placeholders().collect()),
                });
            }

            match slot {
                PatternSlot::Start => start = Some(pattern),
                PatternSlot::Middle => middle = Some(pattern),
                PatternSlot::End => end = Some(pattern),
                PatternSlot::Fixed(count) => {
                    fixed.insert(count, pattern);
                }
            }
        }

        Ok(PatternSet {
            start: require(start, PatternSlot::Start)?,
            middle: require(middle, PatternSlot::Middle)?,
            end: require(end, PatternSlot::End)?,
            fixed,
        })
    }

    pub fn start(&self) -> &Pattern {
        &self.start
    }

    pub fn middle(&self) -> &Pattern {
        &self.middle
    }

    pub fn end(&self) -> &Pattern {
        &self.end
    }

    /// The fixed template for exactly `count` items, if any.
    pub fn fixed(&self, count: usize) -> Option<&Pattern> {
        self.fixed.get(&count)
    }

    /// Item counts that have a fixed template, ascending.
    pub fn fixed_counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.fixed.keys().copied()
    }

    /// Look up any template by slot.
    pub fn pattern(&self, slot: PatternSlot) -> Option<&Pattern> {
        match slot {
            PatternSlot::Start => Some(&self.start),
            PatternSlot::Middle => Some(&self.middle),
            PatternSlot::End => Some(&self.end),
            PatternSlot::Fixed(count) => self.fixed(count),
        }
    }
}

fn require(pattern: Option<Pattern>, slot: PatternSlot) -> Result<Pattern, PatternError> {
    pattern.ok_or(PatternError::ArityMismatch {
        slot,
        expected: slot.arity(),
        found: None,
    })
}
