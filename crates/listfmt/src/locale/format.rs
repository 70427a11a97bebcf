//! Per-locale list pattern data.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::patterns::{PatternError, PatternSet};
use crate::types::{ListMode, ListStyle, PatternKey};

/// Raw list patterns: pattern key (`"standard"`, `"orShort"`, ...) to
/// template slot (`"start"`, `"middle"`, `"end"`, `"2"`, ...) to template.
pub type ListPatterns = BTreeMap<String, BTreeMap<String, String>>;

const COMBINATIONS: usize = ListMode::ALL.len() * ListStyle::ALL.len();

/// The list pattern data of one locale.
///
/// Holds the raw templates as loaded. A [`PatternSet`] is built the first
/// time its (mode, style) combination is requested and reused afterwards.
///
/// ```
/// use listfmt::{Format, ListMode, ListStyle};
///
/// let format: Format = serde_json::from_str(r#"{
///     "localeIdentifier": "en",
///     "listPatterns": {
///         "or": { "2": "{0} or {1}", "start": "{0}, {1}", "middle": "{0}, {1}", "end": "{0}, or {1}" }
///     }
/// }"#).unwrap();
///
/// assert_eq!(format.locale_identifier(), "en");
/// assert!(format.pattern_set(ListMode::Or, ListStyle::Default).is_some());
/// assert!(format.pattern_set(ListMode::Standard, ListStyle::Default).is_none());
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Format {
    locale_identifier: String,
    list_patterns: ListPatterns,
    #[serde(skip)]
    pattern_sets: [OnceLock<Option<PatternSet>>; COMBINATIONS],
}

impl Format {
    pub fn new(locale_identifier: impl Into<String>, list_patterns: ListPatterns) -> Self {
        Self {
            locale_identifier: locale_identifier.into(),
            list_patterns,
            pattern_sets: Default::default(),
        }
    }

    /// Identifier of the locale this data belongs to.
    pub fn locale_identifier(&self) -> &str {
        &self.locale_identifier
    }

    /// All raw pattern groups.
    pub fn list_patterns(&self) -> &ListPatterns {
        &self.list_patterns
    }

    /// The raw templates for one (mode, style) combination.
    pub fn raw_patterns(
        &self,
        mode: ListMode,
        style: ListStyle,
    ) -> Option<&BTreeMap<String, String>> {
        self.list_patterns
            .get(PatternKey::new(mode, style).as_str())
    }

    /// Build the pattern set for (mode, style) without caching it.
    ///
    /// Returns `Ok(None)` when the locale has no data for the combination.
    pub fn try_pattern_set(
        &self,
        mode: ListMode,
        style: ListStyle,
    ) -> Result<Option<PatternSet>, PatternError> {
        self.raw_patterns(mode, style)
            .map(PatternSet::from_entries)
            .transpose()
    }

    /// The pattern set for (mode, style), built on first use.
    ///
    /// Missing or invalid data yields `None`; invalid data is logged.
    pub fn pattern_set(&self, mode: ListMode, style: ListStyle) -> Option<&PatternSet> {
        self.pattern_sets[slot_index(mode, style)]
            .get_or_init(|| match self.try_pattern_set(mode, style) {
                Ok(Some(set)) => Some(set),
                Ok(None) => {
                    debug!(
                        locale = %self.locale_identifier,
                        key = %PatternKey::new(mode, style),
                        "no list patterns for key"
                    );
                    None
                }
                Err(error) => {
                    warn!(
                        locale = %self.locale_identifier,
                        key = %PatternKey::new(mode, style),
                        %error,
                        "invalid list patterns"
                    );
                    None
                }
            })
            .as_ref()
    }
}

fn slot_index(mode: ListMode, style: ListStyle) -> usize {
    mode as usize * ListStyle::ALL.len() + style as usize
}
