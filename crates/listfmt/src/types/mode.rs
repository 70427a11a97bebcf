use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which kind of list is being formatted.
///
/// Corresponds to the CLDR list pattern types: conjunctions ("A, B, and C"),
/// disjunctions ("A, B, or C") and unit lists ("3 ft, 7 in").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMode {
    #[default]
    Standard,
    Or,
    Unit,
}

/// Width of the list pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    #[default]
    Default,
    Narrow,
    Short,
}

/// Error returned when parsing an unknown mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown list mode '{0}', expected one of: standard, or, unit")]
pub struct ListModeParseError(pub String);

/// Error returned when parsing an unknown style name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown list style '{0}', expected one of: default, narrow, short")]
pub struct ListStyleParseError(pub String);

impl ListMode {
    pub const ALL: [ListMode; 3] = [ListMode::Standard, ListMode::Or, ListMode::Unit];

    pub fn as_str(self) -> &'static str {
        match self {
            ListMode::Standard => "standard",
            ListMode::Or => "or",
            ListMode::Unit => "unit",
        }
    }
}

impl ListStyle {
    pub const ALL: [ListStyle; 3] = [ListStyle::Default, ListStyle::Narrow, ListStyle::Short];

    pub fn as_str(self) -> &'static str {
        match self {
            ListStyle::Default => "default",
            ListStyle::Narrow => "narrow",
            ListStyle::Short => "short",
        }
    }

    /// Suffix appended to the mode name in locale data keys.
    fn key_suffix(self) -> &'static str {
        match self {
            ListStyle::Default => "",
            ListStyle::Narrow => "Narrow",
            ListStyle::Short => "Short",
        }
    }
}

impl Display for ListMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl Display for ListStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListMode {
    type Err = ListModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ListMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ListModeParseError(s.to_string()))
    }
}

impl FromStr for ListStyle {
    type Err = ListStyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ListStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| ListStyleParseError(s.to_string()))
    }
}

/// Key of one (mode, style) pattern group inside a locale's data.
///
/// Built from the mode name plus a capitalized style suffix, e.g.
/// `"standard"`, `"standardNarrow"`, `"orShort"`.
///
/// ```
/// use listfmt::{ListMode, ListStyle, PatternKey};
///
/// assert_eq!(PatternKey::new(ListMode::Or, ListStyle::Short).as_str(), "orShort");
/// assert_eq!(PatternKey::new(ListMode::Unit, ListStyle::Default).as_str(), "unit");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatternKey(String);

impl PatternKey {
    pub fn new(mode: ListMode, style: ListStyle) -> Self {
        Self(format!("{}{}", mode.as_str(), style.key_suffix()))
    }

    /// All nine (mode, style) combinations, mode-major.
    pub fn all() -> impl Iterator<Item = (ListMode, ListStyle)> {
        ListMode::ALL
            .into_iter()
            .flat_map(|mode| ListStyle::ALL.into_iter().map(move |style| (mode, style)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PatternKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}
