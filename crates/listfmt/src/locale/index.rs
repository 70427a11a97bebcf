//! Locale identifiers and inheritance.
//!
//! Implements the locale inheritance search chain described in
//! <https://unicode.org/reports/tr35/#Locale_Inheritance>: each identifier
//! falls back to an explicit parent if one is listed, otherwise to the
//! identifier with its last subtag removed, and finally to `root`.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;
use tracing::warn;

/// The identifier every inheritance chain ends in.
pub const ROOT: &str = "root";

/// Known locale identifiers and explicit parent overrides.
///
/// All identifiers are normalized with [`LocaleIndex::normalize`] on the way
/// in, so `zh-Hant-HK` and `zh_Hant_HK` are the same locale everywhere.
///
/// Deserializes from the `localeInformation` record:
///
/// ```
/// use listfmt::LocaleIndex;
///
/// let index: LocaleIndex = serde_json::from_str(r#"{
///     "localeIdentifiers": ["root", "en", "en_001"],
///     "parentLocale": { "en-IN": "en_001" }
/// }"#).unwrap();
///
/// assert_eq!(index.search_chain("en-IN"), vec!["en_IN", "en_001", "en", "root"]);
/// assert_eq!(index.resolve("en_IN").as_deref(), Some("en_001"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "LocaleInformation")]
pub struct LocaleIndex {
    identifiers: BTreeSet<String>,
    parents: BTreeMap<String, String>,
}

/// Wire format of the locale information record.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LocaleInformation {
    #[serde(default)]
    locale_identifiers: Vec<String>,
    #[serde(default)]
    parent_locale: BTreeMap<String, String>,
}

impl From<LocaleInformation> for LocaleIndex {
    fn from(info: LocaleInformation) -> Self {
        LocaleIndex::new(info.locale_identifiers, info.parent_locale)
    }
}

impl LocaleIndex {
    /// Create an index from known identifiers and `child -> parent` overrides.
    pub fn new<I, P, S, K, V>(identifiers: I, parents: P) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        P: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self {
            identifiers: identifiers
                .into_iter()
                .map(|id| Self::normalize(id.as_ref()))
                .collect(),
            parents: parents
                .into_iter()
                .map(|(child, parent)| {
                    (
                        Self::normalize(child.as_ref()),
                        Self::normalize(parent.as_ref()),
                    )
                })
                .collect(),
        }
    }

    /// Create an index without parent overrides.
    pub fn from_identifiers<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(identifiers, Vec::<(String, String)>::new())
    }

    /// Unify subtag separators: `-` becomes `_`.
    pub fn normalize(identifier: &str) -> String {
        identifier.replace('-', "_")
    }

    /// Returns true if data exists for `identifier`.
    pub fn contains(&self, identifier: &str) -> bool {
        self.identifiers.contains(&Self::normalize(identifier))
    }

    /// Known identifiers, sorted.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.identifiers.iter().map(String::as_str)
    }

    /// Explicit `child -> parent` overrides, sorted by child.
    pub fn parents(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parents
            .iter()
            .map(|(child, parent)| (child.as_str(), parent.as_str()))
    }

    /// The next identifier to try after `identifier`.
    ///
    /// Returns `None` for the empty identifier and for `root`.
    pub fn parent_of(&self, identifier: &str) -> Option<String> {
        let identifier = Self::normalize(identifier);
        if identifier.is_empty() || identifier == ROOT {
            return None;
        }

        if let Some(parent) = self.parents.get(&identifier) {
            return Some(parent.clone());
        }

        let mut subtags: Vec<&str> = identifier.split('_').filter(|s| !s.is_empty()).collect();
        subtags.pop();
        if subtags.is_empty() {
            Some(ROOT.to_string())
        } else {
            Some(subtags.join("_"))
        }
    }

    /// The full inheritance chain starting at `identifier` (normalized).
    ///
    /// Ends in `root` unless `identifier` is empty.
    pub fn search_chain(&self, identifier: &str) -> Vec<String> {
        let mut chain = vec![Self::normalize(identifier)];
        while let Some(parent) = chain.last().and_then(|last| self.parent_of(last)) {
            if chain.contains(&parent) {
                warn!(identifier, parent = %parent, "cycle in parent locale overrides");
                if !chain.iter().any(|id| id == ROOT) {
                    chain.push(ROOT.to_string());
                }
                break;
            }
            chain.push(parent);
        }
        chain
    }

    /// The closest identifier in the chain that has data.
    ///
    /// Falls back to `root` when nothing in the chain is known and `root`
    /// is; returns `None` when `root` is unknown too.
    pub fn resolve(&self, identifier: &str) -> Option<String> {
        self.search_chain(identifier)
            .into_iter()
            .find(|candidate| self.identifiers.contains(candidate))
            .or_else(|| self.identifiers.contains(ROOT).then(|| ROOT.to_string()))
    }
}
