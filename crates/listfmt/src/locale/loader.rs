//! Sources of locale data.
//!
//! The cache never reads files itself; it asks a [`FormatLoader`]. Two
//! loaders are provided: [`DirectoryLoader`] for exported JSON data on disk
//! and [`MemoryLoader`] for data held in memory.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::locale::error::LoadError;
use crate::locale::format::{Format, ListPatterns};
use crate::locale::index::LocaleIndex;

/// Name of the locale information record within a data directory.
pub const LOCALE_INFORMATION: &str = "localeInformation";

/// Supplies locale data to a [`FormatCache`](crate::FormatCache).
pub trait FormatLoader: Send + Sync {
    /// Load the set of known locales and their parent overrides.
    fn load_locale_index(&self) -> Result<LocaleIndex, LoadError>;

    /// Load the list patterns of exactly `identifier` (no fallback).
    fn load_format(&self, identifier: &str) -> Result<Format, LoadError>;
}

/// Loads exported JSON data from a directory.
///
/// Expects `localeInformation.json` plus one `<identifier>.json` per locale.
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    root: PathBuf,
}

impl DirectoryLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<T, LoadError> {
        let path = self.root.join(format!("{name}.json"));
        debug!(path = %path.display(), "reading locale data");

        let content = fs::read_to_string(&path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                LoadError::NotFound {
                    identifier: name.to_string(),
                }
            } else {
                LoadError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        serde_json::from_str(&content).map_err(|source| LoadError::Json { path, source })
    }
}

impl FormatLoader for DirectoryLoader {
    fn load_locale_index(&self) -> Result<LocaleIndex, LoadError> {
        self.read_json(LOCALE_INFORMATION)
    }

    fn load_format(&self, identifier: &str) -> Result<Format, LoadError> {
        if !is_file_safe(identifier) {
            return Err(LoadError::InvalidIdentifier {
                identifier: identifier.to_string(),
            });
        }
        self.read_json(identifier)
    }
}

/// Identifiers become file names, so only subtag characters are accepted.
fn is_file_safe(identifier: &str) -> bool {
    !identifier.is_empty()
        && identifier
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Locale data held in memory.
///
/// # Example
///
/// ```
/// use listfmt::{FormatLoader, LocaleIndex, MemoryLoader};
/// use std::collections::BTreeMap;
///
/// let loader = MemoryLoader::new(LocaleIndex::from_identifiers(["root"]))
///     .with_format("root", BTreeMap::new());
///
/// assert!(loader.load_format("root").is_ok());
/// assert!(loader.load_format("en").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    index: LocaleIndex,
    formats: HashMap<String, ListPatterns>,
}

impl MemoryLoader {
    pub fn new(index: LocaleIndex) -> Self {
        Self {
            index,
            formats: HashMap::new(),
        }
    }

    /// Add the patterns for `identifier`, replacing any previous data.
    pub fn with_format(mut self, identifier: impl Into<String>, patterns: ListPatterns) -> Self {
        self.insert_format(identifier, patterns);
        self
    }

    /// Add the patterns for `identifier`, replacing any previous data.
    pub fn insert_format(&mut self, identifier: impl Into<String>, patterns: ListPatterns) {
        let identifier = LocaleIndex::normalize(&identifier.into());
        self.formats.insert(identifier, patterns);
    }
}

impl FormatLoader for MemoryLoader {
    fn load_locale_index(&self) -> Result<LocaleIndex, LoadError> {
        Ok(self.index.clone())
    }

    fn load_format(&self, identifier: &str) -> Result<Format, LoadError> {
        self.formats
            .get(identifier)
            .map(|patterns| Format::new(identifier, patterns.clone()))
            .ok_or_else(|| LoadError::NotFound {
                identifier: identifier.to_string(),
            })
    }
}
