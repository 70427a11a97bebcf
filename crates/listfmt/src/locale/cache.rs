//! Bounded cache of loaded locale data.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bon::Builder;
use lru::LruCache;
use tracing::{debug, warn};

use crate::locale::error::LoadError;
use crate::locale::format::Format;
use crate::locale::index::LocaleIndex;
use crate::locale::loader::FormatLoader;

/// Number of locales kept when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 5;

/// Resolves locale identifiers to their closest available data and keeps the
/// most recently used results.
///
/// Entries are keyed by the resolved identifier, so `en_GB` and `en_AU`
/// falling back to the same data share one [`Format`]. When more than
/// `capacity` locales are cached, the least recently used one is dropped.
/// Failed loads are never cached.
///
/// # Example
///
/// ```
/// use listfmt::{FormatCache, LocaleIndex, MemoryLoader};
/// use std::collections::BTreeMap;
///
/// let index = LocaleIndex::from_identifiers(["root", "en"]);
/// let loader = MemoryLoader::new(index.clone())
///     .with_format("root", BTreeMap::new())
///     .with_format("en", BTreeMap::new());
/// let cache = FormatCache::builder().index(index).capacity(2).build();
///
/// let format = cache.resolve("en-GB", &loader).unwrap();
/// assert_eq!(format.locale_identifier(), "en");
/// assert!(cache.contains("en"));
/// ```
#[derive(Builder)]
pub struct FormatCache {
    /// Known locales and parent overrides used for resolution.
    index: LocaleIndex,

    /// Maximum number of cached locales (at least 1).
    #[builder(default = DEFAULT_CAPACITY)]
    capacity: usize,

    #[builder(skip = Mutex::new(LruCache::unbounded()))]
    entries: Mutex<LruCache<String, Arc<Format>>>,
}

impl FormatCache {
    /// Build a cache with the default capacity from the loader's locale index.
    pub fn load(loader: &(impl FormatLoader + ?Sized)) -> Result<FormatCache, LoadError> {
        let index = loader.load_locale_index()?;
        Ok(FormatCache::builder().index(index).build())
    }

    pub fn index(&self) -> &LocaleIndex {
        &self.index
    }

    pub fn capacity(&self) -> usize {
        self.capacity.max(1)
    }

    /// Number of cached locales.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns true if data for the resolved `identifier` is cached.
    ///
    /// Does not count as a use for eviction purposes.
    pub fn contains(&self, identifier: &str) -> bool {
        self.lock().contains(&LocaleIndex::normalize(identifier))
    }

    /// The identifier whose data would serve `locale`, if any.
    pub fn resolve_identifier(&self, locale: &str) -> Option<String> {
        self.index.resolve(locale)
    }

    /// The data serving `locale`, loading it through `loader` on a miss.
    ///
    /// Returns `None` when neither the locale, its ancestors, nor `root` are
    /// known, or when loading fails.
    pub fn resolve(
        &self,
        locale: &str,
        loader: &(impl FormatLoader + ?Sized),
    ) -> Option<Arc<Format>> {
        let Some(identifier) = self.resolve_identifier(locale) else {
            debug!(locale, "no locale data in inheritance chain");
            return None;
        };

        let cached = self.lock().get(&identifier).cloned();
        if let Some(format) = cached {
            debug!(locale, identifier = %identifier, "locale data cache hit");
            return Some(format);
        }

        debug!(locale, identifier = %identifier, "locale data cache miss");
        let format = match loader.load_format(&identifier) {
            Ok(format) => Arc::new(format),
            Err(error) => {
                warn!(locale, identifier = %identifier, %error, "failed to load locale data");
                return None;
            }
        };

        let mut entries = self.lock();
        if let Some(existing) = entries.get(&identifier) {
            // Another thread finished loading first.
            return Some(Arc::clone(existing));
        }
        entries.put(identifier, Arc::clone(&format));
        while entries.len() > self.capacity() {
            if let Some((evicted, _)) = entries.pop_lru() {
                debug!(evicted = %evicted, "evicted locale data");
            }
        }
        Some(format)
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<String, Arc<Format>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
