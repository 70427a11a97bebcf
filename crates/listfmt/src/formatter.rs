//! User-facing list formatter.
//!
//! `ListFormatter` holds the configuration of one formatting use site
//! (locale, mode, style) and delegates to the shared cache and the
//! composer. It never fails: data that cannot be resolved formats as an
//! empty string.

use std::sync::Arc;

use bon::Builder;

use crate::compose::{ComposedList, compose};
use crate::locale::{FormatCache, FormatLoader, ROOT};
use crate::types::{ListMode, ListStyle};

/// Formats lists of items for one locale, mode and style.
///
/// # Example
///
/// ```
/// use listfmt::{FormatCache, ListFormatter, ListMode, LocaleIndex, MemoryLoader};
/// use std::collections::BTreeMap;
/// use std::sync::Arc;
///
/// let or = BTreeMap::from([
///     ("2".to_string(), "{0} or {1}".to_string()),
///     ("start".to_string(), "{0}, {1}".to_string()),
///     ("middle".to_string(), "{0}, {1}".to_string()),
///     ("end".to_string(), "{0}, or {1}".to_string()),
/// ]);
/// let index = LocaleIndex::from_identifiers(["root", "en"]);
/// let loader = MemoryLoader::new(index.clone())
///     .with_format("en", BTreeMap::from([("or".to_string(), or)]));
///
/// let formatter = ListFormatter::builder()
///     .locale("en_US")
///     .mode(ListMode::Or)
///     .cache(Arc::new(FormatCache::builder().index(index).build()))
///     .loader(Arc::new(loader))
///     .build();
///
/// assert_eq!(formatter.format(&["tea", "coffee"]), "tea or coffee");
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct ListFormatter {
    /// Locale identifier, with `-` or `_` separators.
    #[builder(default = ROOT.to_string())]
    locale: String,

    #[builder(default)]
    mode: ListMode,

    #[builder(default)]
    style: ListStyle,

    /// Shared cache of resolved locale data.
    cache: Arc<FormatCache>,

    /// Source of locale data on cache misses.
    loader: Arc<dyn FormatLoader>,
}

impl ListFormatter {
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    /// Use a BCP-47 locale, e.g. one negotiated from user preferences.
    pub fn set_icu_locale(&mut self, locale: &icu_locale_core::Locale) {
        self.locale = locale.to_string();
    }

    pub fn mode(&self) -> ListMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ListMode) {
        self.mode = mode;
    }

    pub fn style(&self) -> ListStyle {
        self.style
    }

    pub fn set_style(&mut self, style: ListStyle) {
        self.style = style;
    }

    /// Compose `items`, keeping the range of every item.
    ///
    /// Returns `None` when no data is available for the configured locale,
    /// mode and style.
    pub fn compose<S: AsRef<str>>(&self, items: &[S]) -> Option<ComposedList> {
        let format = self.cache.resolve(&self.locale, self.loader.as_ref())?;
        let patterns = format.pattern_set(self.mode, self.style)?;
        Some(compose(items, patterns))
    }

    /// Format `items` as text, or the empty string when no data is available.
    pub fn format<S: AsRef<str>>(&self, items: &[S]) -> String {
        self.compose(items)
            .map(ComposedList::into_text)
            .unwrap_or_default()
    }
}
