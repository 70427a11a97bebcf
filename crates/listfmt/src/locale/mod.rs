//! Locale resolution and locale data.
//!
//! [`LocaleIndex`] knows which locales have data and how identifiers
//! inherit from each other. [`FormatCache`] combines it with a
//! [`FormatLoader`] to find, load and keep the data for a requested locale.

mod cache;
mod error;
mod format;
mod index;
mod loader;

pub use cache::{DEFAULT_CAPACITY, FormatCache};
pub use error::LoadError;
pub use format::{Format, ListPatterns};
pub use index::{LocaleIndex, ROOT};
pub use loader::{DirectoryLoader, FormatLoader, LOCALE_INFORMATION, MemoryLoader};
