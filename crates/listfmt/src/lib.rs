//! Locale-aware list formatting with per-item range tracking.
//!
//! Joins a sequence of items into one phrase using CLDR list patterns
//! ("Liam, Jack, and Joe", "ليام وليندا وكوكباد") and reports where every
//! item ended up in the result, so each one can be styled on its own.

pub mod compose;
pub mod formatter;
pub mod locale;
pub mod parser;
pub mod patterns;
pub mod types;

pub use compose::{ComposedList, Segment, TextUnit, compose};
pub use formatter::ListFormatter;
pub use locale::{
    DirectoryLoader, Format, FormatCache, FormatLoader, ListPatterns, LoadError, LocaleIndex,
    MemoryLoader, ROOT,
};
pub use parser::{ParseError, Pattern, Token};
pub use patterns::{PatternError, PatternSet, PatternSlot};
pub use types::{ListMode, ListStyle, PatternKey};
