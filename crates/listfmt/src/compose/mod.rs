//! List composition.
//!
//! Turns items plus a [`PatternSet`](crate::PatternSet) into a
//! [`ComposedList`]: the final string and the range of every item in it.

mod composer;
mod list;

pub use composer::compose;
pub use list::{ComposedList, Segment, TextUnit, TextUnitParseError};
