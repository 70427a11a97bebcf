//! Pattern sets: the validated templates for one (mode, style) combination.

mod error;
mod set;

pub use error::{PatternError, compute_suggestions};
pub use set::{PatternSet, PatternSlot};
