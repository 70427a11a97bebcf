//! List pattern template parser.
//!
//! Templates use CLDR ordinal placeholders (`{0}`, `{1}`, ...). Everything
//! else is literal text and is kept verbatim.

pub mod ast;
pub mod error;
mod template;

pub use ast::{Pattern, Token};
pub use error::ParseError;
pub use template::tokenize;
