mod mode;

pub use mode::{ListMode, ListModeParseError, ListStyle, ListStyleParseError, PatternKey};
