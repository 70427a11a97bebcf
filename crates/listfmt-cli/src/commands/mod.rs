//! CLI command implementations.

mod chain;
mod check;
mod format;

use std::path::Path;

use listfmt::{DirectoryLoader, FormatCache};
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::debug;

pub use chain::{run_chain, ChainArgs};
pub use check::{run_check, CheckArgs};
pub use format::{run_format, FormatArgs};

/// Open the data directory and read its locale index.
fn open_data(data: &Path) -> Result<(DirectoryLoader, FormatCache)> {
    debug!(data = %data.display(), "opening locale data");
    let loader = DirectoryLoader::new(data);
    let cache = FormatCache::load(&loader)
        .into_diagnostic()
        .wrap_err_with(|| format!("cannot read locale data in {}", data.display()))?;
    Ok((loader, cache))
}
