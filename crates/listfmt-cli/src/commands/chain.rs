//! Implementation of the `listfmt chain` command.

use std::path::Path;

use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Arguments for the chain command.
#[derive(Debug, clap::Args)]
pub struct ChainArgs {
    /// Locale identifier to resolve
    pub locale: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for chain results.
#[derive(Serialize)]
struct ChainJson {
    chain: Vec<String>,
    resolved: Option<String>,
}

/// Run the chain command.
pub fn run_chain(data: &Path, args: ChainArgs) -> Result<i32> {
    let (_, cache) = super::open_data(data)?;
    let index = cache.index();
    let chain = index.search_chain(&args.locale);
    let resolved = index.resolve(&args.locale);
    let code = if resolved.is_some() {
        exitcode::OK
    } else {
        exitcode::DATAERR
    };

    if args.json {
        let output = ChainJson { chain, resolved };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        for identifier in &chain {
            let shown = if identifier.is_empty() {
                "(empty)"
            } else {
                identifier.as_str()
            };
            if resolved.as_deref() == Some(identifier.as_str()) {
                println!("{} {}", "=>".green(), shown.green().bold());
            } else if index.contains(identifier) {
                println!("   {}", shown);
            } else {
                println!("   {}", shown.dimmed());
            }
        }
        match &resolved {
            Some(identifier) if !chain.contains(identifier) => {
                println!("{} {} (fallback)", "=>".green(), identifier.green().bold());
            }
            Some(_) => {}
            None => println!("{}", "no locale data available".red()),
        }
    }

    Ok(code)
}
