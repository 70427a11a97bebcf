//! Implementation of the `listfmt check` command.

use std::path::Path;

use listfmt::{FormatLoader, PatternKey};
use miette::{IntoDiagnostic, Report, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::output::table::{format_problems_table, Problem};
use crate::output::TemplateDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for check results.
#[derive(Serialize)]
struct CheckJson<'a> {
    locales: usize,
    problems: &'a [Problem],
}

/// Run the check command.
pub fn run_check(data: &Path, args: CheckArgs) -> Result<i32> {
    let (loader, cache) = super::open_data(data)?;
    let index = cache.index();

    let mut problems = Vec::new();
    let mut reports = Vec::new();
    for identifier in index.identifiers() {
        let format = match loader.load_format(identifier) {
            Ok(format) => format,
            Err(e) => {
                problems.push(Problem {
                    locale: identifier.to_string(),
                    key: None,
                    message: e.to_string(),
                });
                continue;
            }
        };

        for (mode, style) in PatternKey::all() {
            let key = PatternKey::new(mode, style);
            let message = match format.try_pattern_set(mode, style) {
                Ok(Some(_)) => continue,
                Ok(None) => "no patterns".to_string(),
                Err(e) => {
                    if let Some(diagnostic) =
                        TemplateDiagnostic::from_pattern_error(identifier, &key, &e)
                    {
                        reports.push(Report::new(diagnostic));
                    }
                    e.to_string()
                }
            };
            problems.push(Problem {
                locale: identifier.to_string(),
                key: Some(key.to_string()),
                message,
            });
        }
    }

    let locales = index.identifiers().count();
    if args.json {
        let output = CheckJson {
            locales,
            problems: &problems,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else if problems.is_empty() {
        println!("{} {} locales checked", "ok:".green().bold(), locales);
    } else {
        for report in &reports {
            eprintln!("{:?}", report);
        }
        println!("{}", format_problems_table(&problems));
        println!(
            "{} {} problems in {} locales",
            "error:".red().bold(),
            problems.len(),
            locales
        );
    }

    Ok(if problems.is_empty() {
        exitcode::OK
    } else {
        exitcode::DATAERR
    })
}
