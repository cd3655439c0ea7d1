mod check;
mod cli;
mod config;
mod data;
mod engine;
mod error;
mod report;
mod session;
mod types;

use crate::error::ShindanError;
use crate::session::Session;
use crate::types::outcome::Outcome;
use clap::Parser;
use std::collections::BTreeSet;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    /// diagnose: nothing qualified, or the filter removed everything.
    /// check: warning findings only.
    pub const NO_MATCH: i32 = 1;
    pub const WARNINGS: i32 = 1;
    /// diagnose: the submission carried no selections.
    /// check: blocking findings.
    pub const EMPTY_SELECTION: i32 = 2;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32, ShindanError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Diagnose(cmd) => {
            let catalog = config::load_catalog(cmd.catalog.as_deref())?;
            let threshold = cmd.threshold.unwrap_or(catalog.threshold);

            let mut selections: BTreeSet<String> = cmd.select.into_iter().collect();
            let mut filter_tags: BTreeSet<String> = cmd.filter.into_iter().collect();
            if let Some(path) = &cmd.answers {
                let answers = config::load_answers(path)?;
                selections.extend(answers.selections);
                filter_tags.extend(answers.filter);
            }

            for tag in &selections {
                if catalog.question_offering(tag).is_none() {
                    eprintln!("warning: no question offers the tag '{tag}'");
                }
            }
            if let Some(question) = catalog.single_choice_violation(&selections) {
                return Err(ShindanError::SingleChoiceViolated(question.text.clone()));
            }

            let mut diagnosis = Session::new();
            diagnosis.submit(selections, &catalog, threshold);
            let diagnosis_report = diagnosis.report(&filter_tags, &catalog)?;

            let output_format = match cmd.format {
                cli::ReportFormat::Text => report::OutputFormat::Text,
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&diagnosis_report, &catalog, output_format)?;
            print!("{rendered}");

            Ok(match diagnosis_report.outcome {
                Outcome::Matched { .. } => exit_code::SUCCESS,
                Outcome::NoMatch { .. } | Outcome::FilteredOut { .. } => exit_code::NO_MATCH,
                Outcome::EmptySelection => exit_code::EMPTY_SELECTION,
            })
        }
        cli::Commands::Questions(cmd) => {
            let catalog = config::load_catalog(cmd.catalog.as_deref())?;
            match cmd.format {
                cli::ListFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&catalog.questions)?);
                }
                cli::ListFormat::Text => {
                    for question in &catalog.questions {
                        let mode = match question.mode {
                            types::catalog::SelectionMode::Single => "single choice",
                            types::catalog::SelectionMode::Multi => "multiple choice",
                        };
                        println!("{}. {} ({})", question.id, question.text, mode);
                        for option in &question.options {
                            println!("   - {option}");
                        }
                    }
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Catalog(cmd) => {
            let catalog = config::load_catalog(cmd.catalog.as_deref())?;
            match cmd.format {
                cli::ListFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&catalog.candidates)?);
                }
                cli::ListFormat::Text => {
                    for (id, candidate) in &catalog.candidates {
                        println!("{id} {}", candidate.name);
                        println!("   {}", candidate.url);
                    }
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check(cmd) => {
            // Parse without validating so broken data can be reported as
            // findings instead of a parse-time refusal.
            let catalog = match cmd.catalog.as_deref() {
                Some(path) => config::parse_catalog(path)?,
                None => data::builtin(),
            };
            let findings = check::catalog_findings(&catalog);

            if findings.is_empty() {
                println!("check: no findings");
                return Ok(exit_code::SUCCESS);
            }

            for finding in &findings {
                let level = if finding.blocking { "BLOCKING" } else { "WARN" };
                println!("[{}] {}: {}", level, finding.id, finding.title);
                println!("  {}", finding.body);
            }

            if findings.iter().any(|finding| finding.blocking) {
                Ok(exit_code::BLOCKING)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
