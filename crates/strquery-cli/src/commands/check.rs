//! Implementation of the `strquery check` command.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use miette::{miette, IntoDiagnostic, Report, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use strquery::{DefinitionError, QueryMethod, RepositoryDefinition};

use crate::output::table::{format_methods_table, MethodRow};
use crate::output::QueryDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Repository definition files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with non-zero code on warnings, not only on errors
    #[arg(long)]
    pub strict: bool,
}

/// JSON output format for one checked file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    methods: Vec<MethodJson>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

/// JSON output format for one valid method.
#[derive(Debug, Serialize)]
struct MethodJson {
    name: String,
    params: Vec<String>,
    placeholders: usize,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let mut reports = Vec::new();
    let mut error_count = 0;
    let mut warning_count = 0;

    for path in &args.files {
        let content = read_to_string(path)
            .into_diagnostic()
            .map_err(|e| miette!("Failed to read repository file {:?}: {}", path, e))?;
        let report = check_file(path, &content, args.json);
        error_count += report.errors.len();
        warning_count += report.warnings.len();
        reports.push(report);
    }

    if args.json {
        let json_output = serde_json::to_string_pretty(&reports).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    if error_count > 0 || (args.strict && warning_count > 0) {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Check a single repository file, printing diagnostics unless `quiet`.
fn check_file(path: &Path, content: &str, quiet: bool) -> FileReport {
    let mut report = FileReport {
        file: path.display().to_string(),
        methods: Vec::new(),
        warnings: Vec::new(),
        errors: Vec::new(),
    };

    let repository: RepositoryDefinition = match serde_json::from_str(content) {
        Ok(repository) => repository,
        Err(e) => {
            report.errors.push(e.to_string());
            if !quiet {
                let diagnostic = QueryDiagnostic::from_json_error(path, content, &e);
                eprintln!("{:?}", Report::new(diagnostic));
            }
            return report;
        }
    };

    let mut seen = Vec::new();
    for definition in repository.methods {
        let name = definition.name.clone();
        let query = definition.query.clone();
        if seen.contains(&name) {
            let error = DefinitionError::DuplicateMethod { name };
            report.errors.push(error.to_string());
            continue;
        }
        seen.push(name.clone());

        match QueryMethod::compile(definition) {
            Ok(method) => {
                report
                    .warnings
                    .extend(method.warnings().iter().map(ToString::to_string));
                report.methods.push(MethodJson {
                    name,
                    params: method.params().iter().map(ToString::to_string).collect(),
                    placeholders: method.template().placeholders().count(),
                });
            }
            Err(DefinitionError::Parse { method, source }) => {
                report.errors.push(format!("query method '{}': {}", method, source));
                if !quiet {
                    let label = format!("{}#{}", path.display(), method);
                    let diagnostic = QueryDiagnostic::from_parse_error(&label, &query, &source);
                    eprintln!("{:?}", Report::new(diagnostic));
                }
            }
            Err(e) => report.errors.push(e.to_string()),
        }
    }
    report
}

/// Print a human-readable report for one file.
fn print_report(report: &FileReport) {
    println!("{}", report.file.bold());
    let rows: Vec<MethodRow> = report
        .methods
        .iter()
        .map(|m| MethodRow {
            name: m.name.clone(),
            params: m.params.join(", "),
            placeholders: m.placeholders,
        })
        .collect();
    if !rows.is_empty() {
        println!("{}", format_methods_table(&rows));
    }
    for warning in &report.warnings {
        println!("  {} {}", "warning:".yellow(), warning);
    }
    for error in &report.errors {
        println!("  {} {}", "error:".red(), error);
    }
    if report.errors.is_empty() {
        println!("  {} {} methods", "ok".green(), report.methods.len());
    }
}
