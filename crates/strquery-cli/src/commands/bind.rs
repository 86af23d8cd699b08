//! Implementation of the `strquery bind` command.

use strquery::{bind, parse_template, BoundArgument, ParamKind, Value};

use crate::commands::report_query;
use crate::output::QueryDiagnostic;

/// Arguments for the bind command.
#[derive(Debug, clap::Args)]
pub struct BindArgs {
    /// Template string with ?0, ?1, ... placeholders
    #[arg(long, required = true)]
    pub template: String,

    /// Arguments in kind=value format (repeatable, in position order).
    ///
    /// Kinds: string, scalar, string-collection, scalar-collection. String
    /// values are taken verbatim; other values are JSON.
    #[arg(short = 'a', long = "arg", value_parser = parse_argument)]
    pub args: Vec<BoundArgument>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Parse a kind=value argument.
fn parse_argument(s: &str) -> Result<BoundArgument, String> {
    let (kind, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid argument format '{}': expected kind=value", s))?;
    let kind: ParamKind = kind.parse().map_err(|e| format!("{}", e))?;
    let value = parse_value(kind, raw)?;
    Ok(BoundArgument::new(kind, value))
}

/// Convert command-line text to a value of the given kind.
///
/// Strings are verbatim so that quotes need no shell-level JSON encoding.
pub fn parse_value(kind: ParamKind, raw: &str) -> Result<Value, String> {
    if kind == ParamKind::String {
        return Ok(Value::String(raw.to_string()));
    }
    let json: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| format!("invalid {} value '{}': {}", kind, raw, e))?;
    Value::from_json(&json).map_err(|e| format!("invalid {} value '{}': {}", kind, raw, e))
}

/// Run the bind command.
pub fn run_bind(args: BindArgs) -> miette::Result<i32> {
    let template = match parse_template(&args.template) {
        Ok(template) => template,
        Err(e) => {
            let diagnostic = QueryDiagnostic::from_parse_error("template", &args.template, &e);
            return Err(diagnostic.into());
        }
    };
    tracing::debug!(
        placeholders = template.placeholders().count(),
        arguments = args.args.len(),
        "binding template"
    );
    report_query(bind(&template, &args.args), args.json)
}
