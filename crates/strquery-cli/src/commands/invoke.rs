//! Implementation of the `strquery invoke` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use miette::miette;
use strquery::{BindError, DefinitionError, QueryRegistry, Value};

use crate::commands::bind::parse_value;
use crate::commands::report_query;
use crate::output::QueryDiagnostic;

/// Arguments for the invoke command.
#[derive(Debug, clap::Args)]
pub struct InvokeArgs {
    /// Repository definition file (.json)
    #[arg(long, short = 'r', required = true)]
    pub repository: PathBuf,

    /// Query method name
    #[arg(long, short = 'm', required = true)]
    pub method: String,

    /// Argument values in position order. String parameters take the text
    /// verbatim; other parameters take JSON.
    pub values: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the invoke command.
pub fn run_invoke(args: InvokeArgs) -> miette::Result<i32> {
    let registry = match QueryRegistry::from_file(&args.repository) {
        Ok(registry) => registry,
        Err(DefinitionError::Json { source }) => {
            let content = read_to_string(&args.repository).unwrap_or_default();
            let diagnostic = QueryDiagnostic::from_json_error(&args.repository, &content, &source);
            return Err(diagnostic.into());
        }
        Err(DefinitionError::Parse { method, source }) => {
            return Err(miette!(
                "{}: query method '{}' has an invalid template: {}",
                args.repository.display(),
                method,
                source
            ));
        }
        Err(e) => return Err(miette!("{}", e)),
    };

    let Some(method) = registry.get(&args.method) else {
        return report_query(registry.create_query(&args.method, &[]), args.json);
    };

    if method.params().len() != args.values.len() {
        let error = BindError::ArgumentCount {
            method: args.method.clone(),
            expected: method.params().len(),
            got: args.values.len(),
        };
        return report_query(Err(error), args.json);
    }

    let values: Vec<Value> = method
        .params()
        .iter()
        .zip(&args.values)
        .map(|(kind, raw)| parse_value(*kind, raw))
        .collect::<Result<_, _>>()
        .map_err(|e| miette!("{}", e))?;

    report_query(method.create_query(&values), args.json)
}
