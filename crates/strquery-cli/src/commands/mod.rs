//! CLI command implementations.

mod bind;
mod check;
mod invoke;

pub use bind::{run_bind, BindArgs};
pub use check::{run_check, CheckArgs};
pub use invoke::{run_invoke, InvokeArgs};

use serde::Serialize;

/// JSON output for a created query.
#[derive(Serialize)]
pub struct QueryResult {
    pub query: String,
}

/// Print a created query, or the error that prevented it.
///
/// Returns the exit code.
fn report_query(result: Result<String, strquery::BindError>, json: bool) -> miette::Result<i32> {
    match result {
        Ok(query) => {
            if json {
                let output = QueryResult { query };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .map_err(|e| miette::miette!("JSON serialization failed: {}", e))?
                );
            } else {
                println!("{}", query);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if json {
                let output = serde_json::json!({
                    "error": e.to_string()
                });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .map_err(|e| miette::miette!("JSON serialization failed: {}", e))?
                );
            } else {
                eprintln!("Binding error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
