//! Get command - prints the value at a path.

use std::process::ExitCode;

use dotpath::read_str;

use crate::cli::GetArgs;
use crate::input::{load_document, parse_value};
use crate::output::print_json;

/// Run the get command
pub fn run(args: &GetArgs, pretty: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Parse the default first so a bad default fails even when unused
    let fallback = args.default.as_deref().map(parse_value).transpose()?;
    let document = load_document(&args.input)?;

    let resolved = read_str(&document, &args.path)?;
    match (resolved.to_json(), fallback) {
        (Some(found), _) => {
            print_json(&found, pretty)?;
            Ok(ExitCode::SUCCESS)
        }
        (None, Some(fallback)) => {
            tracing::debug!(path = %args.path, "path not found, using default");
            print_json(&serde_json::Value::from(fallback), pretty)?;
            Ok(ExitCode::SUCCESS)
        }
        (None, None) => {
            eprintln!("not found: {}", args.path);
            Ok(ExitCode::FAILURE)
        }
    }
}
