//! Set command - assigns a value at a path.

use std::process::ExitCode;

use dotpath::write_str;

use crate::cli::SetArgs;
use crate::input::{load_document, parse_value, save_document};
use crate::output::print_json;

/// Run the set command
pub fn run(args: &SetArgs, pretty: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let value = parse_value(&args.value)?;
    let mut document = load_document(&args.input)?;

    write_str(&mut document, &args.path, value)?;

    if args.in_place {
        save_document(&args.input, &document, pretty)?;
    } else {
        print_json(&serde_json::Value::from(&document), pretty)?;
    }
    Ok(ExitCode::SUCCESS)
}
