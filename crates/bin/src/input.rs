//! Loading and saving JSON documents.

use std::io::Read;

use dotpath::Value;

use crate::cli::InputArgs;

/// Read the document from `--file`, or stdin when no file is given
pub fn load_document(input: &InputArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let text = match &input.file {
        Some(path) => {
            tracing::debug!("Reading document from {}", path.display());
            std::fs::read_to_string(path)?
        }
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    Ok(Value::from_json_str(&text)?)
}

/// Parse a JSON argument such as a default or a value to assign
pub fn parse_value(argument: &str) -> Result<Value, Box<dyn std::error::Error>> {
    Value::from_json_str(argument)
        .map_err(|e| format!("invalid JSON value '{argument}': {e}").into())
}

/// Write the document back to `--file`
pub fn save_document(
    input: &InputArgs,
    document: &Value,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = &input.file else {
        return Err("no file to write back to".into());
    };
    let mut text = crate::output::render(&serde_json::Value::from(document), pretty)?;
    text.push('\n');
    std::fs::write(path, text)?;
    tracing::info!("Updated {}", path.display());
    Ok(())
}
