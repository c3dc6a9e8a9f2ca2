//! Output formatting helpers.

/// Render JSON compactly, or indented when `pretty` is set.
pub fn render(value: &serde_json::Value, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Print JSON to stdout.
pub fn print_json(value: &serde_json::Value, pretty: bool) -> Result<(), serde_json::Error> {
    println!("{}", render(value, pretty)?);
    Ok(())
}
