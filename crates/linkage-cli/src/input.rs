//! Reading interaction rows.

use crate::error::{CliError, Result};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read rows from a file, or from stdin when the path is `-`
pub fn read_rows(path: &Path) -> Result<Vec<Value>> {
    let contents = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path)?
    };

    let rows = parse_rows(&contents)?;
    debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Parse a JSON array of rows, or an object wrapping one under `rows`
pub fn parse_rows(contents: &str) -> Result<Vec<Value>> {
    match serde_json::from_str::<Value>(contents)? {
        Value::Array(rows) => Ok(rows),
        Value::Object(mut wrapper) => match wrapper.remove("rows") {
            Some(Value::Array(rows)) => Ok(rows),
            _ => Err(CliError::InvalidInput(
                "Expected a \"rows\" array in the input object".to_string(),
            )),
        },
        _ => Err(CliError::InvalidInput(
            "Expected a JSON array of rows".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_array() {
        let rows = parse_rows(r#"[{"caller": "A", "callee": "B"}, {"caller": "B"}]"#).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_wrapped_rows() {
        let rows = parse_rows(r#"{"source": "export", "rows": [{"caller": "A"}]}"#).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_wrapper_without_rows() {
        let result = parse_rows(r#"{"data": []}"#);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_scalar_rejected() {
        assert!(matches!(parse_rows("42"), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_rows("[{"), Err(CliError::Serialization(_))));
    }
}
