pub mod file;
pub mod stdin;

use serde::de::DeserializeOwned;

use debt_valuation_core::DebtValuationError;

/// Resolve a command payload: `--input` file first, then piped stdin.
///
/// An absent payload is a caller contract violation and fails fast, before
/// any computation or storage work.
pub fn read_payload<T: DeserializeOwned>(
    input: &Option<String>,
    field: &str,
) -> Result<T, Box<dyn std::error::Error>> {
    if let Some(path) = input {
        return file::read_document(path);
    }
    if let Some(data) = stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }
    Err(DebtValuationError::InvalidInput {
        field: field.into(),
        reason: "no payload provided (use --input or pipe JSON via stdin)".into(),
    }
    .into())
}
