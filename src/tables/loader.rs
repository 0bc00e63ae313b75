use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::core::types::ExperimentalMethod;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid reference table format: {0}")]
    InvalidFormat(String),
}

/// Parse a two-column CSV into a key -> value map.
///
/// The first line is treated as a header when its first field is a known
/// column name; blank lines and `#` comments are skipped. Rows with fewer
/// than two fields are rejected.
///
/// # Errors
///
/// Returns `TableError::InvalidFormat` if a row has fewer than two fields
/// or no rows are found.
pub fn parse_csv_text(text: &str) -> Result<HashMap<String, String>, TableError> {
    let mut entries = HashMap::new();
    let mut first_data_line = true;

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split(',');
        let key = fields.next().unwrap_or_default().trim();
        let value = fields.next().map(str::trim);

        if first_data_line {
            first_data_line = false;
            let first = key.to_lowercase();
            if first == "id" || first == "identifier" || first == "accession" || first == "key" {
                continue;
            }
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        let Some(value) = value else {
            return Err(TableError::InvalidFormat(format!(
                "Line {line_num} has fewer than 2 fields"
            )));
        };

        entries.insert(key.to_string(), value.to_string());
    }

    if entries.is_empty() {
        return Err(TableError::InvalidFormat(
            "No entries found in reference table".to_string(),
        ));
    }

    Ok(entries)
}

/// Load a symmetry-operator or species reference table from a CSV file.
///
/// # Errors
///
/// Returns `TableError::Io` if the file cannot be read, or
/// `TableError::InvalidFormat` if the content is not a two-column CSV.
pub fn load_csv_file(path: &Path) -> Result<HashMap<String, String>, TableError> {
    let content = std::fs::read_to_string(path)?;
    parse_csv_text(&content)
}

/// Load an experimental-method table, dropping rows whose method code is
/// outside the fixed vocabulary (with a warning).
///
/// # Errors
///
/// Returns `TableError::Io` if the file cannot be read, or
/// `TableError::InvalidFormat` if the content is not a two-column CSV.
pub fn load_methods_file(path: &Path) -> Result<HashMap<String, ExperimentalMethod>, TableError> {
    let content = std::fs::read_to_string(path)?;
    let raw = parse_csv_text(&content)?;

    let mut methods = HashMap::with_capacity(raw.len());
    for (identifier, code) in raw {
        if let Some(method) = ExperimentalMethod::parse(&code) {
            methods.insert(identifier, method);
        } else {
            warn!(%identifier, %code, "Unknown experimental method code, skipping");
        }
    }

    Ok(methods)
}
