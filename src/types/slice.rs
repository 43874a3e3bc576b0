//! Slice definitions and the JSON formats they are read from.
//!
//! A slices document is either a bare array of `{ "id", "name" }` objects or
//! an object wrapping that array under a `slices` key. Both forms produce the
//! same list.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FigsliceError, Result};

const SHAPE_HELP: &str = r#"Expected [{ "id": "123:456", "name": "logo" }] or { "slices": [...] }"#;

/// A named node to export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Remote node identifier, e.g. `123:456`.
    pub id: String,
    /// Output base filename.
    pub name: String,
}

impl Slice {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Wrapper form of a slices document, as printed by `figslice discover`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceList {
    pub slices: Vec<Slice>,
}

/// Parse a slices document.
///
/// Accepts a top-level array or `{ "slices": [...] }`. Every entry must be an
/// object with string `id` and `name` fields; other fields are ignored.
pub fn parse_slices(json: &str) -> Result<Vec<Slice>> {
    let data: Value = serde_json::from_str(json).map_err(|e| FigsliceError::Parse {
        message: format!("Invalid slices JSON: {}", e),
        help: Some(SHAPE_HELP.to_string()),
    })?;

    let entries = match data {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("slices") {
            Some(Value::Array(items)) => items,
            _ => return Err(invalid_shape()),
        },
        _ => return Err(invalid_shape()),
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| slice_from_value(index, entry))
        .collect()
}

fn invalid_shape() -> FigsliceError {
    FigsliceError::Parse {
        message: "Invalid slices JSON. Expected array or { slices: [...] }.".to_string(),
        help: Some(SHAPE_HELP.to_string()),
    }
}

fn slice_from_value(index: usize, entry: &Value) -> Result<Slice> {
    let id = entry.get("id").and_then(Value::as_str);
    let name = entry.get("name").and_then(Value::as_str);

    match (id, name) {
        (Some(id), Some(name)) => Ok(Slice::new(id, name)),
        _ => Err(FigsliceError::Parse {
            message: format!(
                "Each slice must have string fields: id, name (entry {} is {})",
                index, entry
            ),
            help: Some(SHAPE_HELP.to_string()),
        }),
    }
}

/// Check a resolved slice list before any network call.
pub fn validate_slices(slices: &[Slice]) -> Result<()> {
    if slices.is_empty() {
        return Err(FigsliceError::Config {
            message: "No slices provided".to_string(),
            help: Some("Use --slices, --slices-file or --discover".to_string()),
        });
    }

    for (index, slice) in slices.iter().enumerate() {
        if slice.id.is_empty() || slice.name.is_empty() {
            return Err(FigsliceError::Parse {
                message: format!(
                    "Slice {} has an empty id or name (id: {:?}, name: {:?})",
                    index, slice.id, slice.name
                ),
                help: Some("Both id and name must be non-empty strings".to_string()),
            });
        }
    }

    Ok(())
}
