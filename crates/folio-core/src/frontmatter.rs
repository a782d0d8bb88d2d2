//! Frontmatter splitting and raw document parsing.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

use crate::error::{CoreError, Result};

/// YAML frontmatter delimiter.
pub const DELIMITER: &str = "---";

/// A source document split into its untyped frontmatter and body.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    /// Frontmatter as an untyped key-value mapping.
    pub data: Value,

    /// Content after the closing delimiter.
    pub body: String,
}

/// Split content into frontmatter and body.
///
/// The opening delimiter must be the first non-blank line and the closing
/// delimiter must stand on a line of its own.
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let content = content.trim_start_matches('\u{feff}').trim_start();

    let after_first = content.strip_prefix(DELIMITER)?;
    let after_first = after_first
        .strip_prefix("\r\n")
        .or_else(|| after_first.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in after_first.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let frontmatter = &after_first[..offset];
            let body = &after_first[offset + line.len()..];
            return Some((frontmatter.trim_end(), body.trim_start()));
        }
        offset += line.len();
    }

    None
}

/// Parse a document into untyped frontmatter and body.
///
/// A document without frontmatter yields an empty mapping, so schema
/// validation reports the missing required fields.
pub fn parse_document(content: &str, path: &Path) -> Result<RawDocument> {
    let Some((fm_str, body)) = split_frontmatter(content) else {
        return Ok(RawDocument {
            data: Value::Mapping(Mapping::new()),
            body: content.to_string(),
        });
    };

    let data = if fm_str.trim().is_empty() {
        Value::Mapping(Mapping::new())
    } else {
        serde_yaml::from_str(fm_str).map_err(|e| CoreError::frontmatter(path, e.to_string()))?
    };

    if !data.is_mapping() {
        return Err(CoreError::frontmatter(
            path,
            "frontmatter must be a key-value mapping",
        ));
    }

    Ok(RawDocument {
        data,
        body: body.to_string(),
    })
}

/// Deserialize untyped frontmatter into `T`, naming the offending field on
/// failure.
pub fn deserialize_fields<T: DeserializeOwned>(data: &Value, path: &Path) -> Result<T> {
    serde_path_to_error::deserialize(data.clone()).map_err(|e| {
        let field = e.path().to_string();
        let message = e.into_inner().to_string();
        if field == "." {
            CoreError::frontmatter(path, message)
        } else {
            CoreError::frontmatter(path, format!("{field}: {message}"))
        }
    })
}
