//! Reading guide documents from JSON or TOML text

use std::path::Path;

use serde_json::Value;

use crate::error::ParseError;

/// Text formats a guide document can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    #[default]
    Json,
    Toml,
}

impl InputFormat {
    /// Guess the format from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("toml") => InputFormat::Toml,
            _ => InputFormat::Json,
        }
    }
}

/// Parse source text into a generic document value for validation
pub fn parse_input(source: &str, format: InputFormat) -> Result<Value, ParseError> {
    match format {
        InputFormat::Json => {
            serde_json::from_str(source).map_err(|e| ParseError::from_json(&e, source))
        }
        InputFormat::Toml => toml::from_str(source).map_err(|e| ParseError::from_toml(&e, source)),
    }
}
