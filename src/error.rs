//! Error types for reading and validating documents

use std::fmt;

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// The input text could not be parsed at all
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("{format} parse error at {span:?}: {message}")]
    Malformed {
        format: &'static str,
        span: Span,
        message: String,
    },
}

impl ParseError {
    pub fn span(&self) -> &Span {
        match self {
            ParseError::Malformed { span, .. } => span,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            ParseError::Malformed {
                format,
                span,
                message,
            } => {
                // ariadne counts characters, spans are bytes
                let start = char_offset(source, span.start, false);
                let end = char_offset(source, span.end, true).max(start);

                let written = Report::build(ReportKind::Error, filename, start)
                    .with_message(format!("malformed {} document", format))
                    .with_label(
                        Label::new((filename, start..end))
                            .with_message(message)
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf);
                if written.is_err() {
                    return self.to_string();
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub(crate) fn from_json(err: &serde_json::Error, source: &str) -> Self {
        let offset = line_col_to_offset(source, err.line(), err.column());
        ParseError::Malformed {
            format: "JSON",
            span: offset..(offset + 1).min(source.len()),
            message: strip_position(&err.to_string()),
        }
    }

    pub(crate) fn from_toml(err: &toml::de::Error, source: &str) -> Self {
        let span = err.span().unwrap_or(source.len()..source.len());
        ParseError::Malformed {
            format: "TOML",
            span,
            message: err.message().to_string(),
        }
    }
}

/// Convert serde_json's 1-based line and column into a byte offset
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(source.len())
}

/// Number of characters before byte `byte`, snapping to a char boundary
/// downwards, or upwards when `round_up` is set
fn char_offset(source: &str, byte: usize, round_up: bool) -> usize {
    let mut byte = byte.min(source.len());
    while !source.is_char_boundary(byte) {
        if round_up {
            byte += 1;
        } else {
            byte -= 1;
        }
    }
    source[..byte].chars().count()
}

/// serde_json appends " at line L column C"; the report already shows where
fn strip_position(message: &str) -> String {
    match message.rfind(" at line ") {
        Some(idx) => message[..idx].to_string(),
        None => message.to_string(),
    }
}

/// One field that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Location such as `poles[1].humidityTop`; empty for the document root
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// The document parsed but does not match the schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid document: {}", format_field_errors(.errors))]
pub struct SchemaError {
    pub errors: Vec<FieldError>,
}

impl SchemaError {
    /// The first failing field, which is what a one-line status shows
    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    /// Whether any error was reported at exactly `path`
    pub fn has_path(&self, path: &str) -> bool {
        self.errors.iter().any(|e| e.path == path)
    }
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_to_offset() {
        let src = "{\n  \"a\": 1,\n  oops\n}";
        // line 3, column 3 is the 'o' of oops
        let offset = line_col_to_offset(src, 3, 3);
        assert_eq!(&src[offset..offset + 4], "oops");
        assert_eq!(line_col_to_offset(src, 0, 0), 0);
        assert_eq!(line_col_to_offset(src, 99, 99), src.len());
    }

    #[test]
    fn test_json_error_span() {
        let src = "{\"config\": }";
        let err = serde_json::from_str::<serde_json::Value>(src).unwrap_err();
        let parse_err = ParseError::from_json(&err, src);
        // serde_json reports the column of the closing brace
        assert!((10..=11).contains(&parse_err.span().start));
        assert!(!parse_err.to_string().contains(" at line "));
        assert!(parse_err.to_string().starts_with("JSON parse error"));
    }

    #[test]
    fn test_format_with_ariadne() {
        let src = "{\"config\": }";
        let err = serde_json::from_str::<serde_json::Value>(src).unwrap_err();
        let report = ParseError::from_json(&err, src).format(src, "guide.json");
        assert!(report.contains("malformed JSON document"));
        assert!(report.contains("guide.json"));
    }

    #[test]
    fn test_format_after_multibyte_text() {
        let src = format!(
            "{{\"tips\": [\"{}\"], \"config\": }}",
            "Mist 1-2× daily ".repeat(10)
        );
        let err = serde_json::from_str::<serde_json::Value>(&src).unwrap_err();
        let parse_err = ParseError::from_json(&err, &src);
        assert!(parse_err.span().end > src.chars().count());

        let report = parse_err.format(&src, "guide.json");
        assert!(report.contains("expected value"), "{}", report);
        assert!(report.contains("1-2×"));
    }

    #[test]
    fn test_char_offset() {
        let src = "a×b";
        assert_eq!(char_offset(src, 1, false), 1);
        assert_eq!(char_offset(src, 2, false), 1);
        assert_eq!(char_offset(src, 2, true), 2);
        assert_eq!(char_offset(src, 3, false), 2);
        assert_eq!(char_offset(src, 99, false), 3);
    }

    #[test]
    fn test_schema_error_display() {
        let err = SchemaError {
            errors: vec![
                FieldError::new("poles", "At least one moss pole is required"),
                FieldError::new("config.visual.polesPerRow", "must be at most 4"),
            ],
        };
        insta::assert_snapshot!(err.to_string(), @"invalid document: poles: At least one moss pole is required; config.visual.polesPerRow: must be at most 4");
        assert!(err.has_path("poles"));
        assert_eq!(err.first().map(|e| e.path.as_str()), Some("poles"));
    }
}
