//! Error types for the parser.
//!
//! Uses the dual-error pattern: `ParserError` for library consumers with
//! detailed error context, and `HeadingError` for the per-line problems the
//! tree builder recovers from without aborting the pass.

use thiserror::Error;

use crate::structure::Level;

/// Main error type for the parser library.
///
/// None of these are raised by the structural pass itself: a syntactically
/// odd document degrades the output but never fails. These cover the
/// collaborators around it (file loading, serialization, configuration).
#[derive(Debug, Error)]
pub enum ParserError {
    /// Input file has an extension we cannot decode.
    #[error("Unsupported document format: '{0}'. Expected a plain text (.txt) file")]
    UnsupportedFormat(String),

    /// Input exceeds the configured size limit.
    #[error("Document is too large: {size} bytes (limit {limit} bytes)")]
    DocumentTooLarge { size: u64, limit: u64 },

    /// Unknown bilingual title delimiter name.
    #[error("Invalid title delimiter: '{0}'. Expected 'slash' or 'parenthesis'")]
    InvalidTitleDelimiter(String),

    /// Unknown SQL output style.
    #[error("Invalid SQL style: '{0}'. Expected 'flat' or 'scoped'")]
    InvalidSqlStyle(String),

    /// Output location is unusable.
    #[error("Invalid output directory {path}: {reason}")]
    OutputDirectory { path: String, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    /// Spreadsheet generation error.
    #[error("XLSX generation failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// A line that looked like a heading but could not be turned into a node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeadingError {
    /// The marker matched but the identifier is not a usable number or letter.
    #[error("Malformed {level} heading: identifier '{identifier}' is not valid")]
    MalformedHeading { level: Level, identifier: String },
}
