//! Configuration constants and validation functions for the parser.

use std::env;
use std::path::Path;

use crate::error::{ParserError, Result};
use crate::structure::TitleDelimiter;
use crate::types::SqlStyle;

/// Maximum accepted document size in bytes (10 MiB).
pub const MAX_DOCUMENT_SIZE: u64 = 10 * 1024 * 1024;

/// File extensions the loader can decode.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt"];

/// Name of the `Codes` row created by scoped SQL output.
pub const DEFAULT_CODE_NAME: &str = "Новый кодекс";

/// Text wrap width for the CLI tree view.
pub const TEXT_WRAP_WIDTH: usize = 100;

/// Environment variable selecting the title delimiter.
pub const TITLE_DELIMITER_ENV: &str = "KODEKS_TITLE_DELIMITER";

/// Environment variable selecting the SQL style.
pub const SQL_STYLE_ENV: &str = "KODEKS_SQL_STYLE";

/// Environment variable naming the code in scoped SQL output.
pub const CODE_NAME_ENV: &str = "KODEKS_CODE_NAME";

/// Options for one parse run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// How bilingual titles are split.
    pub title_delimiter: TitleDelimiter,
    /// Flavor of the generated SQL.
    pub sql_style: SqlStyle,
    /// Code name used by scoped SQL.
    pub code_name: String,
    /// Upper bound on input size in bytes.
    pub max_document_size: u64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            title_delimiter: TitleDelimiter::default(),
            sql_style: SqlStyle::default(),
            code_name: DEFAULT_CODE_NAME.to_string(),
            max_document_size: MAX_DOCUMENT_SIZE,
        }
    }
}

impl ParserConfig {
    /// Defaults overridden by `KODEKS_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup(TITLE_DELIMITER_ENV) {
            config.title_delimiter = value.parse()?;
        }
        if let Some(value) = lookup(SQL_STYLE_ENV) {
            config.sql_style = value.parse()?;
        }
        if let Some(value) = lookup(CODE_NAME_ENV) {
            let value = value.trim();
            if !value.is_empty() {
                config.code_name = value.to_string();
            }
        }

        Ok(config)
    }

    /// Set the title delimiter.
    #[must_use]
    pub fn with_title_delimiter(mut self, delimiter: TitleDelimiter) -> Self {
        self.title_delimiter = delimiter;
        self
    }

    /// Set the SQL style.
    #[must_use]
    pub fn with_sql_style(mut self, style: SqlStyle) -> Self {
        self.sql_style = style;
        self
    }

    /// Set the code name.
    #[must_use]
    pub fn with_code_name(mut self, name: impl Into<String>) -> Self {
        self.code_name = name.into();
        self
    }

    /// Set the maximum document size.
    #[must_use]
    pub fn with_max_document_size(mut self, bytes: u64) -> Self {
        self.max_document_size = bytes;
        self
    }
}

/// Validate that a file name or path has a supported extension.
///
/// # Examples
/// ```
/// use kodeks_parser::config::validate_extension;
///
/// assert!(validate_extension("kodeks.txt").is_ok());
/// assert!(validate_extension("KODEKS.TXT").is_ok());
/// assert!(validate_extension("kodeks.docx").is_err());
/// ```
pub fn validate_extension(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(ParserError::UnsupportedFormat(
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        ))
    }
}

/// Validate a document size against a limit.
pub fn validate_size(size: u64, limit: u64) -> Result<()> {
    if size > limit {
        Err(ParserError::DocumentTooLarge { size, limit })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ParserConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ParserConfig::default());
        assert_eq!(config.code_name, "Новый кодекс");
        assert_eq!(config.max_document_size, 10 * 1024 * 1024);
    }

    #[test]
    fn test_env_overrides() {
        let config = ParserConfig::from_lookup(lookup_from(&[
            (TITLE_DELIMITER_ENV, "parenthesis"),
            (SQL_STYLE_ENV, "scoped"),
            (CODE_NAME_ENV, "Гражданский кодекс"),
        ]))
        .unwrap();

        assert_eq!(config.title_delimiter, TitleDelimiter::Parenthesis);
        assert_eq!(config.sql_style, SqlStyle::Scoped);
        assert_eq!(config.code_name, "Гражданский кодекс");
    }

    #[test]
    fn test_blank_code_name_keeps_default() {
        let config = ParserConfig::from_lookup(lookup_from(&[(CODE_NAME_ENV, "  ")])).unwrap();
        assert_eq!(config.code_name, DEFAULT_CODE_NAME);
    }

    #[test]
    fn test_invalid_env_value() {
        let result = ParserConfig::from_lookup(lookup_from(&[(SQL_STYLE_ENV, "oracle")]));
        assert!(matches!(result, Err(ParserError::InvalidSqlStyle(_))));
    }

    #[test]
    fn test_validate_extension() {
        assert!(validate_extension("a/b/code.txt").is_ok());
        assert!(validate_extension("code.Txt").is_ok());
        assert!(validate_extension("code.doc").is_err());
        assert!(validate_extension("code.rtf").is_err());
        assert!(validate_extension("code").is_err());

        match validate_extension("dir/code.docx") {
            Err(ParserError::UnsupportedFormat(name)) => assert_eq!(name, "code.docx"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_validate_size() {
        assert!(validate_size(10, 10).is_ok());
        assert!(matches!(
            validate_size(11, 10),
            Err(ParserError::DocumentTooLarge { size: 11, limit: 10 })
        ));
    }
}
