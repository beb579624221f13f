//! Loading and decoding of source documents.

use std::fs;
use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use crate::config::{validate_extension, validate_size, MAX_DOCUMENT_SIZE};
use crate::error::Result;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read a plain-text document from disk with the default size limit.
///
/// # Arguments
/// * `path` - Path to a `.txt` file
///
/// # Returns
/// The decoded, NFC-normalized text
pub fn load_document(path: &Path) -> Result<String> {
    load_document_with_limit(path, MAX_DOCUMENT_SIZE)
}

/// Read a plain-text document from disk, rejecting files over `limit` bytes.
pub fn load_document_with_limit(path: &Path, limit: u64) -> Result<String> {
    validate_extension(path)?;
    validate_size(fs::metadata(path)?.len(), limit)?;

    let bytes = fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Loaded document");

    Ok(decode_document(&bytes, &path.display().to_string()))
}

/// Decode raw document bytes.
///
/// Strips a UTF-8 byte order mark, replaces invalid sequences with U+FFFD
/// and normalizes to NFC so composed and decomposed letters (`й` vs
/// `и` + U+0306) match the same heading rules.
///
/// # Arguments
/// * `bytes` - Raw document content
/// * `source` - Description of the source, used in log messages
pub fn decode_document(bytes: &[u8], source: &str) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let text = match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(e) => {
            tracing::warn!(
                source,
                valid_up_to = e.valid_up_to(),
                "Document is not valid UTF-8, replacing invalid bytes"
            );
            String::from_utf8_lossy(bytes).into_owned()
        }
    };

    text.nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParserError;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_decode_strips_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice("ЧАСТЬ 1. Общая".as_bytes());

        assert_eq!(decode_document(&bytes, "test"), "ЧАСТЬ 1. Общая");
    }

    #[test]
    fn test_decode_normalizes_to_nfc() {
        // й written as и + combining breve
        let decomposed = "Статья 1. Свои\u{0306}ства";
        let decoded = decode_document(decomposed.as_bytes(), "test");

        assert_eq!(decoded, "Статья 1. Свойства");
        assert_eq!(decoded.chars().filter(|c| *c == '\u{0306}').count(), 0);
    }

    #[test]
    fn test_decode_replaces_invalid_utf8() {
        let bytes = [b'a', 0xFF, b'b'];
        assert_eq!(decode_document(&bytes, "test"), "a\u{FFFD}b");
    }

    #[test]
    fn test_load_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("kodeks.txt");
        fs::write(&path, "Глава 1. Общие положения\r\n").unwrap();

        assert_eq!(load_document(&path).unwrap(), "Глава 1. Общие положения\r\n");
    }

    #[test]
    fn test_load_document_rejects_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("kodeks.docx");
        fs::write(&path, "binary").unwrap();

        assert!(matches!(
            load_document(&path),
            Err(ParserError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_load_document_rejects_large_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("kodeks.txt");
        fs::write(&path, "0123456789").unwrap();

        assert!(matches!(
            load_document_with_limit(&path, 4),
            Err(ParserError::DocumentTooLarge { size: 10, limit: 4 })
        ));
    }

    #[test]
    fn test_load_document_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        assert!(matches!(load_document(&path), Err(ParserError::Io(_))));
    }
}
