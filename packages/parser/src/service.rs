//! Parser service that ties all components together.

use std::path::Path;

use crate::config::ParserConfig;
use crate::document::load_document_with_limit;
use crate::error::Result;
use crate::export::{generate_csv_files, generate_sql};
use crate::structure::{flatten, BuildReport, DocumentTree, TreeBuilder};
use crate::types::{DocumentResult, ParsedData};

/// A parsed document: the tree, its flattened form and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    pub tree: DocumentTree,
    pub data: ParsedData,
    pub report: BuildReport,
}

/// Parse document text into a tree and flat records.
///
/// Never fails; every call owns its own builder state.
#[must_use]
pub fn parse_document(text: &str, config: &ParserConfig) -> ParsedDocument {
    let built = TreeBuilder::new(config.title_delimiter).build(text);
    let data = flatten(&built.tree);

    tracing::info!(
        headings = built.report.headings,
        warnings = built.report.warnings.len(),
        "Parsed document"
    );

    ParsedDocument {
        tree: built.tree,
        data,
        report: built.report,
    }
}

/// Parse document text and generate every export.
///
/// # Examples
/// ```
/// use kodeks_parser::{process_document, ParserConfig};
///
/// let result = process_document("ЧАСТЬ 1. Общая часть / Жалпы бөлім", &ParserConfig::default());
/// assert_eq!(result.sql_queries.len(), 1);
/// assert!(result.csv_files["parts"].contains("Общая часть"));
/// ```
#[must_use]
pub fn process_document(text: &str, config: &ParserConfig) -> DocumentResult {
    into_result(parse_document(text, config), config)
}

/// Load a document from disk and process it.
pub fn process_file(path: &Path, config: &ParserConfig) -> Result<DocumentResult> {
    let text = load_document_with_limit(path, config.max_document_size)?;
    Ok(process_document(&text, config))
}

/// Generate every export for an already parsed document.
#[must_use]
pub fn into_result(parsed: ParsedDocument, config: &ParserConfig) -> DocumentResult {
    let sql_queries = generate_sql(&parsed.data, config.sql_style, &config.code_name);
    let csv_files = generate_csv_files(&parsed.data);

    DocumentResult {
        parsed_data: parsed.data,
        sql_queries,
        csv_files,
        warnings: parsed.report.warnings,
    }
}
