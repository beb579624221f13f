//! Kodeks parser - Reconstruct the structure of bilingual legal codes.
//!
//! This crate scans the plain text of a Kazakh legal code (Russian headings
//! with Kazakh translations) and rebuilds its hierarchy of parts, sections,
//! chapters, paragraphs, articles, clauses and sub-clauses. The result is
//! exported as per-level records, CSV tables, SQL insert scripts, JSON and
//! YAML.
//!
//! # Example
//!
//! ```
//! use kodeks_parser::{parse_document, ParserConfig};
//! use kodeks_parser::structure::Level;
//!
//! let text = "ЧАСТЬ 1. Общие положения / Жалпы ережелер\n\
//!             Статья 1. Определения / Анықтамалар";
//! let parsed = parse_document(text, &ParserConfig::default());
//!
//! let article = &parsed.data.records(Level::Article)[0];
//! assert_eq!(article.parent_id(Level::Part), 1);
//! assert_eq!(article.name_kz, "Анықтамалар");
//! ```
//!
//! # Architecture
//!
//! The parser is organized into several modules:
//!
//! - [`config`]: Configuration constants, validation and `ParserConfig`
//! - [`types`]: Flat records and the combined `DocumentResult`
//! - [`error`]: Error types and Result alias
//! - [`document`]: Document loading and text decoding
//! - [`structure`]: Level model, line classification and tree building
//! - [`export`]: CSV, SQL, JSON and YAML output
//! - [`cli`]: Command-line interface
//! - [`service`]: Main parser service

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod service;
pub mod structure;
pub mod types;

// Re-export main functions
pub use service::{parse_document, process_document, process_file, ParsedDocument};

// Re-export commonly used items
pub use config::ParserConfig;
pub use error::{HeadingError, ParserError, Result};
pub use structure::{Level, TitleDelimiter};
pub use types::{DocumentResult, FlatRecord, ParsedData, SqlStyle};
