//! Structural parsing of legal codes.
//!
//! A document is scanned once, line by line. Each line is classified against
//! the heading rules of every [`Level`]; recognized headings become nodes of a
//! [`DocumentTree`], linked to the headings that were open above them. The
//! tree is then flattened into per-level record lists.

mod builder;
mod classifier;
mod context;
mod flatten;
mod level;
mod title;
mod tree;

pub use builder::{BuildReport, BuiltTree, TreeBuilder};
pub use classifier::{parse_identifier, Heading, HeadingRule, IdentifierKind, LineClassifier};
pub use context::ContextTable;
pub use flatten::flatten;
pub use level::Level;
pub use title::TitleDelimiter;
pub use tree::{AncestorChain, AncestorRef, DocumentNode, DocumentTree, NodeId, PreOrder, ABSENT_ID};
