//! Single forward pass that turns document text into a [`DocumentTree`].

use super::classifier::{Heading, LineClassifier};
use super::context::ContextTable;
use super::level::Level;
use super::title::TitleDelimiter;
use super::tree::{AncestorChain, AncestorRef, DocumentTree, NewNode};

/// Non-fatal findings collected while building a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Number of lines read, blank lines included.
    pub lines_scanned: usize,
    /// Number of nodes created.
    pub headings: usize,
    /// Nodes created while at least one ancestor level had nothing open.
    pub missing_ancestor_headings: usize,
    /// Heading matches skipped because their identifier could not be parsed.
    pub malformed_headings: usize,
    /// Human-readable warnings, prefixed with the source line.
    pub warnings: Vec<String>,
}

/// Result of [`TreeBuilder::build`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuiltTree {
    pub tree: DocumentTree,
    pub report: BuildReport,
}

/// Builds a document tree from text.
///
/// Owns all mutable parse state, so one builder serves exactly one document.
/// Independent parses use independent builders and can run concurrently.
///
/// # Examples
/// ```
/// use kodeks_parser::structure::{Level, TitleDelimiter, TreeBuilder};
///
/// let built = TreeBuilder::new(TitleDelimiter::Slash)
///     .build("Глава 2. Сделки / Мәмілелер\nСтатья 7. Понятие / Ұғым");
///
/// let article = built.tree.iter().find(|n| n.level == Level::Article).unwrap();
/// assert_eq!(article.declared_id, 7);
/// assert_eq!(article.ancestors.declared_id(Level::Chapter), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    classifier: LineClassifier,
    delimiter: TitleDelimiter,
    context: ContextTable,
    tree: DocumentTree,
    report: BuildReport,
}

impl TreeBuilder {
    /// Builder using the standard heading vocabulary.
    #[must_use]
    pub fn new(delimiter: TitleDelimiter) -> Self {
        Self::with_classifier(LineClassifier::new(), delimiter)
    }

    /// Builder using a custom classifier.
    #[must_use]
    pub fn with_classifier(classifier: LineClassifier, delimiter: TitleDelimiter) -> Self {
        Self {
            classifier,
            delimiter,
            context: ContextTable::new(),
            tree: DocumentTree::new(),
            report: BuildReport::default(),
        }
    }

    /// Scan `text` and return the finished tree.
    ///
    /// Never fails: malformed headings are skipped with a warning and a
    /// document without headings yields an empty tree.
    #[must_use]
    pub fn build(mut self, text: &str) -> BuiltTree {
        for (index, line) in text.lines().enumerate() {
            self.push_line(index + 1, line);
        }
        self.finish()
    }

    /// Feed a single raw line; `line_no` is 1-based.
    pub fn push_line(&mut self, line_no: usize, line: &str) {
        self.report.lines_scanned += 1;

        let line = line.trim();
        if line.is_empty() {
            return;
        }

        for result in self.classifier.classify(line) {
            match result {
                Ok(heading) => self.add_heading(&heading, line_no),
                Err(e) => {
                    tracing::warn!(line = line_no, error = %e, "Skipping malformed heading");
                    self.report.malformed_headings += 1;
                    self.report.warnings.push(format!("line {line_no}: {e}"));
                }
            }
        }
    }

    /// Finish the scan.
    #[must_use]
    pub fn finish(self) -> BuiltTree {
        if self.tree.is_empty() {
            tracing::warn!(
                lines = self.report.lines_scanned,
                "No headings recognized in document"
            );
        } else {
            tracing::debug!(
                headings = self.report.headings,
                missing_ancestors = self.report.missing_ancestor_headings,
                malformed = self.report.malformed_headings,
                "Document tree built"
            );
        }

        BuiltTree {
            tree: self.tree,
            report: self.report,
        }
    }

    fn add_heading(&mut self, heading: &Heading<'_>, line_no: usize) {
        let level = heading.level;
        let ancestors = self.snapshot_ancestors(level);
        if ancestors.has_missing() {
            self.report.missing_ancestor_headings += 1;
            tracing::trace!(
                line = line_no,
                level = %level,
                "Heading created with missing ancestors"
            );
        }

        let parent = self.context.shallowest_open(level.ancestors());
        let (name_ru, name_kz) = self.delimiter.split(heading.raw_title);

        let id = self.tree.insert(
            NewNode {
                level,
                declared_id: heading.declared_id,
                name_ru,
                name_kz,
                ancestors,
                line: line_no,
            },
            parent,
        );
        self.context.open(level, id);
        self.report.headings += 1;
    }

    fn snapshot_ancestors(&self, level: Level) -> AncestorChain {
        let slots = level
            .ancestors()
            .iter()
            .map(|ancestor_level| {
                let open = self
                    .context
                    .lookup(*ancestor_level)
                    .and_then(|id| self.tree.get(id))
                    .map(|node| AncestorRef {
                        declared_id: node.declared_id,
                        key: node.id.key(),
                    });
                (*ancestor_level, open)
            })
            .collect();
        AncestorChain::new(slots)
    }
}
