//! The seven structural levels of a legal code.
//!
//! ```text
//! ЧАСТЬ (Part)
//! └── РАЗДЕЛ (Section)
//!     └── Глава (Chapter)
//!         └── Параграф (Paragraph)
//!             └── Статья (Article)
//!                 └── 1) (Clause)
//!                     └── а) (SubClause)
//! ```

use std::fmt;

/// Backing storage for the ancestor/descendant slices.
static ORDER: [Level; Level::COUNT] = Level::ALL;

/// One of the fixed structural ranks, ordered shallowest to deepest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Part (ЧАСТЬ).
    Part,
    /// Section (РАЗДЕЛ).
    Section,
    /// Chapter (Глава).
    Chapter,
    /// Paragraph (Параграф).
    Paragraph,
    /// Article (Статья).
    Article,
    /// Numbered clause, `1)`.
    Clause,
    /// Lettered sub-clause, `а)`.
    SubClause,
}

impl Level {
    /// All levels, shallowest first.
    pub const ALL: [Level; 7] = [
        Level::Part,
        Level::Section,
        Level::Chapter,
        Level::Paragraph,
        Level::Article,
        Level::Clause,
        Level::SubClause,
    ];

    /// Number of levels in the hierarchy.
    pub const COUNT: usize = Self::ALL.len();

    /// Zero-based depth (Part = 0).
    #[must_use]
    pub const fn depth(self) -> usize {
        self as usize
    }

    /// Levels whose open node is recorded in this level's ancestor chain,
    /// shallowest first.
    ///
    /// # Examples
    /// ```
    /// use kodeks_parser::structure::Level;
    ///
    /// assert_eq!(
    ///     Level::Article.ancestors(),
    ///     &[Level::Part, Level::Section, Level::Chapter, Level::Paragraph]
    /// );
    /// assert!(Level::Part.ancestors().is_empty());
    /// ```
    #[must_use]
    pub fn ancestors(self) -> &'static [Level] {
        &ORDER[..self.depth()]
    }

    /// Levels whose open context is closed when a node of this level opens.
    #[must_use]
    pub fn descendants(self) -> &'static [Level] {
        &ORDER[self.depth() + 1..]
    }

    /// Human-readable level name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Part => "Part",
            Self::Section => "Section",
            Self::Chapter => "Chapter",
            Self::Paragraph => "Paragraph",
            Self::Article => "Article",
            Self::Clause => "Clause",
            Self::SubClause => "SubClause",
        }
    }

    /// Database table holding rows of this level.
    #[must_use]
    pub const fn table_name(self) -> &'static str {
        match self {
            Self::Part => "Parts",
            Self::Section => "Sections",
            Self::Chapter => "Chapters",
            Self::Paragraph => "Paragraphs",
            Self::Article => "Articles",
            Self::Clause => "Clauses",
            Self::SubClause => "SubClauses",
        }
    }

    /// Key of this level's list in JSON output and the CSV file map.
    #[must_use]
    pub const fn list_name(self) -> &'static str {
        match self {
            Self::Part => "parts",
            Self::Section => "sections",
            Self::Chapter => "chapters",
            Self::Paragraph => "paragraphs",
            Self::Article => "articles",
            Self::Clause => "clauses",
            Self::SubClause => "subClauses",
        }
    }

    /// Column holding the declared identifier in flat SQL output.
    #[must_use]
    pub const fn id_column(self) -> &'static str {
        match self {
            Self::Part => "PartId",
            Self::Section => "SectionId",
            Self::Chapter => "ChapterId",
            Self::Paragraph => "ParagraphId",
            Self::Article => "ArticleId",
            Self::Clause => "ClauseId",
            Self::SubClause => "SubClauseId",
        }
    }

    /// Column referencing an ancestor of this level in flat SQL output.
    #[must_use]
    pub const fn parent_column(self) -> &'static str {
        match self {
            Self::Part => "ParentPartId",
            Self::Section => "ParentSectionId",
            Self::Chapter => "ParentChapterId",
            Self::Paragraph => "ParentParagraphId",
            Self::Article => "ParentArticleId",
            Self::Clause => "ParentClauseId",
            Self::SubClause => "ParentSubClauseId",
        }
    }

    /// JSON field referencing an ancestor of this level.
    #[must_use]
    pub const fn parent_field(self) -> &'static str {
        match self {
            Self::Part => "parentPartId",
            Self::Section => "parentSectionId",
            Self::Chapter => "parentChapterId",
            Self::Paragraph => "parentParagraphId",
            Self::Article => "parentArticleId",
            Self::Clause => "parentClauseId",
            Self::SubClause => "parentSubClauseId",
        }
    }

    /// Tabular header for this level's number column.
    #[must_use]
    pub const fn number_header(self) -> &'static str {
        match self {
            Self::Part => "PartNumber",
            Self::Section => "SectionNumber",
            Self::Chapter => "ChapterNumber",
            Self::Paragraph => "ParagraphNumber",
            Self::Article => "ArticleNumber",
            Self::Clause => "ClauseNumber",
            Self::SubClause => "SubClauseNumber",
        }
    }

    /// Prefix of the T-SQL variable holding a row's generated identity.
    #[must_use]
    pub const fn identity_variable(self) -> &'static str {
        match self {
            Self::Part => "PartID",
            Self::Section => "SectionID",
            Self::Chapter => "ChapterID",
            Self::Paragraph => "ParagraphID",
            Self::Article => "ArticleID",
            Self::Clause => "ClauseID",
            Self::SubClause => "SubClauseID",
        }
    }

    /// The level directly above this one, if any.
    #[must_use]
    pub fn parent(self) -> Option<Level> {
        self.ancestors().last().copied()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
