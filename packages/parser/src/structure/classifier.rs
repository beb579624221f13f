//! Heading detection for single lines of text.

use std::sync::LazyLock;

use regex::Regex;

use super::level::Level;
use crate::error::HeadingError;

/// ЧАСТЬ 1. Общая часть
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PART_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ЧАСТЬ\s+([^\s.]+)[.\s]+(.+)$").expect("valid regex"));

/// РАЗДЕЛ 1. Основные положения
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SECTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^РАЗДЕЛ\s+([^\s.]+)[.\s]+(.+)$").expect("valid regex"));

/// Глава 1. Гражданское законодательство
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CHAPTER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Глава\s+([^\s.]+)[.\s]+(.+)$").expect("valid regex"));

/// Параграф 1. Общие положения
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PARAGRAPH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Параграф\s+([^\s.]+)[.\s]+(.+)$").expect("valid regex"));

/// Статья 1. Отношения, регулируемые гражданским законодательством
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARTICLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Статья\s+([^\s.]+)[.\s]+(.+)$").expect("valid regex"));

/// 1) текст пункта
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CLAUSE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\)\s+(.+)$").expect("valid regex"));

/// а) текст подпункта
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SUBCLAUSE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\p{L})\)\s+(.+)$").expect("valid regex"));

/// How the identifier captured by a heading rule is turned into a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    /// Plain non-negative integer ("12").
    Numeric,
    /// Single Latin or Cyrillic letter, mapped to its alphabet position.
    Letter,
}

/// A successfully recognized heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Level the heading declares.
    pub level: Level,
    /// Identifier parsed from the marker.
    pub declared_id: u32,
    /// Title text following the marker, untrimmed.
    pub raw_title: &'a str,
}

/// Detection rule for one level.
///
/// The pattern must capture the identifier in group 1 and the title in group 2.
#[derive(Debug, Clone)]
pub struct HeadingRule {
    level: Level,
    pattern: Regex,
    identifier: IdentifierKind,
}

impl HeadingRule {
    /// Build a rule from a pattern string.
    pub fn new(
        level: Level,
        pattern: &str,
        identifier: IdentifierKind,
    ) -> std::result::Result<Self, regex::Error> {
        Ok(Self::from_regex(level, Regex::new(pattern)?, identifier))
    }

    /// Build a rule from an already compiled pattern.
    #[must_use]
    pub fn from_regex(level: Level, pattern: Regex, identifier: IdentifierKind) -> Self {
        Self {
            level,
            pattern,
            identifier,
        }
    }

    /// Level this rule detects.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Try this rule against a line.
    ///
    /// Returns `None` when the marker is not present, `Some(Err(_))` when the
    /// marker is present but the identifier cannot be parsed.
    pub fn apply<'a>(&self, line: &'a str) -> Option<Result<Heading<'a>, HeadingError>> {
        let caps = self.pattern.captures(line)?;
        let (Some(identifier), Some(title)) = (caps.get(1), caps.get(2)) else {
            return None;
        };

        let result = match parse_identifier(identifier.as_str(), self.identifier) {
            Some(declared_id) => Ok(Heading {
                level: self.level,
                declared_id,
                raw_title: title.as_str(),
            }),
            None => Err(HeadingError::MalformedHeading {
                level: self.level,
                identifier: identifier.as_str().to_string(),
            }),
        };
        Some(result)
    }
}

/// Ordered list of heading rules tested against every line.
///
/// Every rule is tried, in order, even after an earlier one matched: a line
/// yields one result per matching rule. With the standard vocabulary the
/// numeric clause marker and the letter sub-clause marker are disjoint, so at
/// most one rule matches in practice.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    rules: Vec<HeadingRule>,
}

impl LineClassifier {
    /// Classifier for the standard Russian-language heading vocabulary.
    #[must_use]
    pub fn new() -> Self {
        let standard = [
            (Level::Part, &PART_PATTERN, IdentifierKind::Numeric),
            (Level::Section, &SECTION_PATTERN, IdentifierKind::Numeric),
            (Level::Chapter, &CHAPTER_PATTERN, IdentifierKind::Numeric),
            (Level::Paragraph, &PARAGRAPH_PATTERN, IdentifierKind::Numeric),
            (Level::Article, &ARTICLE_PATTERN, IdentifierKind::Numeric),
            (Level::Clause, &CLAUSE_PATTERN, IdentifierKind::Numeric),
            (Level::SubClause, &SUBCLAUSE_PATTERN, IdentifierKind::Letter),
        ];

        let rules = standard
            .into_iter()
            .map(|(level, pattern, kind)| HeadingRule::from_regex(level, Regex::clone(pattern), kind))
            .collect();

        Self { rules }
    }

    /// Classifier with a custom rule list, tested in the given order.
    #[must_use]
    pub fn with_rules(rules: Vec<HeadingRule>) -> Self {
        Self { rules }
    }

    /// The rules in test order.
    #[must_use]
    pub fn rules(&self) -> &[HeadingRule] {
        &self.rules
    }

    /// Classify a trimmed, non-blank line.
    ///
    /// An empty result means the line is body text.
    pub fn classify<'a>(&self, line: &'a str) -> Vec<Result<Heading<'a>, HeadingError>> {
        self.rules.iter().filter_map(|rule| rule.apply(line)).collect()
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a captured identifier.
///
/// # Examples
/// ```
/// use kodeks_parser::structure::{parse_identifier, IdentifierKind};
///
/// assert_eq!(parse_identifier("12", IdentifierKind::Numeric), Some(12));
/// assert_eq!(parse_identifier("в", IdentifierKind::Letter), Some(3));
/// assert_eq!(parse_identifier("IV", IdentifierKind::Numeric), None);
/// ```
#[must_use]
pub fn parse_identifier(raw: &str, kind: IdentifierKind) -> Option<u32> {
    match kind {
        IdentifierKind::Numeric => {
            // u32::from_str also takes a leading '+'
            if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            raw.parse::<u32>().ok()
        }
        IdentifierKind::Letter => {
            let mut chars = raw.chars();
            let letter = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            letter_ordinal(letter)
        }
    }
}

/// Position of a letter in its alphabet, starting at 1.
///
/// Covers the Latin a-z and the contiguous Cyrillic а-я block; other letters
/// (ё, Kazakh-specific letters) have no stable ordinal.
fn letter_ordinal(letter: char) -> Option<u32> {
    let lower = letter.to_lowercase().next()?;
    match lower {
        'a'..='z' => Some(u32::from(lower) - u32::from('a') + 1),
        'а'..='я' => Some(u32::from(lower) - u32::from('а') + 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn classify_one(line: &str) -> Vec<Result<Heading<'_>, HeadingError>> {
        LineClassifier::new().classify(line)
    }

    #[test]
    fn test_standard_rules_in_level_order() {
        let classifier = LineClassifier::new();
        let levels: Vec<Level> = classifier.rules().iter().map(HeadingRule::level).collect();
        assert_eq!(levels, Level::ALL.to_vec());
    }

    #[test]
    fn test_classify_keyword_levels() {
        let cases = [
            ("ЧАСТЬ 1. Общие положения", Level::Part, 1),
            ("РАЗДЕЛ 2. Введение", Level::Section, 2),
            ("Глава 3. Термины", Level::Chapter, 3),
            ("Параграф 4. Общие правила", Level::Paragraph, 4),
            ("Статья 15. Определения", Level::Article, 15),
        ];

        for (line, level, id) in cases {
            let results = classify_one(line);
            assert_eq!(results.len(), 1, "line: {line}");
            let heading = results[0].clone().unwrap();
            assert_eq!(heading.level, level);
            assert_eq!(heading.declared_id, id);
        }
    }

    #[test]
    fn test_classify_extracts_raw_title() {
        let results = classify_one("Статья 1. Определения / Анықтамалар");
        let heading = results[0].clone().unwrap();
        assert_eq!(heading.raw_title, "Определения / Анықтамалар");
    }

    #[test]
    fn test_classify_without_period() {
        let results = classify_one("Глава 7 Сделки");
        let heading = results[0].clone().unwrap();
        assert_eq!(heading.declared_id, 7);
        assert_eq!(heading.raw_title, "Сделки");
    }

    #[test]
    fn test_classify_clause_and_subclause() {
        let clause = classify_one("2) лица, не достигшие совершеннолетия;");
        assert_eq!(clause.len(), 1);
        let clause = clause[0].clone().unwrap();
        assert_eq!(clause.level, Level::Clause);
        assert_eq!(clause.declared_id, 2);

        let sub = classify_one("б) иные лица;");
        assert_eq!(sub.len(), 1);
        let sub = sub[0].clone().unwrap();
        assert_eq!(sub.level, Level::SubClause);
        assert_eq!(sub.declared_id, 2);
    }

    #[test]
    fn test_classify_body_text() {
        assert!(classify_one("Гражданское законодательство основывается на признании равенства").is_empty());
        assert!(classify_one("Статьями настоящего Кодекса").is_empty());
        assert!(classify_one("часть 1 статьи 5").is_empty());
    }

    #[test]
    fn test_classify_marker_without_title_is_body_text() {
        assert!(classify_one("Статья 5.").is_empty());
        assert!(classify_one("3)").is_empty());
    }

    #[test]
    fn test_classify_malformed_identifier() {
        let results = classify_one("Статья 12-1. Особые случаи");
        assert_eq!(
            results,
            vec![Err(HeadingError::MalformedHeading {
                level: Level::Article,
                identifier: "12-1".to_string(),
            })]
        );
    }

    #[test]
    fn test_classify_roman_numeral_is_malformed() {
        let results = classify_one("ЧАСТЬ IV. Особенная часть");
        assert!(matches!(
            results.as_slice(),
            [Err(HeadingError::MalformedHeading { level: Level::Part, .. })]
        ));
    }

    #[test]
    fn test_classify_unmapped_letter_is_malformed() {
        let results = classify_one("ә) подпункт");
        assert!(matches!(
            results.as_slice(),
            [Err(HeadingError::MalformedHeading {
                level: Level::SubClause,
                ..
            })]
        ));
    }

    #[test]
    fn test_classify_overflowing_clause_number_is_malformed() {
        let results = classify_one("99999999999) пункт");
        assert!(matches!(
            results.as_slice(),
            [Err(HeadingError::MalformedHeading { level: Level::Clause, .. })]
        ));
    }

    #[test]
    fn test_every_matching_rule_produces_a_result() {
        let rules = vec![
            HeadingRule::new(Level::Chapter, r"^(\d+)\.\s+(.+)$", IdentifierKind::Numeric).unwrap(),
            HeadingRule::new(Level::Article, r"^(\d+)\.\s+(.+)$", IdentifierKind::Numeric).unwrap(),
        ];
        let classifier = LineClassifier::with_rules(rules);

        let results = classifier.classify("4. Заголовок");
        let levels: Vec<Level> = results
            .into_iter()
            .map(|r| r.unwrap().level)
            .collect();
        assert_eq!(levels, vec![Level::Chapter, Level::Article]);
    }

    #[test]
    fn test_parse_identifier_letters() {
        assert_eq!(parse_identifier("a", IdentifierKind::Letter), Some(1));
        assert_eq!(parse_identifier("Z", IdentifierKind::Letter), Some(26));
        assert_eq!(parse_identifier("а", IdentifierKind::Letter), Some(1));
        assert_eq!(parse_identifier("Я", IdentifierKind::Letter), Some(32));
        assert_eq!(parse_identifier("ё", IdentifierKind::Letter), None);
        assert_eq!(parse_identifier("ab", IdentifierKind::Letter), None);
        assert_eq!(parse_identifier("", IdentifierKind::Letter), None);
    }

    #[test]
    fn test_parse_identifier_numbers() {
        assert_eq!(parse_identifier("0", IdentifierKind::Numeric), Some(0));
        assert_eq!(parse_identifier("007", IdentifierKind::Numeric), Some(7));
        assert_eq!(parse_identifier("-1", IdentifierKind::Numeric), None);
        assert_eq!(parse_identifier("1a", IdentifierKind::Numeric), None);
        assert_eq!(parse_identifier("+5", IdentifierKind::Numeric), None);
        assert_eq!(parse_identifier("", IdentifierKind::Numeric), None);
        assert_eq!(parse_identifier("٣", IdentifierKind::Numeric), None);
    }

    #[test]
    fn test_classify_signed_number_is_malformed() {
        let results = classify_one("Статья +5. Плюс");
        assert!(matches!(
            results.as_slice(),
            [Err(HeadingError::MalformedHeading { level: Level::Article, .. })]
        ));
    }
}
