//! Core data types shared by the flattener, exporters and front ends.
//!
//! JSON field names follow the established wire format (`parentPartId`,
//! `nameRu`, `subClauses`, ...), so existing consumers keep working.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::error::ParserError;
use crate::structure::{AncestorChain, Level};

/// One flattened node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRecord {
    /// Surrogate key, unique within one parse.
    pub key: usize,
    /// Surrogate key of the tree parent; `None` under the root.
    pub parent_key: Option<usize>,
    /// Level of the node.
    pub level: Level,
    /// Declared identifier.
    pub id: u32,
    /// Ancestor snapshot taken when the node was created.
    pub ancestors: AncestorChain,
    /// Russian name.
    pub name_ru: String,
    /// Kazakh name, possibly empty.
    pub name_kz: String,
    /// 1-based source line.
    pub line: usize,
}

impl FlatRecord {
    /// Declared identifier of the ancestor at `level`, 0 when absent.
    #[must_use]
    pub fn parent_id(&self, level: Level) -> u32 {
        self.ancestors.declared_id(level)
    }
}

impl Serialize for FlatRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let ancestor_levels = self.level.ancestors();
        let mut map = serializer.serialize_map(Some(6 + ancestor_levels.len()))?;
        map.serialize_entry("key", &self.key)?;
        map.serialize_entry("parentKey", &self.parent_key)?;
        map.serialize_entry("id", &self.id)?;
        for level in ancestor_levels {
            map.serialize_entry(level.parent_field(), &self.parent_id(*level))?;
        }
        map.serialize_entry("nameRu", &self.name_ru)?;
        map.serialize_entry("nameKz", &self.name_kz)?;
        map.serialize_entry("line", &self.line)?;
        map.end()
    }
}

/// Seven ordered record lists, one per level.
///
/// Within each list records appear in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedData {
    lists: [Vec<FlatRecord>; Level::COUNT],
}

impl Default for ParsedData {
    fn default() -> Self {
        Self {
            lists: std::array::from_fn(|_| Vec::new()),
        }
    }
}

impl ParsedData {
    /// Empty lists.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its level's list.
    pub fn push(&mut self, record: FlatRecord) {
        self.lists[record.level.depth()].push(record);
    }

    /// Records of one level.
    #[must_use]
    pub fn records(&self, level: Level) -> &[FlatRecord] {
        &self.lists[level.depth()]
    }

    /// `(level, records)` pairs, shallowest level first.
    pub fn levels(&self) -> impl Iterator<Item = (Level, &[FlatRecord])> {
        Level::ALL
            .into_iter()
            .map(move |level| (level, self.records(level)))
    }

    /// Total number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    /// Whether every list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.iter().all(Vec::is_empty)
    }

    /// Record counts per level, shallowest first.
    #[must_use]
    pub fn counts(&self) -> Vec<(Level, usize)> {
        self.levels().map(|(level, records)| (level, records.len())).collect()
    }
}

impl Serialize for ParsedData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Level::COUNT))?;
        for (level, records) in self.levels() {
            map.serialize_entry(level.list_name(), records)?;
        }
        map.end()
    }
}

/// SQL script flavor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SqlStyle {
    /// One self-contained `INSERT` per record, keyed by declared identifiers.
    #[default]
    Flat,
    /// T-SQL script resolving parents through `SCOPE_IDENTITY()` variables.
    #[value(alias = "tsql")]
    Scoped,
}

impl SqlStyle {
    /// Configuration name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Scoped => "scoped",
        }
    }
}

impl FromStr for SqlStyle {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "scoped" | "tsql" => Ok(Self::Scoped),
            _ => Err(ParserError::InvalidSqlStyle(s.to_string())),
        }
    }
}

impl fmt::Display for SqlStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything produced for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResult {
    /// Flattened records.
    pub parsed_data: ParsedData,
    /// SQL statements in execution order.
    pub sql_queries: Vec<String>,
    /// CSV text per level, keyed by list name.
    pub csv_files: BTreeMap<String, String>,
    /// Non-fatal findings.
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::AncestorRef;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn article() -> FlatRecord {
        FlatRecord {
            key: 4,
            parent_key: Some(3),
            level: Level::Article,
            id: 1,
            ancestors: AncestorChain::new(vec![
                (
                    Level::Part,
                    Some(AncestorRef {
                        declared_id: 1,
                        key: 1,
                    }),
                ),
                (
                    Level::Section,
                    Some(AncestorRef {
                        declared_id: 2,
                        key: 2,
                    }),
                ),
                (
                    Level::Chapter,
                    Some(AncestorRef {
                        declared_id: 3,
                        key: 3,
                    }),
                ),
                (Level::Paragraph, None),
            ]),
            name_ru: "Определения".to_string(),
            name_kz: "Анықтамалар".to_string(),
            line: 4,
        }
    }

    #[test]
    fn test_flat_record_json_shape() {
        let value = serde_json::to_value(article()).unwrap();

        assert_eq!(
            value,
            json!({
                "key": 4,
                "parentKey": 3,
                "id": 1,
                "parentPartId": 1,
                "parentSectionId": 2,
                "parentChapterId": 3,
                "parentParagraphId": 0,
                "nameRu": "Определения",
                "nameKz": "Анықтамалар",
                "line": 4
            })
        );
    }

    #[test]
    fn test_parsed_data_lists() {
        let mut data = ParsedData::new();
        assert!(data.is_empty());

        data.push(article());

        assert_eq!(data.len(), 1);
        assert_eq!(data.records(Level::Article).len(), 1);
        assert!(data.records(Level::Chapter).is_empty());

        let value = serde_json::to_value(&data).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys.len(), 7);
        assert!(keys.contains(&"subClauses"));
        assert_eq!(value["articles"][0]["parentChapterId"], 3);
    }

    #[test]
    fn test_sql_style_from_str() {
        assert_eq!("flat".parse::<SqlStyle>().unwrap(), SqlStyle::Flat);
        assert_eq!("Scoped".parse::<SqlStyle>().unwrap(), SqlStyle::Scoped);
        assert!(matches!(
            "mysql".parse::<SqlStyle>(),
            Err(ParserError::InvalidSqlStyle(_))
        ));
    }

    #[test]
    fn test_document_result_field_names() {
        let value = serde_json::to_value(DocumentResult::default()).unwrap();

        assert!(value.get("parsedData").is_some());
        assert!(value.get("sqlQueries").is_some());
        assert!(value.get("csvFiles").is_some());
        assert!(value.get("warnings").is_some());
    }
}
