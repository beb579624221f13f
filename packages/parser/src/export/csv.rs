//! Per-level CSV tables.

use std::collections::BTreeMap;

use crate::structure::Level;
use crate::types::{FlatRecord, ParsedData};

/// Column headers for one level's table.
///
/// Ancestor number columns come first, shallowest first, then the level's
/// own number and the two names.
#[must_use]
pub fn csv_headers(level: Level) -> Vec<&'static str> {
    level
        .ancestors()
        .iter()
        .map(|ancestor| ancestor.number_header())
        .chain([level.number_header(), "NameRu", "NameKz"])
        .collect()
}

/// Render one level's records as CSV text, header row included.
#[must_use]
pub fn level_to_csv(level: Level, records: &[FlatRecord]) -> String {
    let mut out = csv_headers(level).join(",");
    out.push('\n');

    for record in records {
        let mut values: Vec<String> = level
            .ancestors()
            .iter()
            .map(|ancestor| record.parent_id(*ancestor).to_string())
            .collect();
        values.push(record.id.to_string());
        values.push(csv_escape(&record.name_ru));
        values.push(csv_escape(&record.name_kz));

        out.push_str(&values.join(","));
        out.push('\n');
    }

    out
}

/// One CSV table per level, keyed by list name.
///
/// Every level gets a table, empty ones with only the header row.
#[must_use]
pub fn generate_csv_files(data: &ParsedData) -> BTreeMap<String, String> {
    data.levels()
        .map(|(level, records)| (level.list_name().to_string(), level_to_csv(level, records)))
        .collect()
}

fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}
