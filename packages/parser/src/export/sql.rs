//! SQL insert script generation.
//!
//! Two styles are supported:
//!
//! - [`SqlStyle::Flat`]: one standalone `INSERT` per record carrying declared
//!   identifiers of the record and of every ancestor.
//! - [`SqlStyle::Scoped`]: a T-SQL script that clears the tables, creates a
//!   `Codes` row and links every row to its parent through the identity
//!   captured with `SCOPE_IDENTITY()`.

use crate::structure::Level;
use crate::types::{FlatRecord, ParsedData, SqlStyle};

/// Generate SQL statements in execution order.
///
/// # Arguments
/// * `data` - Flattened document
/// * `style` - Script flavor
/// * `code_name` - Name of the `Codes` row (scoped style only)
#[must_use]
pub fn generate_sql(data: &ParsedData, style: SqlStyle, code_name: &str) -> Vec<String> {
    match style {
        SqlStyle::Flat => flat_statements(data),
        SqlStyle::Scoped => scoped_statements(data, code_name),
    }
}

/// Join statements into a script file with a generation header.
#[must_use]
pub fn render_sql_script(statements: &[String]) -> String {
    let mut script = format!(
        "-- Generated by kodeks-parser at {}\n\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    for statement in statements {
        script.push_str(statement);
        script.push('\n');
    }
    script
}

/// Quote a string as a Unicode T-SQL literal.
///
/// # Examples
/// ```
/// use kodeks_parser::export::sql_literal;
///
/// assert_eq!(sql_literal("Кодекс"), "N'Кодекс'");
/// assert_eq!(sql_literal("д'Артаньян"), "N'д''Артаньян'");
/// ```
#[must_use]
pub fn sql_literal(value: &str) -> String {
    format!("N'{}'", value.replace('\'', "''"))
}

fn flat_statements(data: &ParsedData) -> Vec<String> {
    data.levels()
        .flat_map(|(level, records)| records.iter().map(move |r| flat_insert(level, r)))
        .collect()
}

fn flat_insert(level: Level, record: &FlatRecord) -> String {
    let mut columns: Vec<&str> = level.ancestors().iter().map(|a| a.parent_column()).collect();
    let mut values: Vec<String> = level
        .ancestors()
        .iter()
        .map(|a| record.parent_id(*a).to_string())
        .collect();

    columns.extend([level.id_column(), "NameRu", "NameKz"]);
    values.extend([
        record.id.to_string(),
        sql_literal(&record.name_ru),
        sql_literal(&record.name_kz),
    ]);

    format!(
        "INSERT INTO {} ({}) VALUES ({});",
        level.table_name(),
        columns.join(", "),
        values.join(", ")
    )
}

fn scoped_statements(data: &ParsedData, code_name: &str) -> Vec<String> {
    let mut statements: Vec<String> = Level::ALL
        .iter()
        .rev()
        .map(|level| format!("DELETE FROM {};", level.table_name()))
        .collect();
    statements.push("DELETE FROM Codes;".to_string());
    statements.push(format!(
        "INSERT INTO Codes (Name) VALUES ({});",
        sql_literal(code_name)
    ));
    statements.push("DECLARE @CodeID INT = SCOPE_IDENTITY();".to_string());

    for (level, records) in data.levels() {
        for record in records {
            statements.push(scoped_insert(level, record));
            // Leaf rows are never referenced, so no identity is captured
            if !level.descendants().is_empty() {
                statements.push(format!(
                    "DECLARE {} INT = SCOPE_IDENTITY();",
                    identity_variable(level, record.key)
                ));
            }
        }
    }

    statements
}

fn scoped_insert(level: Level, record: &FlatRecord) -> String {
    let (parent_column, parent_value) = match level.parent() {
        None => ("CodeID", "@CodeID".to_string()),
        Some(parent) => (
            parent.identity_variable(),
            record
                .ancestors
                .get(parent)
                .map_or_else(|| "NULL".to_string(), |a| identity_variable(parent, a.key)),
        ),
    };

    format!(
        "INSERT INTO {} ({parent_column}, Number, NameRu, NameKz) VALUES ({parent_value}, {}, {}, {});",
        level.table_name(),
        record.id,
        sql_literal(&record.name_ru),
        sql_literal(&record.name_kz)
    )
}

fn identity_variable(level: Level, key: usize) -> String {
    format!("@{}_{key}", level.identity_variable())
}
