//! Output generation: CSV tables, XLSX workbook, SQL scripts, JSON and YAML.

mod csv;
mod sql;
mod writer;
mod xlsx;

pub use csv::{csv_headers, generate_csv_files, level_to_csv};
pub use sql::{generate_sql, render_sql_script, sql_literal};
pub use writer::{generate_json, generate_yaml, save_outputs};
pub use xlsx::{build_workbook, generate_xlsx};
