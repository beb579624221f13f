//! Serialization and file output for parse results.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::sql::render_sql_script;
use super::xlsx::generate_xlsx;
use crate::error::{ParserError, Result};
use crate::types::{DocumentResult, ParsedData};

/// Pretty-printed JSON of a full result.
pub fn generate_json(result: &DocumentResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// YAML dump of the flattened lists with a document start marker.
pub fn generate_yaml(data: &ParsedData) -> Result<String> {
    let yaml = serde_yaml_ng::to_string(data)?;
    let body = yaml.strip_prefix("---\n").unwrap_or(&yaml);

    // Trailing whitespace is not meaningful and trips up linters
    let lines: Vec<&str> = body.lines().map(str::trim_end).collect();
    Ok(format!("---\n{}\n", lines.join("\n")))
}

/// Write every output format for one document.
///
/// Produces `<stem>.json`, `<stem>.sql`, `<stem>.yaml`, the `<stem>.xlsx`
/// workbook and one `<stem>_<list>.csv` per level inside `dir`, creating
/// `dir` if needed.
///
/// # Returns
/// Paths of the written files
pub fn save_outputs(result: &DocumentResult, stem: &str, dir: &Path) -> Result<Vec<PathBuf>> {
    if dir.exists() && !dir.is_dir() {
        return Err(ParserError::OutputDirectory {
            path: dir.display().to_string(),
            reason: "not a directory".to_string(),
        });
    }
    fs::create_dir_all(dir)?;

    let mut files: Vec<(String, Vec<u8>)> = vec![
        (format!("{stem}.json"), generate_json(result)?.into_bytes()),
        (
            format!("{stem}.sql"),
            render_sql_script(&result.sql_queries).into_bytes(),
        ),
        (
            format!("{stem}.yaml"),
            generate_yaml(&result.parsed_data)?.into_bytes(),
        ),
        (format!("{stem}.xlsx"), generate_xlsx(&result.parsed_data)?),
    ];
    files.extend(
        result
            .csv_files
            .iter()
            .map(|(list, csv)| (format!("{stem}_{list}.csv"), csv.clone().into_bytes())),
    );

    let mut written = Vec::with_capacity(files.len());
    for (name, content) in files {
        let path = dir.join(name);
        write_atomic(&path, &content)?;
        tracing::debug!(path = %path.display(), "Wrote output file");
        written.push(path);
    }

    Ok(written)
}

/// Write to a temp file, sync it, then rename over the destination.
///
/// Partial writes never corrupt an existing file.
fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content)?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;
    Ok(())
}
