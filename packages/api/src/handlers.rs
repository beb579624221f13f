use axum::body::Bytes;
use axum::extract::{Multipart, Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::Json;
use kodeks_parser::config::{validate_extension, validate_size};
use kodeks_parser::document::decode_document;
use kodeks_parser::export::generate_xlsx;
use kodeks_parser::{parse_document, process_document, DocumentResult, ParserConfig};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Multipart field carrying the uploaded document.
pub const DOCUMENT_FIELD: &str = "document";

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="ru">
<head>
    <meta charset="utf-8">
    <title>Kodeks parser</title>
</head>
<body>
    <h1>Загрузка кодекса</h1>
    <form action="/api/parse" method="post" enctype="multipart/form-data">
        <input type="file" name="document" accept=".txt" required>
        <button type="submit">Разобрать</button>
    </form>
    <p>Поддерживается формат: .txt (UTF-8)</p>
</body>
</html>
"#;

#[derive(Debug, Default, Deserialize)]
pub struct ParseQuery {
    pub delimiter: Option<String>,
    pub sql_style: Option<String>,
}

impl ParseQuery {
    /// Apply per-request overrides to the service defaults.
    fn resolve(&self, base: &ParserConfig) -> Result<ParserConfig, ApiError> {
        let mut config = base.clone();
        if let Some(delimiter) = &self.delimiter {
            config.title_delimiter = delimiter.parse()?;
        }
        if let Some(style) = &self.sql_style {
            config.sql_style = style.parse()?;
        }
        Ok(config)
    }
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn parse_upload(
    State(state): State<AppState>,
    Query(query): Query<ParseQuery>,
    mut multipart: Multipart,
) -> Result<Json<DocumentResult>, ApiError> {
    let config = query.resolve(&state.config.parser)?;

    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(DOCUMENT_FIELD) {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await?;
            upload = Some((file_name, bytes));
            break;
        }
    }
    let (file_name, bytes) = upload.ok_or(ApiError::MissingField(DOCUMENT_FIELD))?;

    validate_extension(&file_name)?;
    tracing::info!(file = %file_name, bytes = bytes.len(), "Received upload");

    parse_bytes(bytes, file_name, config).await.map(Json)
}

pub async fn parse_text(
    State(state): State<AppState>,
    Query(query): Query<ParseQuery>,
    body: Bytes,
) -> Result<Json<DocumentResult>, ApiError> {
    let config = query.resolve(&state.config.parser)?;
    parse_bytes(body, "request body".to_string(), config)
        .await
        .map(Json)
}

pub async fn parse_workbook(
    State(state): State<AppState>,
    Query(query): Query<ParseQuery>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let config = query.resolve(&state.config.parser)?;
    validate_size(body.len() as u64, config.max_document_size)?;

    let workbook = tokio::task::spawn_blocking(move || {
        let text = decode_document(&body, "request body");
        generate_xlsx(&parse_document(&text, &config).data)
    })
    .await??;

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"code_data.xlsx\"",
            ),
        ],
        workbook,
    ))
}

/// Decode and parse on the blocking pool.
async fn parse_bytes(
    bytes: Bytes,
    source: String,
    config: ParserConfig,
) -> Result<DocumentResult, ApiError> {
    validate_size(bytes.len() as u64, config.max_document_size)?;

    let result = tokio::task::spawn_blocking(move || {
        let text = decode_document(&bytes, &source);
        process_document(&text, &config)
    })
    .await?;

    Ok(result)
}
