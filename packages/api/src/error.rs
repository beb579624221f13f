use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use kodeks_parser::ParserError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing multipart field '{0}'")]
    MissingField(&'static str),

    #[error("Invalid upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error(transparent)]
    Parser(#[from] ParserError),

    #[error("Parsing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingField(_) => StatusCode::BAD_REQUEST,
            Self::Multipart(e) => e.status(),
            Self::Parser(e) => match e {
                ParserError::UnsupportedFormat(_)
                | ParserError::InvalidTitleDelimiter(_)
                | ParserError::InvalidSqlStyle(_) => StatusCode::BAD_REQUEST,
                ParserError::DocumentTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parser_errors_map_to_client_statuses() {
        let unsupported = ApiError::from(ParserError::UnsupportedFormat("a.doc".into()));
        assert_eq!(unsupported.status(), StatusCode::BAD_REQUEST);

        let too_large = ApiError::from(ParserError::DocumentTooLarge { size: 2, limit: 1 });
        assert_eq!(too_large.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let io = ApiError::from(ParserError::Io(std::io::Error::other("disk")));
        assert_eq!(io.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_field_is_bad_request() {
        let err = ApiError::MissingField("document");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Missing multipart field 'document'");
    }
}
