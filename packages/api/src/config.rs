use std::env;
use std::net::SocketAddr;

use kodeks_parser::config::MAX_DOCUMENT_SIZE;
use kodeks_parser::ParserConfig;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// Slack on top of the document limit for multipart boundaries and headers.
pub const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub max_upload_bytes: usize,
    pub parser: ParserConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            max_upload_bytes: usize::try_from(MAX_DOCUMENT_SIZE).unwrap_or(usize::MAX),
            parser: ParserConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Invalid values are logged and replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(addr) = lookup("KODEKS_API_ADDR") {
            match addr.parse() {
                Ok(addr) => config.addr = addr,
                Err(e) => tracing::warn!(
                    value = %addr,
                    error = %e,
                    "KODEKS_API_ADDR is invalid, using {DEFAULT_ADDR}"
                ),
            }
        }

        if let Some(limit) = lookup("KODEKS_MAX_UPLOAD_BYTES") {
            match limit.parse::<usize>() {
                Ok(limit) if limit > 0 => config.max_upload_bytes = limit,
                _ => tracing::warn!(
                    value = %limit,
                    "KODEKS_MAX_UPLOAD_BYTES is invalid, using {} bytes",
                    config.max_upload_bytes
                ),
            }
        }

        match ParserConfig::from_lookup(&lookup) {
            Ok(parser) => config.parser = parser,
            Err(e) => tracing::warn!(error = %e, "Parser settings are invalid, using defaults"),
        }
        config.parser.max_document_size = config.max_upload_bytes as u64;

        config
    }

    /// Request body limit enforced by the router.
    pub fn body_limit(&self) -> usize {
        self.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD)
    }
}
