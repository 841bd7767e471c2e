//! Static preview server for the built site.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site has no backend; `trunk build` writes everything to a `dist/`
//! directory. This router serves that directory with compression and
//! request tracing, falls back to `index.html` for unknown paths, and
//! answers `/healthz` for container probes.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DIST_DIR: &str = "dist";

#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),
    #[error("site directory {0} does not exist; run `trunk build` first")]
    MissingDist(PathBuf),
    #[error("failed to bind: {0}")]
    Bind(std::io::Error),
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
}

impl PreviewConfig {
    /// Build from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 8080
    /// - `FOLIO_DIST_DIR`: default `dist`
    ///
    /// # Errors
    ///
    /// Returns an error for an unparsable port or a missing site directory.
    pub fn from_env() -> Result<Self, PreviewError> {
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        if !config.dist_dir.is_dir() {
            return Err(PreviewError::MissingDist(config.dist_dir));
        }
        Ok(config)
    }

    /// Build from an arbitrary variable source. Does not touch the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::InvalidPort`] for an unparsable port.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PreviewError> {
        let port = match lookup("PORT").map(|raw| raw.trim().to_owned()).filter(|raw| !raw.is_empty()) {
            Some(raw) => raw.parse::<u16>().map_err(|_| PreviewError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let dist_dir = lookup("FOLIO_DIST_DIR")
            .filter(|raw| !raw.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DIST_DIR), PathBuf::from);
        Ok(Self { port, dist_dir })
    }
}

/// Router serving the built site.
pub fn router(config: &PreviewConfig) -> Router {
    let index = ServeFile::new(config.dist_dir.join("index.html"));
    let site = ServeDir::new(&config.dist_dir).append_index_html_on_directories(true).not_found_service(index);

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
