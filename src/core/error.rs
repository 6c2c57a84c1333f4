use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the bundled runtime accessor.
/// Only layout resolution surfaces these to callers; everything else is
/// logged and folded into a default value.
#[derive(Debug, Error)]
pub enum BundleError {
    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Layout ──────────────────────────────────────────
    #[error("Unable to locate app Resources directory: {0}")]
    ResourceDirUnavailable(String),

    // ── Version descriptor ──────────────────────────────
    #[error("Property list error: {0}")]
    Plist(#[from] plist::Error),

    #[error("Invalid semantic version: {0}")]
    InvalidVersion(#[from] semver::Error),
}

/// Convenience alias used throughout the crate.
pub type BundleResult<T> = Result<T, BundleError>;
