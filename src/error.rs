//! Error types for URL resolution, compilation, and per-request dispatch.
//!
//! Every failure is scoped to the single request that triggered it; the
//! dispatcher returns exactly one of these per request, never a partial
//! result. Registration failure lives in `registration` and is logged
//! instead of returned per request.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while turning a `file:` URL into a filesystem path.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The URL string did not parse at all.
    #[error("invalid file url {url:?}: {source}")]
    Parse {
        url: String,
        source: url::ParseError,
    },
    /// The percent-decoded path component was not valid UTF-8.
    #[error("url path of {url:?} did not decode to UTF-8")]
    Decode { url: String },
}

/// Opaque error from a black-box template or stylesheet compiler.
///
/// The compilers are external collaborators; all this crate needs from
/// their failures is a message to surface to the host.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct CompileError(pub String);

impl CompileError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl From<&str> for CompileError {
    fn from(msg: &str) -> Self {
        Self(msg.to_string())
    }
}

impl From<String> for CompileError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

/// Per-request failure surfaced to the host instead of a `LoadResponse`.
#[derive(Debug, Error)]
pub enum InterceptError {
    /// The request URL could not be resolved to a path.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    /// Reading the resolved file failed (missing, permission, I/O).
    #[error("read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Template compilation or rendering failed.
    #[error("template compile failed for {}: {source}", path.display())]
    Template { path: PathBuf, source: CompileError },
    /// The stylesheet compiler reported a failure.
    #[error("stylesheet compile failed for {}: {source}", path.display())]
    Stylesheet { path: PathBuf, source: CompileError },
}
