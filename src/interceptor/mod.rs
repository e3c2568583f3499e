//! The interception dispatcher: resolve, read, classify, transform.
//!
//! One [`FileInterceptor`] is built at registration time and shared by
//! every intercepted load. Per request it resolves the URL, reads the
//! file in full, routes by extension class, and returns exactly one
//! result: a `(data, content-type)` pair or an [`InterceptError`]. The
//! request-level states are received → reading → transform → delivered
//! or failed; the single `Result` return makes the terminal state
//! unambiguous and exactly-once.

mod classify;

pub use classify::{classify, extension_key, ExtensionClass, STYLESHEET_EXT, TEMPLATE_EXT};

use std::fs;
use std::sync::Arc;

use crate::compiler::{StylesheetCompiler, TemplateCompiler};
use crate::config::TransformContext;
use crate::error::InterceptError;
use crate::mime::{content_type_for, MimeLookup};
use crate::request::{LoadRequest, LoadResponse};
use crate::url_path::{resolve_file_url, Platform};

/// Content type for rendered template output.
pub const HTML_MIME: &str = "text/html";

/// Content type for compiled stylesheet output.
pub const CSS_MIME: &str = "text/css";

/// Owned dispatcher for intercepted `file:` loads.
///
/// Holds the read-only [`TransformContext`] plus the two black-box
/// compilers and the content-type lookup. No mutable state; safe to
/// share across any number of concurrent requests.
pub struct FileInterceptor {
    ctx: Arc<TransformContext>,
    template: Arc<dyn TemplateCompiler>,
    stylesheet: Arc<dyn StylesheetCompiler>,
    mime: MimeLookup,
    platform: Platform,
}

impl FileInterceptor {
    pub fn new(
        ctx: TransformContext,
        template: Arc<dyn TemplateCompiler>,
        stylesheet: Arc<dyn StylesheetCompiler>,
        mime: MimeLookup,
    ) -> Self {
        Self {
            ctx: Arc::new(ctx),
            template,
            stylesheet,
            mime,
            platform: Platform::native(),
        }
    }

    /// Override the path convention (tests exercise both on one host).
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Handles one intercepted load from start to terminal state.
    ///
    /// The file read is synchronous; the future only suspends while an
    /// asynchronous stylesheet compile is in flight, so other requests
    /// keep flowing in the meantime.
    pub async fn handle(&self, request: &LoadRequest) -> Result<LoadResponse, InterceptError> {
        let path = resolve_file_url(request.url(), self.platform)?;

        // A failed read ends the request before any transform runs.
        let raw = fs::read(&path).map_err(|source| InterceptError::Read {
            path: path.clone(),
            source,
        })?;

        match classify(&path) {
            ExtensionClass::Template => {
                // The compiler re-parses from disk; it gets the path,
                // not the bytes already read.
                let markup = self
                    .template
                    .compile_file(&path, &self.ctx.options, &self.ctx.locals)
                    .map_err(|source| InterceptError::Template {
                        path: path.clone(),
                        source,
                    })?;
                Ok(LoadResponse::new(markup.into_bytes(), HTML_MIME))
            }
            ExtensionClass::Stylesheet => {
                let source_text = String::from_utf8_lossy(&raw);
                let css = self
                    .stylesheet
                    .render(&source_text)
                    .await
                    .map_err(|source| InterceptError::Stylesheet {
                        path: path.clone(),
                        source,
                    })?;
                Ok(LoadResponse::new(css.into_bytes(), CSS_MIME))
            }
            ExtensionClass::Passthrough => {
                let mime = content_type_for(&self.mime, extension_key(&path));
                Ok(LoadResponse::new(raw, mime))
            }
        }
    }
}
