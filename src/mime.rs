//! Content-type lookup for the passthrough branch.
//!
//! The extension-to-MIME table is an external collaborator; the host (or
//! embedding application) supplies the lookup function. Extensions with
//! no match fall back to a generic binary content type rather than an
//! empty label, so renderers always receive something well-formed.

use std::sync::Arc;

/// Injected extension → MIME lookup. The argument is the extension
/// without its leading dot (`"png"`), exactly as found on the path.
pub type MimeLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Content type used when the lookup has no answer for an extension.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Resolves the content type for a passthrough file.
pub fn content_type_for(lookup: &MimeLookup, extension: &str) -> String {
    lookup(extension).unwrap_or_else(|| FALLBACK_MIME.to_string())
}
