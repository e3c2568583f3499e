//! Shared transform context: template compiler options and template locals.
//!
//! Both maps are supplied once at registration time and shared read-only
//! across all intercepted requests; they never vary per file.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Open-ended template compiler settings, passed through verbatim.
pub type TemplateOptions = serde_json::Map<String, Value>;

/// Names and values visible inside rendered templates.
pub type TemplateLocals = serde_json::Map<String, Value>;

/// Fixed configuration for the two transforms. Established once, then only
/// read; safe to share behind an `Arc` across any number of in-flight
/// requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransformContext {
    /// Settings handed to the template compiler alongside each file path.
    #[serde(default)]
    pub options: TemplateOptions,
    /// Data bindings handed to each rendered template.
    #[serde(default)]
    pub locals: TemplateLocals,
}

impl TransformContext {
    /// Build a context; `options` omitted means an empty set.
    pub fn new(options: Option<TemplateOptions>, locals: TemplateLocals) -> Self {
        Self {
            options: options.unwrap_or_default(),
            locals,
        }
    }
}
