//! Extension-based routing to a transform.

use std::path::Path;

/// Template source extension, matched exactly (no case folding).
pub const TEMPLATE_EXT: &str = "pug";

/// Stylesheet preprocessor extension, matched exactly.
pub const STYLESHEET_EXT: &str = "less";

/// The transform a resolved path routes to. Exactly one class per
/// request; a file is never double-transformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionClass {
    Template,
    Stylesheet,
    Passthrough,
}

/// Classifies a path by its extension, case as given.
pub fn classify(path: &Path) -> ExtensionClass {
    match path.extension().and_then(|e| e.to_str()) {
        Some(TEMPLATE_EXT) => ExtensionClass::Template,
        Some(STYLESHEET_EXT) => ExtensionClass::Stylesheet,
        _ => ExtensionClass::Passthrough,
    }
}

/// The path's extension as a lookup key for passthrough content types.
/// Missing or non-UTF-8 extensions yield an empty key.
pub fn extension_key(path: &Path) -> &str {
    path.extension().and_then(|e| e.to_str()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_and_stylesheet_extensions_route_to_transforms() {
        assert_eq!(classify(Path::new("/app/index.pug")), ExtensionClass::Template);
        assert_eq!(classify(Path::new("/app/style.less")), ExtensionClass::Stylesheet);
    }

    #[test]
    fn other_extensions_pass_through() {
        assert_eq!(classify(Path::new("/app/logo.png")), ExtensionClass::Passthrough);
        assert_eq!(classify(Path::new("/app/README")), ExtensionClass::Passthrough);
        assert_eq!(classify(Path::new("/app/.hidden")), ExtensionClass::Passthrough);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(classify(Path::new("/app/INDEX.PUG")), ExtensionClass::Passthrough);
        assert_eq!(classify(Path::new("/app/style.Less")), ExtensionClass::Passthrough);
    }

    #[test]
    fn extension_key_for_missing_extension_is_empty() {
        assert_eq!(extension_key(Path::new("/app/logo.png")), "png");
        assert_eq!(extension_key(Path::new("/app/README")), "");
    }
}
