pub mod compiler;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod logging;
pub mod mime;
pub mod registration;
pub mod request;
pub mod url_path;

pub use compiler::{CallbackStylesheet, StylesheetCompiler, TemplateCompiler};
pub use config::{TemplateLocals, TemplateOptions, TransformContext};
pub use error::{CompileError, InterceptError, ResolveError};
pub use interceptor::{ExtensionClass, FileInterceptor, CSS_MIME, HTML_MIME};
pub use mime::{content_type_for, MimeLookup, FALLBACK_MIME};
pub use registration::{
    register_when_ready, try_register, HostError, InterceptHandle, LoadFuture, LoadHandler,
    RegistrationError, SchemeHost, FILE_SCHEME,
};
pub use request::{LoadRequest, LoadResponse};
pub use url_path::{resolve_file_url, Platform};
