//! Binding the dispatcher to the host's scheme-interception hook.
//!
//! The host exposes two facilities: a ready signal and an "intercept
//! loads for this scheme" hook. Registration happens exactly once, after
//! ready, against the `file` scheme. The outcome of registration itself
//! is logged (the per-request outcomes travel through each request's
//! `Result` instead). A rejected registration is terminal for the
//! feature: it is not retried and the host process keeps running with
//! default file loading.

use std::sync::Arc;

use futures::future::BoxFuture;
use thiserror::Error;
use tracing::{error, info};

use crate::error::InterceptError;
use crate::interceptor::FileInterceptor;
use crate::request::{LoadRequest, LoadResponse};

/// The URL scheme this crate intercepts.
pub const FILE_SCHEME: &str = "file";

/// In-flight result of one intercepted load.
pub type LoadFuture = BoxFuture<'static, Result<LoadResponse, InterceptError>>;

/// Handler installed into the host's hook; invoked once per load.
pub type LoadHandler = Arc<dyn Fn(LoadRequest) -> LoadFuture + Send + Sync>;

/// Error the host reports when it rejects a handler installation.
pub type HostError = Box<dyn std::error::Error + Send + Sync>;

/// Host facilities this crate consumes. Implemented by the embedding
/// application shell; this crate never drives the host lifecycle.
pub trait SchemeHost: Send + Sync {
    /// Invoke `f` once, when the application is ready. A host that is
    /// already ready invokes it immediately.
    fn on_ready(&self, f: Box<dyn FnOnce() + Send>);

    /// Replace default resolution of all loads on `scheme` with `handler`.
    fn intercept_scheme(&self, scheme: &str, handler: LoadHandler) -> Result<(), HostError>;
}

/// Registration was rejected by the host's interception hook.
#[derive(Debug, Error)]
#[error("scheme interception rejected for {scheme:?}: {source}")]
pub struct RegistrationError {
    pub scheme: String,
    #[source]
    pub source: HostError,
}

/// Token for a successfully bound hook. Holding it is the explicit
/// record that interception is live for `scheme`.
#[derive(Debug)]
pub struct InterceptHandle {
    scheme: String,
}

impl InterceptHandle {
    pub fn scheme(&self) -> &str {
        &self.scheme
    }
}

/// Builds the per-request handler closure around a shared dispatcher.
fn make_handler(interceptor: Arc<FileInterceptor>) -> LoadHandler {
    Arc::new(move |request| {
        let interceptor = Arc::clone(&interceptor);
        Box::pin(async move { interceptor.handle(&request).await })
    })
}

/// Registers `interceptor` against the `file` scheme immediately.
pub fn try_register(
    host: &dyn SchemeHost,
    interceptor: Arc<FileInterceptor>,
) -> Result<InterceptHandle, RegistrationError> {
    host.intercept_scheme(FILE_SCHEME, make_handler(interceptor))
        .map_err(|source| RegistrationError {
            scheme: FILE_SCHEME.to_string(),
            source,
        })?;
    Ok(InterceptHandle {
        scheme: FILE_SCHEME.to_string(),
    })
}

/// Defers registration until the host signals readiness, then registers
/// exactly once and logs the outcome. On rejection the interceptor is
/// dropped and default file loading stays in place for the rest of the
/// process lifetime.
pub fn register_when_ready<H: SchemeHost + 'static>(
    host: Arc<H>,
    interceptor: FileInterceptor,
) {
    let hook = Arc::clone(&host);
    let interceptor = Arc::new(interceptor);
    host.on_ready(Box::new(move || {
        match try_register(hook.as_ref(), interceptor) {
            Ok(handle) => {
                info!(scheme = handle.scheme(), "file interceptor registered");
            }
            Err(err) => {
                error!(%err, "file interceptor registration failed");
            }
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::{StylesheetCompiler, TemplateCompiler};
    use crate::config::{TemplateLocals, TemplateOptions, TransformContext};
    use crate::error::CompileError;
    use crate::url_path::Platform;
    use async_trait::async_trait;
    use std::path::Path;
    use std::sync::Mutex;
    use tempfile::tempdir;

    struct EchoTemplate;

    impl TemplateCompiler for EchoTemplate {
        fn compile_file(
            &self,
            _path: &Path,
            _options: &TemplateOptions,
            _locals: &TemplateLocals,
        ) -> Result<String, CompileError> {
            Ok("<html></html>".to_string())
        }
    }

    struct EchoStylesheet;

    #[async_trait]
    impl StylesheetCompiler for EchoStylesheet {
        async fn render(&self, source: &str) -> Result<String, CompileError> {
            Ok(source.to_string())
        }
    }

    fn test_interceptor() -> FileInterceptor {
        FileInterceptor::new(
            TransformContext::default(),
            Arc::new(EchoTemplate),
            Arc::new(EchoStylesheet),
            Arc::new(|_| None),
        )
        .with_platform(Platform::Posix)
    }

    /// Host that queues the ready callback and records installations.
    #[derive(Default)]
    struct FakeHost {
        pending_ready: Mutex<Vec<Box<dyn FnOnce() + Send>>>,
        installed: Mutex<Vec<(String, LoadHandler)>>,
        reject: bool,
    }

    impl FakeHost {
        fn rejecting() -> Self {
            Self {
                reject: true,
                ..Self::default()
            }
        }

        fn fire_ready(&self) {
            let callbacks: Vec<_> = self.pending_ready.lock().unwrap().drain(..).collect();
            for cb in callbacks {
                cb();
            }
        }

        fn installed_handler(&self) -> Option<(String, LoadHandler)> {
            self.installed
                .lock()
                .unwrap()
                .first()
                .map(|(s, h)| (s.clone(), Arc::clone(h)))
        }
    }

    impl SchemeHost for FakeHost {
        fn on_ready(&self, f: Box<dyn FnOnce() + Send>) {
            self.pending_ready.lock().unwrap().push(f);
        }

        fn intercept_scheme(&self, scheme: &str, handler: LoadHandler) -> Result<(), HostError> {
            if self.reject {
                return Err("scheme already intercepted".into());
            }
            self.installed
                .lock()
                .unwrap()
                .push((scheme.to_string(), handler));
            Ok(())
        }
    }

    #[test]
    fn registration_waits_for_the_ready_signal() {
        let host = Arc::new(FakeHost::default());
        register_when_ready(Arc::clone(&host), test_interceptor());

        assert!(host.installed_handler().is_none());
        host.fire_ready();
        let (scheme, _) = host.installed_handler().expect("handler installed");
        assert_eq!(scheme, FILE_SCHEME);
    }

    #[test]
    fn rejected_registration_installs_nothing_and_does_not_panic() {
        let host = Arc::new(FakeHost::rejecting());
        register_when_ready(Arc::clone(&host), test_interceptor());
        host.fire_ready();
        assert!(host.installed_handler().is_none());
    }

    #[test]
    fn try_register_returns_a_handle_for_the_file_scheme() {
        let host = FakeHost::default();
        let handle = try_register(&host, Arc::new(test_interceptor())).unwrap();
        assert_eq!(handle.scheme(), FILE_SCHEME);
    }

    #[tokio::test]
    async fn installed_handler_serves_requests_end_to_end() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("style.less");
        std::fs::write(&path, "a{b}").unwrap();

        let host = Arc::new(FakeHost::default());
        register_when_ready(Arc::clone(&host), test_interceptor());
        host.fire_ready();

        let (_, handler) = host.installed_handler().unwrap();
        let request = LoadRequest::new(format!("file://{}", path.display()));
        let response = handler(request).await.unwrap();
        assert_eq!(response.mime_type, "text/css");
        assert_eq!(response.data, b"a{b}");
    }
}
