//! Compiler contracts for the two transforms.
//!
//! The template and stylesheet compilers are external collaborators; the
//! dispatcher only depends on these traits and knows nothing about any
//! concrete compiler. The template compiler is synchronous and is handed
//! the file path (it re-parses from disk); the stylesheet compiler is
//! asynchronous and is handed the already-read source text.

use std::path::Path;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::config::{TemplateLocals, TemplateOptions};
use crate::error::CompileError;

/// Compiles a template file and renders it with the shared locals,
/// producing markup. Blocks until rendering finishes.
pub trait TemplateCompiler: Send + Sync {
    fn compile_file(
        &self,
        path: &Path,
        options: &TemplateOptions,
        locals: &TemplateLocals,
    ) -> Result<String, CompileError>;
}

/// Compiles preprocessor-dialect style source into plain style text.
/// Completion is asynchronous; the dispatcher awaits it.
#[async_trait]
pub trait StylesheetCompiler: Send + Sync {
    async fn render(&self, source: &str) -> Result<String, CompileError>;
}

/// Adapter for stylesheet compilers that report completion through a
/// callback rather than a future.
///
/// The wrapped function receives the source and a `done` callback it must
/// invoke exactly once; a oneshot channel turns that into the awaitable
/// contract the dispatcher expects. A compiler that drops `done` without
/// calling it surfaces as a [`CompileError`] instead of hanging the
/// channel receiver with a panic.
pub struct CallbackStylesheet<F>
where
    F: Fn(String, Box<dyn FnOnce(Result<String, CompileError>) + Send>) + Send + Sync,
{
    submit: F,
}

impl<F> CallbackStylesheet<F>
where
    F: Fn(String, Box<dyn FnOnce(Result<String, CompileError>) + Send>) + Send + Sync,
{
    pub fn new(submit: F) -> Self {
        Self { submit }
    }
}

#[async_trait]
impl<F> StylesheetCompiler for CallbackStylesheet<F>
where
    F: Fn(String, Box<dyn FnOnce(Result<String, CompileError>) + Send>) + Send + Sync,
{
    async fn render(&self, source: &str) -> Result<String, CompileError> {
        let (tx, rx) = oneshot::channel();
        (self.submit)(
            source.to_string(),
            Box::new(move |result| {
                // Receiver may be gone if the request future was dropped.
                let _ = tx.send(result);
            }),
        );
        match rx.await {
            Ok(result) => result,
            Err(_) => Err(CompileError::new(
                "stylesheet compiler dropped its completion callback",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn callback_success_becomes_ok() {
        let compiler = CallbackStylesheet::new(|source, done| {
            done(Ok(format!("compiled:{source}")));
        });
        let out = compiler.render("a { b }").await.unwrap();
        assert_eq!(out, "compiled:a { b }");
    }

    #[tokio::test]
    async fn callback_failure_becomes_err() {
        let compiler = CallbackStylesheet::new(|_source, done| {
            done(Err(CompileError::new("bad syntax")));
        });
        let err = compiler.render("oops").await.unwrap_err();
        assert_eq!(err.to_string(), "bad syntax");
    }

    #[tokio::test]
    async fn dropped_callback_becomes_err() {
        let compiler = CallbackStylesheet::new(|_source, done| {
            drop(done);
        });
        let err = compiler.render("x").await.unwrap_err();
        assert!(err.to_string().contains("completion callback"));
    }

    #[tokio::test]
    async fn callback_may_fire_from_another_thread() {
        let compiler = CallbackStylesheet::new(|source, done| {
            std::thread::spawn(move || done(Ok(source.to_uppercase())));
        });
        let out = compiler.render("body{}").await.unwrap();
        assert_eq!(out, "BODY{}");
    }
}
