//! # Closure-backed handlers.
//!
//! [`HandlerFn`] wraps an asynchronous closure `F: Fn(A) -> Fut`, producing a fresh
//! future per invocation. [`SyncHandlerFn`] wraps a plain closure `F: Fn(A) -> Result<T, E>`
//! and delivers its result through the same future type, so both kinds can be mixed on
//! one event.
//!
//! ## Concurrency semantics
//! - Each invocation builds a **new** future that owns its state.
//! - No hidden mutation between invocations; shared state goes in an explicit `Arc<...>`
//!   captured by the closure.
//!
//! ## Example
//! ```rust
//! use asyncemit::{BoxError, HandlerFn, HandlerRef, SyncHandlerFn};
//!
//! let slow: HandlerRef<String, String> = HandlerFn::arc(|s: String| async move {
//!     Ok::<_, BoxError>(format!("bar{s}"))
//! });
//! let fast: HandlerRef<String, String> =
//!     SyncHandlerFn::arc(|s: String| Ok::<_, BoxError>(format!("baz{s}")));
//! # let _ = (slow, fast);
//! ```

use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future;

use crate::handlers::handler::{Handler, HandlerFuture};

/// Asynchronous closure handler.
#[derive(Debug, Clone)]
pub struct HandlerFn<F> {
    f: F,
}

impl<F> HandlerFn<F> {
    /// Wraps the closure.
    ///
    /// Prefer [`HandlerFn::arc`] when you immediately need a [`HandlerRef`](crate::HandlerRef).
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Wraps the closure and returns it as a shared handle.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

impl<F, Fut, A, T, E> Handler<A, T, E> for HandlerFn<F>
where
    F: Fn(A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
{
    fn call(&self, args: A) -> HandlerFuture<T, E> {
        (self.f)(args).boxed()
    }
}

/// Synchronous closure handler.
///
/// The closure runs inside `emit`; its result is wrapped in a ready future.
#[derive(Debug, Clone)]
pub struct SyncHandlerFn<F> {
    f: F,
}

impl<F> SyncHandlerFn<F> {
    /// Wraps the closure.
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Wraps the closure and returns it as a shared handle.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

impl<F, A, T, E> Handler<A, T, E> for SyncHandlerFn<F>
where
    F: Fn(A) -> Result<T, E> + Send + Sync + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn call(&self, args: A) -> HandlerFuture<T, E> {
        future::ready((self.f)(args)).boxed()
    }
}
