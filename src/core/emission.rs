//! # Emission - the future returned by `emit`.
//!
//! ## Architecture
//! ```text
//! emit(name, args)
//!     │ snapshot handlers, call each in registration order
//!     ├──► h1.call(args.clone()) ──► fut1 ─┐
//!     ├──► h2.call(args.clone()) ──► fut2 ─┼──► try_join_all ──► Emission
//!     └──► hN.call(args.clone()) ──► futN ─┘
//! ```
//!
//! ## Rules
//! - Results come back in registration order, whatever order the futures finish in.
//! - The first handler error wins: the emission resolves to it unmodified and the
//!   remaining handler futures are dropped.
//! - Each poll drives the handler futures front-to-back.
//! - An emission with no handlers still resolves through the future (to an empty `Vec`).

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::future::{self, BoxFuture};
use tracing::Instrument;

use crate::handlers::HandlerFuture;

/// Pending result of one [`emit`](crate::AsyncEventEmitter::emit) call.
///
/// Resolves to `Ok(results)` in registration order once every handler has completed,
/// or to the first handler error.
#[must_use = "handlers' asynchronous work only runs when the emission is awaited"]
pub struct Emission<T, E> {
    inner: BoxFuture<'static, Result<Vec<T>, E>>,
    handlers: usize,
}

impl<T, E> Emission<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Joins already-started handler futures.
    pub(crate) fn new(futures: Vec<HandlerFuture<T, E>>, span: tracing::Span) -> Self {
        let handlers = futures.len();
        let inner = future::try_join_all(futures).instrument(span).boxed();
        Self { inner, handlers }
    }
}

impl<T, E> Emission<T, E> {
    /// Number of handlers this emission is waiting on.
    pub fn handler_count(&self) -> usize {
        self.handlers
    }
}

impl<T, E> Future for Emission<T, E> {
    type Output = Result<Vec<T>, E>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.as_mut().poll(cx)
    }
}

impl<T, E> fmt::Debug for Emission<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emission")
            .field("handlers", &self.handlers)
            .finish_non_exhaustive()
    }
}
