//! # Handler abstraction.
//!
//! This module defines the [`Handler`] trait and the shared handle type [`HandlerRef`],
//! an `Arc<dyn Handler>` suitable for registering the same handler on several events
//! and removing it later by identity.
//!
//! A handler receives the emission arguments and returns a [`HandlerFuture`]. Work done
//! before the future is built runs during [`emit`](crate::AsyncEventEmitter::emit);
//! work inside the future runs when the resulting [`Emission`](crate::Emission) is awaited.

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::error::BoxError;

/// Boxed future returned by [`Handler::call`].
pub type HandlerFuture<T, E = BoxError> = BoxFuture<'static, Result<T, E>>;

/// Shared handler handle.
///
/// Identity is the `Arc` allocation: two clones of the same `HandlerRef` are the same
/// handler, two separately allocated handlers are different even if they wrap the same
/// closure type.
pub type HandlerRef<A, T, E = BoxError> = Arc<dyn Handler<A, T, E>>;

/// # Event handler.
///
/// Invoked once per registration for every emission of the event it is registered on.
///
/// # Example
/// ```
/// use futures::FutureExt;
/// use asyncemit::{BoxError, Handler, HandlerFuture};
///
/// struct Greeter;
///
/// impl Handler<String, String> for Greeter {
///     fn call(&self, who: String) -> HandlerFuture<String> {
///         async move { Ok::<_, BoxError>(format!("hello {who}")) }.boxed()
///     }
/// }
/// ```
pub trait Handler<A, T, E = BoxError>: Send + Sync + 'static {
    /// Starts one invocation with the given arguments.
    ///
    /// Called synchronously from `emit`, in registration order. The returned future owns
    /// everything it needs; it is polled by the emission together with its siblings.
    fn call(&self, args: A) -> HandlerFuture<T, E>;
}

/// Returns `true` if both handles point to the same handler allocation.
#[inline]
pub(crate) fn same_handler<A, T, E>(a: &HandlerRef<A, T, E>, b: &HandlerRef<A, T, E>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
