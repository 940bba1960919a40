//! # Handler abstractions.
//!
//! This module provides the handler-related types:
//! - [`Handler`] - trait for anything that can be invoked by an emission
//! - [`HandlerFn`] - asynchronous closure handler
//! - [`SyncHandlerFn`] - synchronous closure handler
//! - [`HandlerRef`] - shared reference to a handler (`Arc<dyn Handler>`)
//! - [`HandlerFuture`] - boxed future returned by every invocation

mod handler;
mod handler_fn;

pub use handler::{Handler, HandlerFuture, HandlerRef};
pub(crate) use handler::same_handler;
pub use handler_fn::{HandlerFn, SyncHandlerFn};
