//! # asyncemit
//!
//! **asyncemit** is a minimal publish/subscribe emitter whose handlers may be
//! asynchronous.
//!
//! Handlers are registered against named events. Emitting an event calls every handler
//! registered for it, in registration order, and returns a future that resolves to all
//! of their results, in the same order, once the slowest one is done.
//!
//! ## Architecture
//! ```text
//!   on("foo", h1)   on("foo", h2)   on("bar", h3)
//!         │               │               │
//!         ▼               ▼               ▼
//! ┌──────────────────────────────────────────────────┐
//! │ AsyncEventEmitter                                │
//! │   Registry (RwLock)                              │
//! │     "foo" → [h1, h2]                             │
//! │     "bar" → [h3]                                 │
//! └────────────────────────┬─────────────────────────┘
//!                          │ emit("foo", args)
//!                          │   snapshot [h1, h2]
//!                          ▼
//!              h1.call(args.clone()) ──► fut1 ─┐
//!              h2.call(args.clone()) ──► fut2 ─┴─► Emission
//!                                                    │ .await
//!                                                    ▼
//!                               Ok([r1, r2])  or  Err(first handler error)
//! ```
//!
//! ## Features
//! | Area              | Description                                                 | Key types / traits                         |
//! |-------------------|-------------------------------------------------------------|--------------------------------------------|
//! | **Emitter**       | Register, remove, emit, count.                              | [`AsyncEventEmitter`], [`Emission`]        |
//! | **Handlers**      | Async or sync closures, or your own types.                  | [`Handler`], [`HandlerFn`], [`SyncHandlerFn`] |
//! | **Event names**   | Validated, non-empty identifiers.                           | [`EventName`]                              |
//! | **Errors**        | Typed precondition errors; handler errors pass through.     | [`EmitterError`], [`BoxError`]             |
//! | **Configuration** | Per-instance label and registry sizing.                     | [`EmitterConfig`]                          |
//!
//! ## Semantics in brief
//! - Bad event names fail synchronously with [`EmitterError`]; nothing is registered,
//!   removed or invoked.
//! - `off` of a handler or event that is not registered is a no-op.
//! - One failing handler fails the whole emission; there is no per-handler isolation.
//! - `emit` captures the handler list when called; handlers added or removed while an
//!   emission is running affect only later emissions.
//!
//! ## Logging
//! The crate emits [`tracing`] events (`trace` on registration, `debug` on removal and
//! emission) and instruments every [`Emission`] with an `emit` span. Install any
//! `tracing` subscriber to see them.
//!
//! ## Example
//! ```rust
//! use asyncemit::{AsyncEventEmitter, BoxError, HandlerFn, HandlerRef};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), BoxError> {
//!     let emitter: AsyncEventEmitter<(), &'static str> = AsyncEventEmitter::new();
//!
//!     let bar: HandlerRef<(), &'static str> =
//!         HandlerFn::arc(|_: ()| async { Ok::<_, BoxError>("bar") });
//!
//!     emitter.on("foo", bar.clone())?;
//!     assert_eq!(emitter.listener_count("foo")?, 1);
//!     assert_eq!(emitter.emit("foo", ())?.await?, ["bar"]);
//!
//!     emitter.off("foo", &bar)?;
//!     assert!(emitter.emit("foo", ())?.await?.is_empty());
//!     Ok(())
//! }
//! ```
mod config;
mod core;
mod error;
mod handlers;

// ---- Public re-exports ----

pub use config::EmitterConfig;
pub use crate::core::{AsyncEventEmitter, Emission, EventName};
pub use error::{BoxError, EmitterError};
pub use handlers::{Handler, HandlerFn, HandlerFuture, HandlerRef, SyncHandlerFn};
