//! # AsyncEventEmitter - registration, removal, emission and counting.
//!
//! The emitter owns a [`Registry`] behind a `RwLock`. Every operation validates its
//! event name first and fails with [`EmitterError`] before touching the registry.
//!
//! ## Lifecycle of an emission
//! ```text
//! emit(name, args)
//!   ├─► validate(name)                  ── Err ─► EmitterError (nothing invoked)
//!   ├─► read lock → snapshot handlers → unlock
//!   ├─► for h in snapshot: h.call(args.clone())   (registration order)
//!   └─► Emission(try_join_all(futures))
//!          └─► .await ─► Ok(results in registration order) | Err(first handler error)
//! ```
//!
//! ## Rules
//! - The lock is never held while a handler runs, so handlers may call back into the
//!   emitter (`on`, `off`, `emit`, `listener_count`).
//! - Changes made during an emission only affect later emissions.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, debug_span, trace};

use crate::config::EmitterConfig;
use crate::core::emission::Emission;
use crate::core::name::{EventName, validate};
use crate::core::registry::Registry;
use crate::error::{BoxError, EmitterError};
use crate::handlers::HandlerRef;

/// Publish/subscribe hub with asynchronous handlers.
///
/// - `A`: arguments passed to every handler (cloned once per handler)
/// - `T`: value each handler produces
/// - `E`: handler error type
///
/// # Example
/// ```rust
/// use asyncemit::{AsyncEventEmitter, BoxError, HandlerFn, SyncHandlerFn};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), BoxError> {
/// let emitter: AsyncEventEmitter<String, String> = AsyncEventEmitter::new();
///
/// emitter.on("foo", HandlerFn::arc(|s: String| async move { Ok::<_, BoxError>(format!("bar{s}")) }))?;
/// emitter.on("foo", SyncHandlerFn::arc(|s: String| Ok::<_, BoxError>(format!("baz{s}"))))?;
///
/// let results = emitter.emit("foo", "x".to_string())?.await?;
/// assert_eq!(results, ["barx", "bazx"]);
/// # Ok(())
/// # }
/// ```
pub struct AsyncEventEmitter<A, T, E = BoxError> {
    cfg: EmitterConfig,
    registry: RwLock<Registry<A, T, E>>,
}

impl<A, T, E> AsyncEventEmitter<A, T, E>
where
    A: Clone + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    /// Creates an emitter with [`EmitterConfig::default`].
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    /// Creates an emitter with the given configuration.
    pub fn with_config(cfg: EmitterConfig) -> Self {
        let registry = Registry::new(cfg.capacity_hint());
        Self {
            cfg,
            registry: RwLock::new(registry),
        }
    }

    /// Returns the configuration this emitter was built with.
    pub fn config(&self) -> &EmitterConfig {
        &self.cfg
    }

    /// Registers `handler` for `event_name`.
    ///
    /// Handlers run in registration order. Registering the same handler twice makes it
    /// run twice per emission.
    ///
    /// # Errors
    /// [`EmitterError::InvalidEventName`] if `event_name` is empty.
    pub fn on(
        &self,
        event_name: impl AsRef<str>,
        handler: HandlerRef<A, T, E>,
    ) -> Result<(), EmitterError> {
        let name = validate(event_name.as_ref())?;
        let count = self.write().insert(name, handler);
        trace!(emitter = %self.cfg.name, event = name, count, "handler registered");
        Ok(())
    }

    /// Removes the first registration of `handler` for `event_name`.
    ///
    /// Unknown handlers and unknown events are ignored.
    ///
    /// # Errors
    /// [`EmitterError::InvalidEventName`] if `event_name` is empty.
    pub fn off(
        &self,
        event_name: impl AsRef<str>,
        handler: &HandlerRef<A, T, E>,
    ) -> Result<(), EmitterError> {
        let name = validate(event_name.as_ref())?;
        let removed = self.write().remove(name, handler);
        debug!(emitter = %self.cfg.name, event = name, index = ?removed, "handler removal");
        Ok(())
    }

    /// Invokes every handler registered for `event_name` with a clone of `args`.
    ///
    /// The handler list is captured when this is called; handlers are called right away,
    /// in registration order, and their futures are joined into the returned [`Emission`].
    ///
    /// # Errors
    /// [`EmitterError::InvalidEventName`] if `event_name` is empty. Handler failures are
    /// reported by the `Emission`, not here.
    pub fn emit(
        &self,
        event_name: impl AsRef<str>,
        args: A,
    ) -> Result<Emission<T, E>, EmitterError> {
        let name = validate(event_name.as_ref())?;
        let snapshot = self.read().snapshot(name);

        debug!(emitter = %self.cfg.name, event = name, handlers = snapshot.len(), "emitting");
        let span = debug_span!(
            "emit",
            emitter = %self.cfg.name,
            event = name,
            handlers = snapshot.len()
        );

        let futures: Vec<_> = {
            let _entered = span.enter();
            snapshot
                .iter()
                .map(|handler| handler.call(args.clone()))
                .collect()
        };
        Ok(Emission::new(futures, span))
    }

    /// Returns how many handlers are registered for `event_name` (0 if none ever were).
    ///
    /// # Errors
    /// [`EmitterError::InvalidEventName`] if `event_name` is empty.
    pub fn listener_count(&self, event_name: impl AsRef<str>) -> Result<usize, EmitterError> {
        let name = validate(event_name.as_ref())?;
        Ok(self.read().count(name))
    }

    /// Returns sorted list of event names that have had a handler registered.
    ///
    /// Names whose handlers were all removed are still listed.
    pub fn event_names(&self) -> Vec<EventName> {
        self.read().names()
    }

    // Handlers never run under the lock; a poisoned registry is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, Registry<A, T, E>> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry<A, T, E>> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<A, T, E> Default for AsyncEventEmitter<A, T, E>
where
    A: Clone + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A, T, E> std::fmt::Debug for AsyncEventEmitter<A, T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncEventEmitter")
            .field("name", &self.cfg.name)
            .finish_non_exhaustive()
    }
}
