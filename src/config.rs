//! # Emitter configuration.
//!
//! Provides [`EmitterConfig`], the optional settings an [`AsyncEventEmitter`](crate::AsyncEventEmitter)
//! is built with. Nothing here changes emission semantics; an emitter built with
//! [`EmitterConfig::default`] behaves exactly like one built with `new()`.
//!
//! ## Sentinel values
//! - `registry_capacity = 0` → no pre-allocation

use std::borrow::Cow;

/// Settings for an emitter instance.
///
/// ## Field semantics
/// - `name`: label recorded on every tracing event and span the emitter produces
/// - `registry_capacity`: number of distinct event names to pre-allocate room for (`0` = none)
#[derive(Clone, Debug)]
pub struct EmitterConfig {
    /// Label used in logs to tell emitter instances apart.
    pub name: Cow<'static, str>,

    /// Initial capacity of the event-name map.
    ///
    /// A hint only; the registry grows on demand either way.
    pub registry_capacity: usize,
}

impl EmitterConfig {
    /// Returns a config with the given label and default everything else.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the registry capacity as an `Option`.
    ///
    /// - `None` → no pre-allocation
    /// - `Some(n)` → reserve room for `n` event names
    #[inline]
    pub fn capacity_hint(&self) -> Option<usize> {
        if self.registry_capacity == 0 {
            None
        } else {
            Some(self.registry_capacity)
        }
    }
}

impl Default for EmitterConfig {
    /// Default configuration:
    ///
    /// - `name = "emitter"`
    /// - `registry_capacity = 0` (grow on demand)
    fn default() -> Self {
        Self {
            name: Cow::Borrowed("emitter"),
            registry_capacity: 0,
        }
    }
}
