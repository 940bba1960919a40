//! Error types used by the emitter.
//!
//! - [`EmitterError`] — precondition failures raised synchronously by the emitter operations.
//! - [`BoxError`] — default handler error type.
//!
//! Handler failures are **not** wrapped: an [`Emission`](crate::Emission) resolves to
//! whatever error the failing handler returned.

use thiserror::Error;

/// Boxed, thread-safe error; the default handler error type.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// # Errors produced by the emitter operations.
///
/// Every variant is returned before the registry is touched or any handler is launched.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmitterError {
    /// The event name was empty.
    #[error("Expected a non-empty string for event name but found {found:?}.")]
    InvalidEventName {
        /// The rejected value.
        found: String,
    },
}

impl EmitterError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use asyncemit::EmitterError;
    ///
    /// let err = EmitterError::InvalidEventName { found: String::new() };
    /// assert_eq!(err.as_label(), "invalid_event_name");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EmitterError::InvalidEventName { .. } => "invalid_event_name",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            EmitterError::InvalidEventName { found } => {
                format!("bad event name: {found:?}")
            }
        }
    }
}
