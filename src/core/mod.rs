//! Emitter core: registry, emission and the public emitter type.
//!
//! The only public API from this module is [`AsyncEventEmitter`], the [`Emission`] future
//! it returns, and the [`EventName`] identifier it validates.
//!
//! Internal modules:
//! - [`name`]: event name validation;
//! - [`registry`]: event name → ordered handler list;
//! - [`emission`]: joins one emission's handler futures;
//! - [`emitter`]: the four public operations.

mod emission;
mod emitter;
mod name;
mod registry;

pub use emission::Emission;
pub use emitter::AsyncEventEmitter;
pub use name::EventName;
