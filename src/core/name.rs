//! Validated event names.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::error::EmitterError;

/// Non-empty event identifier.
///
/// Every emitter operation validates its event name the same way; `EventName` is the
/// owned, already-validated form used as the registry key.
///
/// ```
/// use asyncemit::EventName;
///
/// let name: EventName = "user.created".parse().unwrap();
/// assert_eq!(name.as_str(), "user.created");
/// assert!("".parse::<EventName>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventName(String);

impl EventName {
    /// Validates and wraps `name`.
    pub fn new(name: impl Into<String>) -> Result<Self, EmitterError> {
        let name = name.into();
        validate(&name)?;
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wraps a name that already passed [`validate`].
    pub(crate) fn from_validated(name: &str) -> Self {
        Self(name.to_owned())
    }
}

/// Checks the non-empty invariant without allocating.
pub(crate) fn validate(name: &str) -> Result<&str, EmitterError> {
    if name.is_empty() {
        return Err(EmitterError::InvalidEventName {
            found: name.to_owned(),
        });
    }
    Ok(name)
}

impl AsRef<str> for EventName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Hash/Eq are derived from the inner `String`, so lookups by `&str` agree with lookups by key.
impl Borrow<str> for EventName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EventName {
    type Err = EmitterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for EventName {
    type Error = EmitterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for EventName {
    type Error = EmitterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
