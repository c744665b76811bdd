//! Capability identities used for descendant checks.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Symbolic identity of a hook base type.
///
/// A hook definition lists the capabilities it descends from; the registry
/// only accepts definitions whose ancestry includes [`Capability::BASE`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capability(Cow<'static, str>);

impl Capability {
    /// The base instrumentation hook capability.
    pub const BASE: Capability = Capability::from_static("hookwire::instrumentation::Base");

    /// Capability identity known at compile time.
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    /// Capability identity supplied at runtime (plugin manifests and such).
    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    /// The identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
