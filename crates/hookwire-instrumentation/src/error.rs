//! Registry error types.

use thiserror::Error;

use hookwire_core::AppError;

use crate::capability::Capability;

/// Contract violations detected while registering a hook.
///
/// All of them are raised synchronously by the registry before the map is
/// touched, so a failed registration never leaves a partial entry behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The hook name is empty once canonicalized.
    #[error("hook name must not be empty")]
    EmptyName,

    /// The candidate has no `call` entry point.
    #[error("hook '{name}' ({type_name}) does not define a `call` entry point")]
    MissingCallCapability {
        /// Canonical name the hook was registered under.
        name: String,
        /// Type name of the candidate.
        type_name: String,
    },

    /// The candidate does not descend from the base hook capability.
    #[error("hook '{name}' ({type_name}) must descend from {expected}")]
    NotADescendant {
        /// Canonical name the hook was registered under.
        name: String,
        /// Type name of the candidate.
        type_name: String,
        /// The base capability the candidate was expected to descend from.
        expected: Capability,
    },
}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::EmptyName => AppError::validation(err.to_string()),
            _ => AppError::instrumentation(err.to_string()),
        }
    }
}
