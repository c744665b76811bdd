//! Prelude for convenient imports.

pub use async_trait::async_trait;

pub use hookwire_core::{AppError, AppResult};

pub use crate::capability::Capability;
pub use crate::context::RequestContext;
pub use crate::definition::HookDefinition;
pub use crate::error::RegistryError;
pub use crate::hook::{FnHook, InstrumentationHook};
pub use crate::name::HookName;
pub use crate::registry::HookRegistry;
