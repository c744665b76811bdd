//! # hookwire-instrumentation
//!
//! Instrumentation hooks for RPC servers. Provides:
//!
//! - The base hook capability ([`InstrumentationHook`]) every hook satisfies
//! - [`RequestContext`], what a hook observes about a finished call
//! - [`HookDefinition`], the registered implementation handle
//! - [`HookRegistry`], the name-keyed store the interceptor pipeline reads
//! - Built-in hooks, registered from configuration at boot
//!
//! ```rust
//! use hookwire_instrumentation::prelude::*;
//!
//! let mut registry = HookRegistry::new();
//! registry
//!     .register_with(":request_counter", |blank| {
//!         blank.call_fn(|ctx| {
//!             ctx.output_metadata.insert("counted".into(), "1".into());
//!             Ok(())
//!         })
//!     })
//!     .expect("valid hook");
//!
//! assert!(registry.any());
//! assert!(registry.lookup("request_counter").is_some());
//! ```

pub mod builtin;
pub mod capability;
pub mod context;
pub mod definition;
pub mod error;
pub mod hook;
pub mod name;
pub mod prelude;
pub mod registry;

pub use capability::Capability;
pub use context::RequestContext;
pub use definition::HookDefinition;
pub use error::RegistryError;
pub use hook::{FnHook, InstrumentationHook};
pub use name::HookName;
pub use registry::HookRegistry;
