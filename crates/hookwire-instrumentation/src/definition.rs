//! Hook definitions: the implementations the registry stores.
//!
//! A [`HookDefinition`] is a cheap, clonable handle. It carries the hook's
//! type name, the capabilities it descends from, and its `call` entry point
//! if one has been defined. Rust hooks get all three from
//! [`HookDefinition::from_hook`]; hooks described at runtime (plugins) start
//! from [`HookDefinition::foreign`] and are only checked when registered.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use hookwire_core::{AppError, AppResult};

use crate::capability::Capability;
use crate::context::RequestContext;
use crate::hook::{FnHook, InstrumentationHook};

/// Type name given to blanks built by the registry.
pub const ANONYMOUS_TYPE_NAME: &str = "anonymous";

/// A registered (or to-be-registered) hook implementation.
#[derive(Clone)]
pub struct HookDefinition {
    /// Human-readable type name, used in diagnostics.
    type_name: Cow<'static, str>,
    /// Capabilities this definition descends from.
    ancestors: Vec<Capability>,
    /// The `call` entry point, if defined.
    call: Option<Arc<dyn InstrumentationHook>>,
}

impl HookDefinition {
    /// Definition for a Rust hook type. Conforms to the base capability.
    pub fn from_hook<H>(hook: H) -> Self
    where
        H: InstrumentationHook + 'static,
    {
        Self {
            type_name: Cow::Borrowed(std::any::type_name::<H>()),
            ancestors: vec![Capability::BASE],
            call: Some(Arc::new(hook)),
        }
    }

    /// A fresh anonymous blank that descends from the base capability but
    /// has no `call` yet. Registry builders start from this.
    pub fn anonymous() -> Self {
        Self {
            type_name: Cow::Borrowed(ANONYMOUS_TYPE_NAME),
            ancestors: vec![Capability::BASE],
            call: None,
        }
    }

    /// A definition described at runtime, with an explicit ancestry and no
    /// `call` yet.
    pub fn foreign(
        type_name: impl Into<String>,
        ancestors: impl IntoIterator<Item = Capability>,
    ) -> Self {
        Self {
            type_name: Cow::Owned(type_name.into()),
            ancestors: ancestors.into_iter().collect(),
            call: None,
        }
    }

    /// Define `call` with a hook value.
    pub fn with_call<H>(mut self, hook: H) -> Self
    where
        H: InstrumentationHook + 'static,
    {
        self.call = Some(Arc::new(hook));
        self
    }

    /// Define `call` with a closure.
    pub fn call_fn<F>(self, f: F) -> Self
    where
        F: Fn(&mut RequestContext) -> AppResult<()> + Send + Sync + 'static,
    {
        self.with_call(FnHook::new(f))
    }

    /// Rename the definition's type.
    pub fn named(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Cow::Owned(type_name.into());
        self
    }

    /// Type name used in diagnostics.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Capabilities this definition descends from.
    pub fn ancestors(&self) -> &[Capability] {
        &self.ancestors
    }

    /// Whether `capability` is among this definition's ancestors.
    pub fn descends_from(&self, capability: &Capability) -> bool {
        self.ancestors.contains(capability)
    }

    /// Whether a `call` entry point is defined.
    pub fn responds_to_call(&self) -> bool {
        self.call.is_some()
    }

    /// The `call` entry point.
    pub fn hook(&self) -> Option<&Arc<dyn InstrumentationHook>> {
        self.call.as_ref()
    }

    /// Whether both definitions share the same `call` instance.
    pub fn same_hook(&self, other: &HookDefinition) -> bool {
        match (&self.call, &other.call) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Invoke the `call` entry point.
    pub async fn call(&self, ctx: &mut RequestContext) -> AppResult<()> {
        match &self.call {
            Some(hook) => hook.call(ctx).await,
            None => Err(AppError::instrumentation(format!(
                "hook type '{}' does not define `call`",
                self.type_name
            ))),
        }
    }
}

impl fmt::Debug for HookDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookDefinition")
            .field("type_name", &self.type_name)
            .field("ancestors", &self.ancestors)
            .field("call", &self.call)
            .finish()
    }
}
