//! Base hook capability.
//!
//! [`InstrumentationHook`] is the contract every instrumentation hook
//! satisfies. The interceptor pipeline invokes [`call`](InstrumentationHook::call)
//! once per RPC, after the handler has run.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use hookwire_core::AppResult;

use crate::context::RequestContext;

/// Trait implemented by instrumentation hooks.
///
/// Implementing it is how a Rust type descends from the base capability;
/// such types are accepted by the registry without a runtime ancestry check
/// failing.
#[async_trait]
pub trait InstrumentationHook: Send + Sync + fmt::Debug {
    /// Observe (and optionally annotate) a completed call.
    async fn call(&self, ctx: &mut RequestContext) -> AppResult<()>;
}

type CallFn = dyn Fn(&mut RequestContext) -> AppResult<()> + Send + Sync;

/// A closure-based hook, used by registry builders to define `call`.
#[derive(Clone)]
pub struct FnHook {
    /// Handler function.
    f: Arc<CallFn>,
}

impl FnHook {
    /// Wrap a closure as a hook.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut RequestContext) -> AppResult<()> + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }
}

impl fmt::Debug for FnHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHook").field("f", &"<closure>").finish()
    }
}

#[async_trait]
impl InstrumentationHook for FnHook {
    async fn call(&self, ctx: &mut RequestContext) -> AppResult<()> {
        (self.f)(ctx)
    }
}
