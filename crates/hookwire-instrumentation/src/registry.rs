//! Hook registry — name-keyed store of instrumentation hooks.
//!
//! Hooks are registered at boot, before the server starts taking traffic,
//! and read by the interceptor pipeline afterwards. Registration takes
//! `&mut self`, so once a finished registry is shared (typically behind an
//! `Arc`) it can only be read.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, warn};

use crate::capability::Capability;
use crate::definition::HookDefinition;
use crate::error::RegistryError;
use crate::hook::InstrumentationHook;
use crate::name::HookName;

/// Registry of instrumentation hooks keyed by canonical name.
///
/// Registering a name that already exists replaces the previous entry.
#[derive(Clone, Default)]
pub struct HookRegistry {
    /// Canonical name → hook definition.
    hooks: HashMap<HookName, HookDefinition>,
}

impl HookRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            hooks: HashMap::new(),
        }
    }

    /// Registers an explicit hook definition under `name`.
    ///
    /// The definition must define `call` and descend from
    /// [`Capability::BASE`]. On failure the registry is left unchanged.
    pub fn register(
        &mut self,
        name: &str,
        definition: HookDefinition,
    ) -> Result<(), RegistryError> {
        let name = HookName::parse(name)?;
        Self::validate(&name, &definition)?;

        debug!(
            hook = %name,
            type_name = definition.type_name(),
            "Registering instrumentation hook"
        );

        if self.hooks.insert(name.clone(), definition).is_some() {
            debug!(hook = %name, "Replaced existing instrumentation hook");
        }

        Ok(())
    }

    /// Registers a Rust hook value under `name`.
    pub fn register_hook<H>(&mut self, name: &str, hook: H) -> Result<(), RegistryError>
    where
        H: InstrumentationHook + 'static,
    {
        self.register(name, HookDefinition::from_hook(hook))
    }

    /// Registers a hook built from an anonymous blank.
    ///
    /// `builder` receives [`HookDefinition::anonymous`], which already
    /// descends from the base capability, and returns the finished
    /// definition (normally with `call` defined).
    pub fn register_with<F>(&mut self, name: &str, builder: F) -> Result<(), RegistryError>
    where
        F: FnOnce(HookDefinition) -> HookDefinition,
    {
        self.register(name, builder(HookDefinition::anonymous()))
    }

    /// Registers an explicit definition after customizing it with `builder`.
    pub fn register_extended<F>(
        &mut self,
        name: &str,
        definition: HookDefinition,
        builder: F,
    ) -> Result<(), RegistryError>
    where
        F: FnOnce(HookDefinition) -> HookDefinition,
    {
        self.register(name, builder(definition))
    }

    fn validate(name: &HookName, definition: &HookDefinition) -> Result<(), RegistryError> {
        if !definition.responds_to_call() {
            warn!(
                hook = %name,
                type_name = definition.type_name(),
                "Rejected instrumentation hook without `call`"
            );
            return Err(RegistryError::MissingCallCapability {
                name: name.to_string(),
                type_name: definition.type_name().to_string(),
            });
        }

        if !definition.descends_from(&Capability::BASE) {
            warn!(
                hook = %name,
                type_name = definition.type_name(),
                expected = %Capability::BASE,
                "Rejected instrumentation hook outside the base capability"
            );
            return Err(RegistryError::NotADescendant {
                name: name.to_string(),
                type_name: definition.type_name().to_string(),
                expected: Capability::BASE,
            });
        }

        Ok(())
    }

    /// Returns the hook registered under `name`, if any.
    ///
    /// `name` is canonicalized the same way as on registration. Names that
    /// cannot be canonicalized are simply absent.
    pub fn lookup(&self, name: &str) -> Option<&HookDefinition> {
        let name = HookName::parse(name).ok()?;
        self.hooks.get(&name)
    }

    /// Calls `visitor` once for every registered hook. Order is unspecified.
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&HookName, &HookDefinition),
    {
        for (name, definition) in &self.hooks {
            visitor(name, definition);
        }
    }

    /// Iterates over all registered hooks. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&HookName, &HookDefinition)> {
        self.hooks.iter()
    }

    /// Returns an owned copy of the name → hook mapping.
    ///
    /// The copy shares hook instances with the registry but changes to the
    /// map itself do not flow back.
    pub fn snapshot(&self) -> HashMap<HookName, HookDefinition> {
        self.hooks.clone()
    }

    /// Returns whether at least one hook is registered.
    pub fn any(&self) -> bool {
        !self.hooks.is_empty()
    }

    /// Returns the number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Removes every registered hook.
    pub fn clear(&mut self) {
        debug!(hook_count = self.hooks.len(), "Clearing instrumentation hooks");
        self.hooks.clear();
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistry")
            .field("hook_count", &self.hooks.len())
            .finish()
    }
}
