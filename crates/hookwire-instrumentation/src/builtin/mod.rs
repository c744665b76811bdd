//! Built-in hooks and config-driven registration.

pub mod output_metadata_timer;

use std::collections::{HashMap, HashSet};

use serde_json::Value;
use tracing::info;

use hookwire_core::config::instrumentation::InstrumentationConfig;
use hookwire_core::{AppError, AppResult};

use crate::definition::HookDefinition;
use crate::name::HookName;
use crate::registry::HookRegistry;

pub use output_metadata_timer::{OutputMetadataTimer, OutputMetadataTimerOptions};

/// Names of every built-in hook.
pub const BUILTIN_HOOKS: &[&str] = &[output_metadata_timer::NAME];

/// Registers each built-in hook listed in `config.hooks`.
///
/// Hook names and option keys are both canonicalized. Every hook is built
/// before anything is registered, so a configuration error (unknown hook,
/// options for a hook that is not listed, invalid options) leaves the
/// registry untouched.
pub fn register_configured(
    registry: &mut HookRegistry,
    config: &InstrumentationConfig,
) -> AppResult<()> {
    let options = canonical_options(config)?;
    let mut built = Vec::with_capacity(config.hooks.len());

    for raw in &config.hooks {
        let name = HookName::parse(raw)?;
        let hook_options = options
            .get(&name)
            .cloned()
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));

        let definition = match name.as_str() {
            output_metadata_timer::NAME => {
                HookDefinition::from_hook(OutputMetadataTimer::from_options(&hook_options)?)
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown built-in instrumentation hook '{other}' (available: {})",
                    BUILTIN_HOOKS.join(", ")
                )));
            }
        };
        built.push((name, definition));
    }

    for (name, definition) in built {
        registry.register(name.as_str(), definition)?;
        info!(hook = %name, "Built-in instrumentation hook registered");
    }

    Ok(())
}

/// Options keyed by canonical hook name, checked against `config.hooks`.
fn canonical_options(config: &InstrumentationConfig) -> AppResult<HashMap<HookName, Value>> {
    let listed = config
        .hooks
        .iter()
        .map(|raw| HookName::parse(raw))
        .collect::<Result<HashSet<_>, _>>()?;

    let mut options = HashMap::with_capacity(config.options.len());
    for (raw, value) in &config.options {
        let name = HookName::parse(raw)?;
        if !listed.contains(&name) {
            return Err(AppError::configuration(format!(
                "Options given for instrumentation hook '{name}', which is not listed in hooks"
            )));
        }
        if options.insert(name.clone(), value.clone()).is_some() {
            return Err(AppError::configuration(format!(
                "Options for instrumentation hook '{name}' are given more than once"
            )));
        }
    }

    Ok(options)
}
