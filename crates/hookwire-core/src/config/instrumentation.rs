//! Instrumentation hook configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which built-in instrumentation hooks to register at boot, and their
/// per-hook options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstrumentationConfig {
    /// Names of built-in hooks to register, e.g. `["output_metadata_timer"]`.
    #[serde(default)]
    pub hooks: Vec<String>,
    /// Hook name → options object handed to that hook when it is built.
    /// Keys are matched against hook names after the same canonicalization.
    #[serde(default)]
    pub options: HashMap<String, Value>,
}
