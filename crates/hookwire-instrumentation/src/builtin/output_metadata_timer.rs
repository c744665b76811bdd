//! Hook that reports handler execution time in output metadata.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use hookwire_core::{AppError, AppResult};

use crate::context::RequestContext;
use crate::hook::InstrumentationHook;

/// Registry name of this hook.
pub const NAME: &str = "output_metadata_timer";

/// Options accepted by [`OutputMetadataTimer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputMetadataTimerOptions {
    /// Metadata key the execution time is written under.
    #[serde(default = "default_metadata_key")]
    pub metadata_key: String,
}

impl Default for OutputMetadataTimerOptions {
    fn default() -> Self {
        Self {
            metadata_key: default_metadata_key(),
        }
    }
}

fn default_metadata_key() -> String {
    "timer".to_string()
}

/// Writes the call's execution time, in milliseconds with four decimal
/// places, into the output metadata.
#[derive(Debug, Clone, Default)]
pub struct OutputMetadataTimer {
    options: OutputMetadataTimerOptions,
}

impl OutputMetadataTimer {
    /// Create the hook with explicit options.
    pub fn new(options: OutputMetadataTimerOptions) -> Self {
        Self { options }
    }

    /// Create the hook from a JSON options object.
    pub fn from_options(options: &Value) -> AppResult<Self> {
        let options = OutputMetadataTimerOptions::deserialize(options).map_err(|e| {
            AppError::configuration(format!("Invalid options for '{NAME}': {e}"))
        })?;

        if options.metadata_key.trim().is_empty() {
            return Err(AppError::configuration(format!(
                "Invalid options for '{NAME}': metadata_key must not be empty"
            )));
        }

        Ok(Self::new(options))
    }

    /// Metadata key the execution time is written under.
    pub fn metadata_key(&self) -> &str {
        &self.options.metadata_key
    }
}

#[async_trait]
impl InstrumentationHook for OutputMetadataTimer {
    async fn call(&self, ctx: &mut RequestContext) -> AppResult<()> {
        let elapsed = format!("{:.4}", ctx.execution_time_ms());
        ctx.output_metadata
            .insert(self.options.metadata_key.clone(), elapsed);
        Ok(())
    }
}
