//! Request context handed to instrumentation hooks.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Everything a hook can observe about a completed RPC call.
///
/// Built by the interceptor pipeline once the handler returns. Hooks may
/// annotate [`output_metadata`](Self::output_metadata), which the server
/// sends back as trailing metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// Fully qualified service name, e.g. `Rpc::ThingService`.
    pub service: String,
    /// Call signature (method name), e.g. `get_thing`.
    pub method: String,
    /// Whether the handler completed without error.
    pub success: bool,
    /// Error message when the call failed.
    pub error: Option<String>,
    /// Wall-clock time spent in the handler.
    pub execution_time: Duration,
    /// Trailing metadata returned to the client.
    pub output_metadata: HashMap<String, String>,
}

impl RequestContext {
    /// Create a context for a successful call with zero execution time.
    pub fn new(service: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            method: method.into(),
            success: true,
            error: None,
            execution_time: Duration::ZERO,
            output_metadata: HashMap::new(),
        }
    }

    /// Set the measured execution time.
    pub fn with_execution_time(mut self, execution_time: Duration) -> Self {
        self.execution_time = execution_time;
        self
    }

    /// Mark the call as failed.
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.success = false;
        self.error = Some(message.into());
        self
    }

    /// Execution time as fractional milliseconds.
    pub fn execution_time_ms(&self) -> f64 {
        self.execution_time.as_secs_f64() * 1000.0
    }

    /// Dotted snake_case service key: `Rpc::ThingService` → `rpc.thing_service`.
    pub fn service_key(&self) -> String {
        self.service
            .split(['/', '.', ':'])
            .filter(|segment| !segment.is_empty())
            .map(underscore)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Service key joined with the call signature: `rpc.thing_service.get_thing`.
    pub fn method_key(&self) -> String {
        format!("{}.{}", self.service_key(), self.method)
    }
}

fn underscore(segment: &str) -> String {
    let chars: Vec<char> = segment.chars().collect();
    let mut out = String::with_capacity(segment.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                out.push('_');
            }
        }
        out.push(c.to_ascii_lowercase());
    }

    out
}
