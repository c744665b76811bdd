//! Shared test helpers for integration tests.

use std::time::Duration;

use hookwire_instrumentation::prelude::*;

/// Hook that writes a fixed tag into output metadata
#[derive(Debug)]
pub struct TagHook(pub &'static str);

#[async_trait]
impl InstrumentationHook for TagHook {
    async fn call(&self, ctx: &mut RequestContext) -> AppResult<()> {
        ctx.output_metadata
            .insert("tag".to_string(), self.0.to_string());
        Ok(())
    }
}

/// Context for a successful call that took `millis`
pub fn request(millis: u64) -> RequestContext {
    RequestContext::new("Rpc::ThingService", "get_thing")
        .with_execution_time(Duration::from_millis(millis))
}

/// Invoke a definition against a fresh context and return the annotated context
pub async fn invoke(definition: &HookDefinition) -> RequestContext {
    let mut ctx = request(5);
    definition
        .call(&mut ctx)
        .await
        .expect("hook call should succeed");
    ctx
}

/// Read the `tag` metadata written by [`TagHook`]
pub fn tag_of(ctx: &RequestContext) -> Option<&str> {
    ctx.output_metadata.get("tag").map(String::as_str)
}
