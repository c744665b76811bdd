//! Integration tests for config-driven hook registration at boot.

use std::time::Duration;

use serial_test::serial;

use hookwire_core::ErrorKind;
use hookwire_core::config::AppConfig;
use hookwire_instrumentation::{HookRegistry, RequestContext, builtin};

/// Sets an environment variable for the lifetime of the guard
struct EnvGuard(&'static str);

impl EnvGuard {
    fn set(key: &'static str, value: &str) -> Self {
        // SAFETY: every test touching the process environment runs under `#[serial]`.
        unsafe { std::env::set_var(key, value) };
        Self(key)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: see `EnvGuard::set`.
        unsafe { std::env::remove_var(self.0) };
    }
}

#[test]
#[serial]
fn test_default_config_file_registers_timer() {
    let config = AppConfig::load("test").expect("load config");
    let mut registry = HookRegistry::new();
    builtin::register_configured(&mut registry, &config.instrumentation).expect("register");

    assert!(registry.lookup("output_metadata_timer").is_some());
}

#[test]
#[serial]
fn test_env_overrides_hook_list() {
    let _hooks = EnvGuard::set(
        "HOOKWIRE__INSTRUMENTATION__HOOKS",
        "output_metadata_timer,statsd",
    );
    let _level = EnvGuard::set("HOOKWIRE__LOGGING__LEVEL", "debug");

    let config = AppConfig::load("test").expect("load config");
    assert_eq!(
        config.instrumentation.hooks,
        vec!["output_metadata_timer".to_string(), "statsd".to_string()]
    );
    assert_eq!(config.logging.level, "debug");

    let mut registry = HookRegistry::new();
    let err = builtin::register_configured(&mut registry, &config.instrumentation).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Configuration);
    assert!(!registry.any());
}

#[tokio::test]
async fn test_timer_options_flow_from_config() {
    let config: AppConfig = serde_json::from_value(serde_json::json!({
        "instrumentation": {
            "hooks": ["output_metadata_timer"],
            "options": { "output_metadata_timer": { "metadata_key": "x-elapsed" } }
        }
    }))
    .expect("deserialize");

    let mut registry = HookRegistry::new();
    builtin::register_configured(&mut registry, &config.instrumentation).expect("register");

    let mut ctx = RequestContext::new("Rpc::ThingService", "get_thing")
        .with_execution_time(Duration::from_micros(250));
    registry
        .lookup("output_metadata_timer")
        .expect("registered")
        .call(&mut ctx)
        .await
        .expect("call");

    assert_eq!(
        ctx.output_metadata.get("x-elapsed").map(String::as_str),
        Some("0.2500")
    );
}

#[test]
fn test_unknown_builtin_fails_boot() {
    let config: AppConfig = serde_json::from_value(serde_json::json!({
        "instrumentation": { "hooks": ["statsd"] }
    }))
    .expect("deserialize");

    let mut registry = HookRegistry::new();
    let err = builtin::register_configured(&mut registry, &config.instrumentation).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Configuration);
    assert!(!registry.any());
}
