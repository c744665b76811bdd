//! hookwire boot check
//!
//! Loads configuration, initialises logging, registers the configured
//! built-in instrumentation hooks and logs the resulting inventory. This is
//! the same boot-time sequence an RPC server runs before it starts serving.

use tracing_subscriber::{EnvFilter, fmt};

use hookwire_core::config::AppConfig;
use hookwire_core::error::AppError;
use hookwire_instrumentation::HookRegistry;
use hookwire_instrumentation::builtin;

fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(&config) {
        tracing::error!("Boot failed: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("HOOKWIRE_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Build the hook registry and report what was registered
fn run(config: &AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting hookwire v{}", env!("CARGO_PKG_VERSION"));

    let mut registry = HookRegistry::new();
    builtin::register_configured(&mut registry, &config.instrumentation)?;

    if !registry.any() {
        tracing::info!("No instrumentation hooks configured");
        return Ok(());
    }

    registry.for_each(|name, definition| {
        tracing::info!(
            hook = %name,
            type_name = definition.type_name(),
            "Instrumentation hook ready"
        );
    });
    tracing::info!(hook_count = registry.len(), "Hook registry ready");

    Ok(())
}
