//! Integration tests for the hook registry contract.

mod helpers;

use std::sync::Arc;

use hookwire_instrumentation::prelude::*;

use helpers::{TagHook, invoke, tag_of};

#[tokio::test]
async fn test_register_then_lookup_returns_implementation() {
    let mut registry = HookRegistry::new();
    let statsd = HookDefinition::from_hook(TagHook("statsd"));
    registry.register(":statsd", statsd.clone()).expect("register");

    assert!(registry.any());
    let found = registry.lookup(":statsd").expect("registered");
    assert!(found.same_hook(&statsd));

    let ctx = invoke(found).await;
    assert_eq!(tag_of(&ctx), Some("statsd"));

    registry.clear();
    assert!(!registry.any());
    assert!(registry.lookup(":statsd").is_none());
}

#[tokio::test]
async fn test_duplicate_registration_overwrites() {
    let mut registry = HookRegistry::new();
    registry.register_hook("timer", TagHook("first")).expect("register");
    registry.register_hook("timer", TagHook("second")).expect("register");

    let ctx = invoke(registry.lookup("timer").expect("registered")).await;
    assert_eq!(tag_of(&ctx), Some("second"));

    let mut visits = 0;
    registry.for_each(|name, _| {
        assert_eq!(name.as_str(), "timer");
        visits += 1;
    });
    assert_eq!(visits, 1);
}

#[test]
fn test_missing_call_leaves_registry_unchanged() {
    let mut registry = HookRegistry::new();
    assert!(!registry.any());

    let err = registry
        .register_with("counter", |blank| blank.named("Counter"))
        .unwrap_err();
    assert!(matches!(
        err,
        RegistryError::MissingCallCapability { ref name, ref type_name }
            if name == "counter" && type_name == "Counter"
    ));
    assert!(!registry.any());
    assert!(registry.snapshot().is_empty());

    registry.register_hook("other", TagHook("other")).expect("register");
    let before = registry.snapshot();
    let _ = registry
        .register("counter", HookDefinition::foreign("Counter", [Capability::BASE]))
        .unwrap_err();
    let after = registry.snapshot();
    assert_eq!(before.keys().collect::<Vec<_>>(), after.keys().collect::<Vec<_>>());
}

#[test]
fn test_non_descendant_is_rejected_with_expected_base() {
    let mut registry = HookRegistry::new();
    let plugin = HookDefinition::foreign("VendorHook", [Capability::new("vendor::Hook")])
        .call_fn(|_| Ok(()));

    let err = registry.register("vendor", plugin).unwrap_err();
    assert_eq!(
        err,
        RegistryError::NotADescendant {
            name: "vendor".to_string(),
            type_name: "VendorHook".to_string(),
            expected: Capability::BASE,
        }
    );

    let app_err: AppError = err.into();
    assert!(app_err.message.contains("hookwire::instrumentation::Base"));
    assert!(!registry.any());
}

#[test]
fn test_clear_empties_registry() {
    let mut registry = HookRegistry::new();
    registry.register_hook("a", TagHook("a")).expect("register");
    registry.register_hook("b", TagHook("b")).expect("register");
    assert_eq!(registry.len(), 2);

    registry.clear();
    assert!(!registry.any());
    assert!(registry.snapshot().is_empty());
}

#[tokio::test]
async fn test_builder_customization_is_retrievable() {
    let mut registry = HookRegistry::new();
    registry
        .register_with("route_tagger", |blank| {
            blank.call_fn(|ctx| {
                let key = ctx.method_key();
                ctx.output_metadata.insert("tag".to_string(), key);
                Ok(())
            })
        })
        .expect("register");

    let def = registry.lookup("route_tagger").expect("registered");
    assert_eq!(def.type_name(), "anonymous");
    let ctx = invoke(def).await;
    assert_eq!(tag_of(&ctx), Some("rpc.thing_service.get_thing"));
}

#[tokio::test]
async fn test_finished_registry_shared_across_tasks() {
    let mut registry = HookRegistry::new();
    registry.register_hook("tag", TagHook("shared")).expect("register");
    let registry = Arc::new(registry);

    let mut handles = Vec::new();
    for _ in 0..4 {
        let registry = Arc::clone(&registry);
        handles.push(tokio::spawn(async move {
            let def = registry.lookup("tag").expect("registered").clone();
            let ctx = invoke(&def).await;
            tag_of(&ctx).map(str::to_string)
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.expect("task"), Some("shared".to_string()));
    }
}
