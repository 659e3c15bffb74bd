#![allow(dead_code)]

use std::sync::Once;

use typedesc::{ArrayClassRegistry, ClassHierarchy, RegistryConfig};

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn registry() -> ArrayClassRegistry {
    init_tracing();

    ArrayClassRegistry::new()
}

pub fn lazy_registry() -> ArrayClassRegistry {
    init_tracing();

    ArrayClassRegistry::with_config(&RegistryConfig::new().with_preload_primitive_arrays(false))
}

/// `Dog <: Animal`, `Cat <: Animal`, `Animal <: Named`, plus `java.lang.String`.
pub fn animals() -> ClassHierarchy {
    ClassHierarchy::new()
        .with("Animal", &["java.lang.Object", "Named"])
        .with("Dog", &["Animal"])
        .with("Cat", &["Animal"])
        .with("Named", &[])
        .with("java.lang.String", &["java.lang.Object", "java.io.Serializable"])
}
