#![allow(non_snake_case)]

use super::*;
use jnistub_core::{ClassDescriptor, StubResult};
use std::io::Write;
use std::path::PathBuf;
use test_case::test_case;

struct NullGenerator;

impl CodeGenerator for NullGenerator {
    fn name(&self) -> &str {
        "null"
    }

    fn output_path(&self, class: &ClassDescriptor) -> PathBuf {
        PathBuf::from(format!("{}.txt", class.name().mangled()))
    }

    fn generate(&self, _sink: &mut dyn Write, _class: &ClassDescriptor) -> StubResult<()> {
        Ok(())
    }
}

fn null_generator(_config: &GeneratorConfig) -> Box<dyn CodeGenerator> {
    Box::new(NullGenerator)
}

#[test_case("rust" ; "lower case")]
#[test_case("Rust" ; "capitalised")]
#[test_case("RUST" ; "upper case")]
#[test_case(" rust " ; "surrounding whitespace")]
fn Backend___from_str___is_case_insensitive(name: &str) {
    assert_eq!(name.parse::<Backend>().unwrap(), Backend::Rust);
}

#[test]
fn Backend___from_str_unknown___is_config_error() {
    let err = "cobol".parse::<Backend>().unwrap_err();

    assert!(matches!(err, StubError::Config(msg) if msg.contains("cobol")));
}

#[test]
fn Backend___display___round_trips_through_from_str() {
    for backend in Backend::ALL {
        assert_eq!(backend.to_string().parse::<Backend>().unwrap(), backend);
    }
}

#[test]
fn Backend___create___builds_named_generator() {
    let generator = Backend::Rust.create(&GeneratorConfig::default());

    assert_eq!(generator.name(), "rust");
}

#[test]
fn GeneratorRegistry___with_builtins___contains_every_backend() {
    let registry = GeneratorRegistry::with_builtins();

    for backend in Backend::ALL {
        assert!(registry.contains(backend.name()));
    }
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["rust"]);
}

#[test]
fn GeneratorRegistry___from_config___uses_configured_backend() {
    let registry = GeneratorRegistry::with_builtins();
    let config = GeneratorConfig {
        backend: "Rust".to_string(),
        ..GeneratorConfig::default()
    };

    let generator = registry.from_config(&config).unwrap();

    assert_eq!(generator.name(), "rust");
}

#[test]
fn GeneratorRegistry___unknown_name___lists_available_backends() {
    let registry = GeneratorRegistry::with_builtins();

    let err = registry
        .create("python", &GeneratorConfig::default())
        .err()
        .unwrap();

    match err {
        StubError::Config(msg) => {
            assert!(msg.contains("python"));
            assert!(msg.contains("rust"));
        }
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn GeneratorRegistry___register___adds_out_of_tree_backend() {
    let mut registry = GeneratorRegistry::with_builtins();

    registry.register("Null", null_generator);

    assert!(registry.contains("null"));
    let generator = registry.create("NULL", &GeneratorConfig::default()).unwrap();
    assert_eq!(generator.name(), "null");
}

#[test]
fn GeneratorRegistry___register_existing_name___replaces_constructor() {
    let mut registry = GeneratorRegistry::with_builtins();

    registry.register("rust", null_generator);

    let generator = registry.create("rust", &GeneratorConfig::default()).unwrap();
    assert_eq!(generator.name(), "null");
}

#[test]
fn GeneratorRegistry___new___is_empty() {
    let registry = GeneratorRegistry::new();

    assert_eq!(registry.names().count(), 0);
    assert!(registry.create("rust", &GeneratorConfig::default()).is_err());
}
