//! Backend lookup by name

use jnistub_core::{CodeGenerator, GeneratorConfig, StubError, StubResult};
use jnistub_rust::RustGenerator;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Constructor building a generator from configuration.
pub type GeneratorCtor = fn(&GeneratorConfig) -> Box<dyn CodeGenerator>;

/// Backends shipped with jnistub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Bindings for the Rust `jni` crate
    Rust,
}

impl Backend {
    pub const ALL: [Backend; 1] = [Backend::Rust];

    pub fn name(self) -> &'static str {
        match self {
            Backend::Rust => "rust",
        }
    }

    pub fn create(self, config: &GeneratorConfig) -> Box<dyn CodeGenerator> {
        match self {
            Backend::Rust => Box::new(RustGenerator::from_config(config)),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = StubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Backend::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StubError::Config(format!("unknown backend: {s}")))
    }
}

/// Maps backend names to constructors.
///
/// Names are matched case-insensitively. Out-of-tree backends are added
/// with [`register`](GeneratorRegistry::register).
#[derive(Debug, Clone, Default)]
pub struct GeneratorRegistry {
    ctors: BTreeMap<String, GeneratorCtor>,
}

impl GeneratorRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every [`Backend`].
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Backend::Rust.name(), rust_generator);
        registry
    }

    /// Add or replace the constructor for `name`.
    pub fn register(&mut self, name: &str, ctor: GeneratorCtor) -> &mut Self {
        let key = name.trim().to_ascii_lowercase();
        if self.ctors.insert(key, ctor).is_some() {
            tracing::debug!(backend = name, "replaced registered backend");
        }
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ctors.contains_key(&name.trim().to_ascii_lowercase())
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ctors.keys().map(String::as_str)
    }

    /// Build the generator registered under `name`.
    pub fn create(
        &self,
        name: &str,
        config: &GeneratorConfig,
    ) -> StubResult<Box<dyn CodeGenerator>> {
        let ctor = self
            .ctors
            .get(&name.trim().to_ascii_lowercase())
            .ok_or_else(|| {
                StubError::Config(format!(
                    "unknown backend: {name} (available: {})",
                    self.names().collect::<Vec<_>>().join(", ")
                ))
            })?;
        Ok(ctor(config))
    }

    /// Build the generator named by `config.backend`.
    pub fn from_config(&self, config: &GeneratorConfig) -> StubResult<Box<dyn CodeGenerator>> {
        self.create(&config.backend, config)
    }
}

fn rust_generator(config: &GeneratorConfig) -> Box<dyn CodeGenerator> {
    Backend::Rust.create(config)
}

#[cfg(test)]
#[path = "registry/registry_tests.rs"]
mod registry_tests;
