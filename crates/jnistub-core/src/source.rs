//! Class sources: where raw class declarations come from.
//!
//! A [`ClassSource`] plays the part of runtime reflection. It hands out
//! [`RawClass`] values whose types are still unresolved strings in Java
//! source notation; [`ClassDescriptor::build`](crate::ClassDescriptor::build)
//! resolves them.
//!
//! # Manifest format
//!
//! ```toml
//! [[classes]]
//! name = "com.example.Foo"
//!
//! [[classes.methods]]
//! name = "doNothing"
//! static = true
//! params = [{ name = "name", type = "java.lang.String" }, { name = "x", type = "int" }]
//!
//! [[classes.methods]]
//! name = "getInt"
//! returns = "int"
//! ```

use crate::error::{StubError, StubResult};
use crate::naming;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One declared parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawParam {
    /// Parameter name; empty when the source does not record names.
    #[serde(default)]
    pub name: String,

    /// Type in Java source notation.
    #[serde(rename = "type")]
    pub ty: String,
}

/// One declared method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMethod {
    pub name: String,

    #[serde(default)]
    pub params: Vec<RawParam>,

    /// Return type in Java source notation.
    #[serde(default = "default_return_type")]
    pub returns: String,

    #[serde(default, rename = "static")]
    pub is_static: bool,

    /// Only native methods get a stub.
    #[serde(default = "default_native")]
    pub native: bool,
}

fn default_return_type() -> String {
    "void".to_string()
}

fn default_native() -> bool {
    true
}

impl RawMethod {
    /// A native instance method with no parameters.
    pub fn new(name: impl Into<String>, returns: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            returns: returns.into(),
            is_static: false,
            native: true,
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.params.push(RawParam {
            name: name.into(),
            ty: ty.into(),
        });
        self
    }

    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn not_native(mut self) -> Self {
        self.native = false;
        self
    }
}

/// A class declaration as supplied by a [`ClassSource`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawClass {
    /// Binary name, e.g. `com.example.Foo` or `com.example.Outer$Inner`.
    pub name: String,

    /// Declared methods in declaration order.
    #[serde(default)]
    pub methods: Vec<RawMethod>,
}

impl RawClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    pub fn with_method(mut self, method: RawMethod) -> Self {
        self.methods.push(method);
        self
    }

    pub fn simple_name(&self) -> &str {
        naming::simple_name(&self.name)
    }
}

/// Supplies class declarations by qualified name.
///
/// Implementations must return methods in a stable order.
pub trait ClassSource {
    fn load(&self, qualified_name: &str) -> StubResult<RawClass>;
}

/// A [`ClassSource`] backed by a TOML or JSON manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestClassSource {
    #[serde(default)]
    classes: Vec<RawClass>,
}

impl ManifestClassSource {
    /// Build a source from classes already in memory.
    pub fn new(classes: Vec<RawClass>) -> StubResult<Self> {
        let source = Self { classes };
        source.validate()?;
        Ok(source)
    }

    /// Parse a TOML manifest.
    pub fn from_toml_str(content: &str) -> StubResult<Self> {
        let source: Self = toml::from_str(content)?;
        source.validate()?;
        Ok(source)
    }

    /// Parse a JSON manifest.
    pub fn from_json(bytes: &[u8]) -> StubResult<Self> {
        let source: Self = serde_json::from_slice(bytes)?;
        source.validate()?;
        Ok(source)
    }

    /// Load a manifest, choosing the format from the file extension
    /// (`.json` is JSON, anything else TOML).
    pub fn from_file(path: impl AsRef<Path>) -> StubResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read(path)
            .map_err(|e| StubError::io(format!("reading {}", path.display()), e))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json(&content)
        } else {
            let text = String::from_utf8(content).map_err(|e| {
                StubError::Config(format!("{} is not valid UTF-8: {e}", path.display()))
            })?;
            Self::from_toml_str(&text)
        }
    }

    /// Qualified names of all declared classes, in manifest order.
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|c| c.name.as_str())
    }

    fn validate(&self) -> StubResult<()> {
        for (i, class) in self.classes.iter().enumerate() {
            if class.name.trim().is_empty() {
                return Err(StubError::Config(format!("class #{i} has an empty name")));
            }
            if self.classes[..i].iter().any(|c| c.name == class.name) {
                return Err(StubError::Config(format!(
                    "class {} is declared more than once",
                    class.name
                )));
            }
        }
        Ok(())
    }
}

impl ClassSource for ManifestClassSource {
    fn load(&self, qualified_name: &str) -> StubResult<RawClass> {
        self.classes
            .iter()
            .find(|c| c.name == qualified_name)
            .cloned()
            .ok_or_else(|| StubError::ClassNotFound(qualified_name.to_string()))
    }
}
