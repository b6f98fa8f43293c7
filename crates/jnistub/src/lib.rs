//! # jnistub
//!
//! Generates native-method stubs for Java classes following the JNI naming
//! convention, in the spirit of `javah`.
//!
//! For every class the generator derives the exported symbol of each
//! `native` method (`Java_<class>_<method>`, plus the mangled argument
//! signature for overloads) and writes a source file a native library
//! author fills in.
//!
//! ## Quick Start
//!
//! ```no_run
//! use jnistub::prelude::*;
//! use std::path::Path;
//!
//! let source = ManifestClassSource::from_file(Path::new("classes.toml"))?;
//! let config = GeneratorConfig::default();
//! let generator = GeneratorRegistry::with_builtins().from_config(&config)?;
//!
//! let report = generate_classes(
//!     &source,
//!     source.class_names(),
//!     generator.as_ref(),
//!     Path::new("src/jni"),
//! );
//! for (class, error) in &report.failed {
//!     eprintln!("{class}: {error}");
//! }
//! # Ok::<(), StubError>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`jnistub_core`] - Type model, mangling, class IR and the generator contract
//! - [`jnistub_rust`] - Backend for the Rust `jni` crate

mod driver;
mod logging;
mod registry;

pub use driver::{GenerationReport, generate_class, generate_classes};
pub use logging::init_logging;
pub use registry::{Backend, GeneratorCtor, GeneratorRegistry};

// Re-export core types
pub use jnistub_core::{
    CLASS_CLASS, ClassDescriptor, ClassName, ClassSource, CodeGenerator, EmittedFile,
    GeneratorConfig, JavaType, JniType, ManifestClassSource, MethodDescriptor, Param, Primitive,
    RawClass, RawMethod, RawParam, STRING_CLASS, StubError, StubResult, ToolInvocationWarning,
    TypeNameError, mangle, method_descriptor, naming, write_class,
};

// Re-export backends
pub use jnistub_rust::{RustGenerator, Rustfmt};

/// Prelude module for convenient imports.
///
/// Use `use jnistub::prelude::*;` to bring the driver, the registry and the
/// core contract into scope.
pub mod prelude {
    pub use crate::{
        Backend, ClassSource, CodeGenerator, GenerationReport, GeneratorConfig,
        GeneratorRegistry, ManifestClassSource, RawClass, RawMethod, StubError, StubResult,
        generate_classes,
    };
}
