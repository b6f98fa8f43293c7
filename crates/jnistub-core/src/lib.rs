//! jnistub-core - Type model, symbol mangling and IR for JNI stub generation
//!
//! This crate provides everything a backend needs to emit native-method
//! bindings:
//! - [`JavaType`] and [`JniType`] for classifying Java types
//! - [`mangle`](mod@mangle) for deriving JNI symbol names
//! - [`ClassDescriptor`] and [`MethodDescriptor`], the resolved view of a
//!   class's native methods
//! - [`CodeGenerator`], the contract backends implement
//!
//! # Pipeline
//!
//! ```text
//! ClassSource ──load──▶ RawClass ──ClassDescriptor::build──▶ ClassDescriptor
//!                                                              │
//!                                      CodeGenerator::generate ▼
//!                                                          source text
//! ```

mod class;
mod config;
mod error;
mod generator;
mod java_type;
mod jni_type;
mod method;
mod source;

pub mod mangle;
pub mod naming;

pub use class::{ClassDescriptor, ClassName};
pub use config::GeneratorConfig;
pub use error::{StubError, StubResult, ToolInvocationWarning};
pub use generator::{CodeGenerator, EmittedFile, write_class};
pub use java_type::{
    CLASS_CLASS, JavaType, Primitive, STRING_CLASS, TypeNameError, method_descriptor,
};
pub use jni_type::JniType;
pub use mangle::{function_symbol, mangle, overload_signature, unmangle};
pub use method::{MethodDescriptor, Param};
pub use source::{ClassSource, ManifestClassSource, RawClass, RawMethod, RawParam};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ClassDescriptor, ClassSource, CodeGenerator, GeneratorConfig, JavaType, JniType,
        MethodDescriptor, Param, StubError, StubResult,
    };
}
