//! jnistub-rust - JNI bindings generator for the Rust `jni` crate
//!
//! This crate provides:
//! - [`RustGenerator`], a [`CodeGenerator`](jnistub_core::CodeGenerator)
//!   emitting a trait plus `extern "system"` functions per class
//! - [`Rustfmt`] for formatting the generated module
//! - [`types`] with the `jni` crate spelling of every JNI type

mod generator;
mod rustfmt;

pub mod types;

pub use generator::{IMPL_MOD_NAME, MODULE_FILE, RustGenerator};
pub use rustfmt::Rustfmt;
