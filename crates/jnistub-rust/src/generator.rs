//! Generator for the Rust [`jni`](https://github.com/jni-rs/jni-rs) crate.
//!
//! Given the Java class `com.example.Foo`, this generator writes the module
//! `com_example_Foo/mod.rs` containing the trait `JniFoo` and one exported
//! function per native method, named after the JNI convention. The
//! implementor adds a submodule (`imp` by default) next to it providing
//! `JniFooImpl`:
//!
//! ```ignore
//! pub struct JniFooImpl;
//!
//! impl<'a> super::JniFoo<'a> for JniFooImpl {
//!     type Error = jni::objects::JThrowable<'a>;
//!
//!     fn get_int(env: &mut JNIEnv<'a>, this: JObject<'a>) -> Result<jint, Self::Error> {
//!         Ok(42)
//!     }
//! }
//! ```
//!
//! When the implementation returns `Err`, the exported function throws it as
//! a Java exception and returns a zero/null placeholder. Failing to throw
//! panics, which aborts the process at the `extern "system"` boundary.

use crate::rustfmt::Rustfmt;
use crate::types::{
    default_value, fn_return_sign, raw_ident, rust_ident, rust_jni_param_type, rust_jni_type,
};
use jnistub_core::mangle::split_overload_suffix;
use jnistub_core::naming::to_snake_case;
use jnistub_core::{
    ClassDescriptor, CodeGenerator, GeneratorConfig, JniType, MethodDescriptor, Param, StubError,
    StubResult, ToolInvocationWarning,
};
use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Name of the file generated for each class.
pub const MODULE_FILE: &str = "mod.rs";

/// Default name of the hand-written implementation submodule.
pub const IMPL_MOD_NAME: &str = "imp";

const HEADER: &str = "// THIS FILE IS GENERATED AUTOMATICALLY. DO NOT EDIT!\n";

const WRAP_ERROR_MACRO: &str = r#"macro_rules! wrap_error {
    ($env:expr, $body:expr, $default:expr) => {
        match $body {
            Ok(v) => v,
            Err(e) => {
                if let Err(err) = $env.throw(e) {
                    $env.exception_describe().ok();
                    panic!("error in throwing exception: {}", err);
                }
                $default
            }
        }
    };
}
"#;

/// [`CodeGenerator`] producing bindings for the Rust `jni` crate.
#[derive(Debug, Clone)]
pub struct RustGenerator {
    impl_module: String,
    formatter: Option<Rustfmt>,
}

impl RustGenerator {
    /// Generator with the `imp` implementation module and `rustfmt` enabled.
    pub fn new() -> Self {
        Self {
            impl_module: IMPL_MOD_NAME.to_string(),
            formatter: Some(Rustfmt::default()),
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            impl_module: config.impl_module.clone(),
            formatter: config
                .apply_formatter
                .then(|| Rustfmt::new(config.formatter.clone())),
        }
    }

    /// Skip formatting generated files.
    pub fn without_formatter(mut self) -> Self {
        self.formatter = None;
        self
    }

    pub fn formatter(&self) -> Option<&Rustfmt> {
        self.formatter.as_ref()
    }

    /// Render the module for `class` as a string.
    pub fn render(&self, class: &ClassDescriptor) -> StubResult<String> {
        check_supported(class)?;
        let impl_module = raw_ident(&self.impl_module).ok_or_else(|| {
            StubError::Config(format!(
                "impl_module `{}` is a reserved Rust keyword",
                self.impl_module
            ))
        })?;

        let trait_name = format!("Jni{}", class.simple_name());
        let impl_type = format!("{trait_name}Impl");
        let mut code = String::new();

        code.push_str(HEADER);
        code.push_str("#![allow(non_snake_case)]\n\n");
        code.push_str(&format!("mod {impl_module};\n\n"));
        code.push_str("use jni::descriptors::Desc;\n");
        code.push_str("use jni::objects::*;\n");
        code.push_str("use jni::sys::*;\n");
        code.push_str("use jni::JNIEnv;\n");
        code.push_str(&format!("use self::{impl_module}::{impl_type};\n\n"));
        code.push_str(WRAP_ERROR_MACRO);
        code.push('\n');

        code.push_str(&format!("trait {trait_name}<'a> {{\n"));
        code.push_str("    type Error: Desc<'a, JThrowable<'a>>;\n");
        for method in class.methods() {
            code.push_str(&format!(
                "    fn {}({}) -> Result<{}, Self::Error>;\n",
                impl_fn_name(method),
                rust_params(&native_params(method), true),
                rust_jni_type(method.return_jni_type()),
            ));
        }
        code.push_str("}\n\n");

        for method in class.methods() {
            let params = native_params(method);
            let ret = method.return_jni_type();
            let default = default_value(ret).ok_or_else(|| {
                unsupported(class, Some(method), "return type has no default value")
            })?;
            let args = params
                .iter()
                .skip(1)
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");

            code.push_str("#[unsafe(no_mangle)]\n");
            code.push_str(&format!(
                "extern \"system\" fn {}(mut {}){} {{\n",
                method.jni_symbol(),
                rust_params(&params, false),
                fn_return_sign(ret),
            ));
            code.push_str(&format!(
                "    wrap_error!(env, {impl_type}::{}(&mut env, {args}), {default})\n",
                impl_fn_name(method),
            ));
            code.push_str("}\n\n");
        }

        Ok(code)
    }
}

impl Default for RustGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for RustGenerator {
    fn name(&self) -> &str {
        "rust"
    }

    fn output_path(&self, class: &ClassDescriptor) -> PathBuf {
        PathBuf::from(class.name().mangled()).join(MODULE_FILE)
    }

    fn generate(&self, sink: &mut dyn Write, class: &ClassDescriptor) -> StubResult<()> {
        let code = self.render(class)?;
        sink.write_all(code.as_bytes()).map_err(|e| {
            StubError::io(format!("writing bindings for {}", class.qualified_name()), e)
        })
    }

    fn post_process(&self, path: &Path) -> Option<ToolInvocationWarning> {
        self.formatter.as_ref()?.format(path).err()
    }
}

/// Name of the trait method backing `method`.
///
/// Overloads share a Java name, so each one gets its mangled signature
/// appended. The signature keeps its case: class names differing only in
/// case are distinct overloads.
fn impl_fn_name(method: &MethodDescriptor) -> String {
    match split_overload_suffix(method.jni_symbol()) {
        Some(signature) if method.is_overloaded() => format!(
            "{}__{signature}",
            to_snake_case(method.name()).replace('$', "_"),
        ),
        _ => rust_ident(method.name()),
    }
}

/// The JNI parameter list with names made valid and unique in Rust.
///
/// A declared name clashing with `env`, the receiver or an earlier
/// parameter after case conversion gets the first free numeric suffix.
fn native_params(method: &MethodDescriptor) -> Vec<Param<JniType>> {
    let mut used = HashSet::new();
    method
        .native_params()
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            if i < 2 {
                used.insert(p.name.clone());
                return p;
            }
            let mut name = rust_ident(&p.name);
            let mut suffix = 0;
            while used.contains(&name) {
                suffix += 1;
                name = rust_ident(&format!("{}_{suffix}", p.name));
            }
            used.insert(name.clone());
            Param::new(name, p.ty)
        })
        .collect()
}

fn rust_params(params: &[Param<JniType>], in_trait: bool) -> String {
    params
        .iter()
        .map(|p| format!("{}: {}", p.name, rust_jni_param_type(p.ty, in_trait)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reject declarations with no valid Rust rendering.
///
/// `$` survives mangling and cannot appear in a Rust identifier or module
/// name. `void` is only meaningful as a return type.
fn check_supported(class: &ClassDescriptor) -> StubResult<()> {
    if class.qualified_name().contains('$') {
        return Err(unsupported(class, None, "`$` in class name"));
    }

    let mut fn_names = HashSet::new();
    for method in class.methods() {
        // Overload signatures carry parameter class names, so check the whole symbol.
        if method.jni_symbol().contains('$') {
            return Err(unsupported(class, Some(method), "`$` in exported symbol"));
        }
        if let Some(param) = method.original_params().iter().find(|p| p.ty.is_void()) {
            return Err(unsupported(
                class,
                Some(method),
                &format!("parameter `{}` has type void", param.name),
            ));
        }
        let fn_name = impl_fn_name(method);
        if !fn_names.insert(fn_name.clone()) {
            return Err(unsupported(
                class,
                Some(method),
                &format!("trait method `{fn_name}` would be declared twice"),
            ));
        }
    }
    Ok(())
}

fn unsupported(
    class: &ClassDescriptor,
    method: Option<&MethodDescriptor>,
    detail: &str,
) -> StubError {
    StubError::UnsupportedType {
        class: class.qualified_name().to_string(),
        method: method.map(|m| m.name().to_string()),
        detail: detail.to_string(),
    }
}
