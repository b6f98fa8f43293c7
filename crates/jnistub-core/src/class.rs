//! Class descriptors: the backend-agnostic view of a class's native surface.

use crate::error::{StubError, StubResult};
use crate::java_type::{self, JavaType};
use crate::mangle;
use crate::method::{MethodDescriptor, Param};
use crate::naming;
use crate::source::{RawClass, RawMethod};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Qualified and simple name of a class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassName {
    qualified: String,
    simple: String,
}

impl ClassName {
    pub fn new(qualified: impl Into<String>) -> Self {
        let qualified = qualified.into();
        let simple = naming::simple_name(&qualified).to_string();
        Self { qualified, simple }
    }

    /// Binary name, e.g. `com.example.Foo`.
    pub fn qualified(&self) -> &str {
        &self.qualified
    }

    /// Name without package or enclosing class, e.g. `Foo`.
    pub fn simple(&self) -> &str {
        &self.simple
    }

    /// The qualified name with `.` replaced by `delim`.
    pub fn delimited_with(&self, delim: &str) -> String {
        self.qualified.replace('.', delim)
    }

    /// The qualified name mangled the way it appears in JNI symbols.
    pub fn mangled(&self) -> String {
        mangle::mangle(&self.qualified)
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified)
    }
}

/// The native methods of one class, resolved and sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    name: Arc<ClassName>,
    methods: Vec<MethodDescriptor>,
}

impl ClassDescriptor {
    /// Resolve a raw class into a descriptor.
    ///
    /// Non-native methods are dropped. The rest are sorted by name, ties kept
    /// in declaration order. Every type is resolved here; any failure aborts
    /// the whole class.
    pub fn build(raw: &RawClass) -> StubResult<Self> {
        let name = Arc::new(resolve_class_name(raw)?);

        let mut natives: Vec<(usize, &RawMethod)> = raw
            .methods
            .iter()
            .enumerate()
            .filter(|(_, m)| m.native)
            .collect();
        natives.sort_by(|(_, a), (_, b)| a.name.cmp(&b.name));

        let mut name_counts: HashMap<&str, usize> = HashMap::new();
        for (_, method) in &natives {
            *name_counts.entry(method.name.as_str()).or_default() += 1;
        }

        let methods = natives
            .iter()
            .map(|(index, method)| {
                let overloaded = name_counts.get(method.name.as_str()).copied().unwrap_or(0) > 1;
                resolve_method(&name, method, *index, overloaded)
            })
            .collect::<StubResult<Vec<_>>>()?;

        tracing::debug!(
            class = %name,
            native_methods = methods.len(),
            "built class descriptor"
        );

        Ok(Self { name, methods })
    }

    pub fn name(&self) -> &ClassName {
        &self.name
    }

    pub fn qualified_name(&self) -> &str {
        self.name.qualified()
    }

    pub fn simple_name(&self) -> &str {
        self.name.simple()
    }

    /// Native methods sorted by name.
    pub fn methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }
}

fn resolve_class_name(raw: &RawClass) -> StubResult<ClassName> {
    match JavaType::parse(&raw.name) {
        Ok(JavaType::Object(qualified)) if qualified == raw.name => Ok(ClassName::new(qualified)),
        Ok(_) => Err(StubError::Resolution {
            class: raw.name.clone(),
            method: None,
            reason: "not a class name".to_string(),
        }),
        Err(err) => Err(StubError::Resolution {
            class: raw.name.clone(),
            method: None,
            reason: err.to_string(),
        }),
    }
}

fn resolve_method(
    class: &Arc<ClassName>,
    method: &RawMethod,
    declaration_index: usize,
    overloaded: bool,
) -> StubResult<MethodDescriptor> {
    let resolution_error = |reason: String| StubError::Resolution {
        class: class.qualified().to_string(),
        method: Some(method.name.clone()),
        reason,
    };

    if !java_type::is_identifier(&method.name) {
        return Err(resolution_error(format!(
            "invalid method name `{}`",
            method.name
        )));
    }

    let params = method
        .params
        .iter()
        .enumerate()
        .map(|(i, p)| {
            // Sources without recorded parameter names get javac's placeholders.
            let name = if p.name.is_empty() {
                format!("arg{i}")
            } else if java_type::is_identifier(&p.name) {
                p.name.clone()
            } else {
                return Err(resolution_error(format!("invalid parameter name `{}`", p.name)));
            };
            let ty = JavaType::parse(&p.ty).map_err(|e| resolution_error(e.to_string()))?;
            Ok(Param::new(name, ty))
        })
        .collect::<StubResult<Vec<_>>>()?;

    let return_type =
        JavaType::parse(&method.returns).map_err(|e| resolution_error(e.to_string()))?;

    Ok(MethodDescriptor::new(
        Arc::clone(class),
        method.name.clone(),
        params,
        return_type,
        method.is_static,
        overloaded,
        declaration_index,
    ))
}

#[cfg(test)]
#[path = "class/class_tests.rs"]
mod class_tests;
