//! Native method descriptors.

use crate::class::ClassName;
use crate::java_type::{self, JavaType};
use crate::jni_type::JniType;
use crate::mangle;
use std::sync::Arc;

/// A named parameter of type `T`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Param<T> {
    pub name: String,
    pub ty: T,
}

impl<T> Param<T> {
    pub fn new(name: impl Into<String>, ty: T) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// One native method, fully resolved.
///
/// Built once by [`ClassDescriptor::build`](crate::ClassDescriptor::build) and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    class: Arc<ClassName>,
    name: String,
    params: Vec<Param<JavaType>>,
    return_type: JavaType,
    is_static: bool,
    overloaded: bool,
    declaration_index: usize,
    symbol: String,
}

impl MethodDescriptor {
    pub(crate) fn new(
        class: Arc<ClassName>,
        name: String,
        params: Vec<Param<JavaType>>,
        return_type: JavaType,
        is_static: bool,
        overloaded: bool,
        declaration_index: usize,
    ) -> Self {
        let param_types: Vec<JavaType> = params.iter().map(|p| p.ty.clone()).collect();
        let symbol = mangle::function_symbol(class.qualified(), &name, overloaded, &param_types);
        Self {
            class,
            name,
            params,
            return_type,
            is_static,
            overloaded,
            declaration_index,
            symbol,
        }
    }

    /// The class declaring this method.
    pub fn class(&self) -> &ClassName {
        &self.class
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared Java parameters, without the JNI-added leading ones.
    pub fn original_params(&self) -> &[Param<JavaType>] {
        &self.params
    }

    /// The parameter list of the JNI function implementing this method.
    ///
    /// Always `env` first, then `clazz` for static methods or `this` for
    /// instance methods, then the declared parameters.
    pub fn native_params(&self) -> Vec<Param<JniType>> {
        let receiver = if self.is_static {
            Param::new("clazz", JniType::Class)
        } else {
            Param::new("this", JniType::Object)
        };
        [Param::new("env", JniType::JniEnv), receiver]
            .into_iter()
            .chain(
                self.params
                    .iter()
                    .map(|p| Param::new(p.name.clone(), p.ty.jni_type())),
            )
            .collect()
    }

    /// The return type; `void` methods still return [`JavaType::VOID`].
    pub fn return_type(&self) -> &JavaType {
        &self.return_type
    }

    pub fn return_jni_type(&self) -> JniType {
        self.return_type.jni_type()
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Whether another native method of the class shares this name.
    pub fn is_overloaded(&self) -> bool {
        self.overloaded
    }

    /// Position among the class's declared methods.
    pub fn declaration_index(&self) -> usize {
        self.declaration_index
    }

    /// The exported symbol name the JVM looks this method up by.
    pub fn jni_symbol(&self) -> &str {
        &self.symbol
    }

    /// The JVM method descriptor, e.g. `(Ljava/lang/String;I)V`.
    pub fn descriptor(&self) -> String {
        java_type::method_descriptor(self.params.iter().map(|p| &p.ty), &self.return_type)
    }
}
