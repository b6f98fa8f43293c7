//! Java type model and its mapping onto JNI types.
//!
//! # Classification
//!
//! | Java | [`JavaType`] | [`JniType`] |
//! |------|--------------|-------------|
//! | `int` | `Primitive(Int)` | `Int` |
//! | `int[]` | `Array(Primitive(Int))` | `IntArray` |
//! | `int[][]` | `Array(Array(..))` | `ObjectArray` |
//! | `java.lang.String` | `Object("java.lang.String")` | `String` |
//! | `java.lang.Class` | `Object("java.lang.Class")` | `Class` |
//! | `java.lang.String[]` | `Array(Object(..))` | `ObjectArray` |
//! | anything else | `Object(name)` | `Object` |
//!
//! Reference specialisation is an exact name match: a subclass of `String`
//! or `Class` (were one possible) would map to plain `Object`.

use crate::jni_type::JniType;
use std::fmt;
use thiserror::Error;

/// Qualified name that maps to [`JniType::String`].
pub const STRING_CLASS: &str = "java.lang.String";

/// Qualified name that maps to [`JniType::Class`].
pub const CLASS_CLASS: &str = "java.lang.Class";

/// A source type name or descriptor that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid type `{name}`: {reason}")]
pub struct TypeNameError {
    pub name: String,
    pub reason: &'static str,
}

impl TypeNameError {
    fn new(name: &str, reason: &'static str) -> Self {
        Self {
            name: name.to_string(),
            reason,
        }
    }
}

/// Java primitive types, including `void`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Void,
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl Primitive {
    const ALL: [Primitive; 9] = [
        Primitive::Void,
        Primitive::Boolean,
        Primitive::Byte,
        Primitive::Char,
        Primitive::Short,
        Primitive::Int,
        Primitive::Long,
        Primitive::Float,
        Primitive::Double,
    ];

    /// The Java keyword for this type.
    pub fn keyword(self) -> &'static str {
        match self {
            Primitive::Void => "void",
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Char => "char",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == keyword)
    }

    /// The single-letter field descriptor.
    pub fn descriptor(self) -> char {
        match self {
            Primitive::Void => 'V',
            Primitive::Boolean => 'Z',
            Primitive::Byte => 'B',
            Primitive::Char => 'C',
            Primitive::Short => 'S',
            Primitive::Int => 'I',
            Primitive::Long => 'J',
            Primitive::Float => 'F',
            Primitive::Double => 'D',
        }
    }

    pub fn from_descriptor(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.descriptor() == c)
    }

    pub fn jni_type(self) -> JniType {
        match self {
            Primitive::Void => JniType::Void,
            Primitive::Boolean => JniType::Boolean,
            Primitive::Byte => JniType::Byte,
            Primitive::Char => JniType::Char,
            Primitive::Short => JniType::Short,
            Primitive::Int => JniType::Int,
            Primitive::Long => JniType::Long,
            Primitive::Float => JniType::Float,
            Primitive::Double => JniType::Double,
        }
    }

    /// The JNI array type holding elements of this type, if one exists.
    fn array_jni_type(self) -> Option<JniType> {
        match self {
            Primitive::Void => None,
            Primitive::Boolean => Some(JniType::BooleanArray),
            Primitive::Byte => Some(JniType::ByteArray),
            Primitive::Char => Some(JniType::CharArray),
            Primitive::Short => Some(JniType::ShortArray),
            Primitive::Int => Some(JniType::IntArray),
            Primitive::Long => Some(JniType::LongArray),
            Primitive::Float => Some(JniType::FloatArray),
            Primitive::Double => Some(JniType::DoubleArray),
        }
    }
}

/// A Java value type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JavaType {
    Primitive(Primitive),
    Array(Box<JavaType>),
    /// A reference type, by its binary name (`java.lang.String`, `a.Outer$Inner`).
    Object(String),
}

impl JavaType {
    pub const VOID: JavaType = JavaType::Primitive(Primitive::Void);

    pub fn object(name: impl Into<String>) -> Self {
        JavaType::Object(name.into())
    }

    pub fn array_of(element: JavaType) -> Self {
        JavaType::Array(Box::new(element))
    }

    pub fn is_void(&self) -> bool {
        matches!(self, JavaType::Primitive(Primitive::Void))
    }

    /// Resolve a type written in Java source notation.
    ///
    /// Accepts primitive keywords, qualified (or default-package) class names
    /// and any number of trailing `[]`. Type arguments are erased, so
    /// `java.lang.Class<?>` resolves to `java.lang.Class`.
    pub fn parse(source: &str) -> Result<Self, TypeNameError> {
        let mut base = source.trim();
        let mut dims = 0usize;
        while let Some(rest) = base.strip_suffix("[]") {
            base = rest.trim_end();
            dims += 1;
        }
        if base.is_empty() {
            return Err(TypeNameError::new(source, "missing type name"));
        }
        if base.contains(['[', ']']) {
            return Err(TypeNameError::new(source, "unbalanced array brackets"));
        }

        let mut ty = match Primitive::from_keyword(base) {
            Some(Primitive::Void) if dims > 0 => {
                return Err(TypeNameError::new(source, "void cannot be an array element"));
            }
            Some(primitive) => JavaType::Primitive(primitive),
            None => JavaType::Object(erase_type_arguments(source, base)?.to_string()),
        };
        for _ in 0..dims {
            ty = JavaType::array_of(ty);
        }
        Ok(ty)
    }

    /// Parse a concatenated list of field descriptors, such as the parameter
    /// part of a method descriptor (`I[Ljava/lang/String;`).
    pub fn parse_descriptors(descriptors: &str) -> Result<Vec<Self>, TypeNameError> {
        let mut types = Vec::new();
        let mut rest = descriptors;
        while !rest.is_empty() {
            let (ty, tail) = parse_one_descriptor(descriptors, rest)?;
            types.push(ty);
            rest = tail;
        }
        Ok(types)
    }

    /// Map onto the JNI type vocabulary.
    ///
    /// Arrays only look one level down: an array of arrays or of references
    /// becomes [`JniType::ObjectArray`] whatever the element type.
    pub fn jni_type(&self) -> JniType {
        match self {
            JavaType::Primitive(p) => p.jni_type(),
            JavaType::Array(element) => match element.as_ref() {
                JavaType::Primitive(p) => p.array_jni_type().unwrap_or(JniType::ObjectArray),
                _ => JniType::ObjectArray,
            },
            JavaType::Object(name) if name == STRING_CLASS => JniType::String,
            JavaType::Object(name) if name == CLASS_CLASS => JniType::Class,
            JavaType::Object(_) => JniType::Object,
        }
    }

    /// The JNI field descriptor (`I`, `[I`, `Ljava/lang/String;`).
    pub fn descriptor(&self) -> String {
        let mut out = String::new();
        self.write_descriptor(&mut out);
        out
    }

    fn write_descriptor(&self, out: &mut String) {
        match self {
            JavaType::Primitive(p) => out.push(p.descriptor()),
            JavaType::Array(element) => {
                out.push('[');
                element.write_descriptor(out);
            }
            JavaType::Object(name) => {
                out.push('L');
                out.push_str(&name.replace('.', "/"));
                out.push(';');
            }
        }
    }
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JavaType::Primitive(p) => f.write_str(p.keyword()),
            JavaType::Array(element) => write!(f, "{element}[]"),
            JavaType::Object(name) => f.write_str(name),
        }
    }
}

/// Render `(<params>)<ret>` for a method.
pub fn method_descriptor<'a>(
    params: impl IntoIterator<Item = &'a JavaType>,
    ret: &JavaType,
) -> String {
    let mut out = String::from("(");
    for param in params {
        param.write_descriptor(&mut out);
    }
    out.push(')');
    ret.write_descriptor(&mut out);
    out
}

fn erase_type_arguments<'a>(source: &str, name: &'a str) -> Result<&'a str, TypeNameError> {
    let name = match name.find('<') {
        Some(open) if name.ends_with('>') => name[..open].trim_end(),
        Some(_) => return Err(TypeNameError::new(source, "unterminated type arguments")),
        None => name,
    };
    if name.split('.').all(is_identifier) {
        Ok(name)
    } else {
        Err(TypeNameError::new(source, "not a valid qualified class name"))
    }
}

pub(crate) fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

fn parse_one_descriptor<'a>(
    whole: &str,
    input: &'a str,
) -> Result<(JavaType, &'a str), TypeNameError> {
    let mut chars = input.chars();
    let Some(first) = chars.next() else {
        return Err(TypeNameError::new(whole, "truncated descriptor"));
    };
    let rest = chars.as_str();
    match first {
        '[' => {
            let (element, tail) = parse_one_descriptor(whole, rest)?;
            if element.is_void() {
                return Err(TypeNameError::new(whole, "void cannot be an array element"));
            }
            Ok((JavaType::array_of(element), tail))
        }
        'L' => {
            let end = rest
                .find(';')
                .ok_or_else(|| TypeNameError::new(whole, "unterminated class descriptor"))?;
            let name = rest[..end].replace('/', ".");
            if !name.split('.').all(is_identifier) {
                return Err(TypeNameError::new(whole, "not a valid qualified class name"));
            }
            Ok((JavaType::Object(name), &rest[end + 1..]))
        }
        c => Primitive::from_descriptor(c)
            .map(|p| (JavaType::Primitive(p), rest))
            .ok_or_else(|| TypeNameError::new(whole, "unknown descriptor character")),
    }
}
