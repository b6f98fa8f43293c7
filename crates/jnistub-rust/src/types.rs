//! Rust `jni` crate spellings of JNI types.
//!
//! The `jni` crate has two forms for most reference types: a raw `sys`
//! alias (`jobject`, `jstring`) and a lifetime-carrying wrapper (`JObject`,
//! `JString`). Parameters of the receiver, string and plain object kinds use
//! the wrapper; everything else, including every return type, uses the raw
//! form.

use jnistub_core::JniType;
use jnistub_core::naming::to_snake_case;

/// Type used for a parameter of type `ty`.
///
/// Inside the generated trait (`in_trait`) the environment is borrowed and
/// wrappers carry the trait's `'a` lifetime; the exported function takes
/// them by value with elided lifetimes.
pub fn rust_jni_param_type(ty: JniType, in_trait: bool) -> String {
    let wrapper = match ty {
        JniType::Class => "JClass",
        JniType::String => "JString",
        JniType::Object => "JObject",
        JniType::JniEnv if in_trait => "&mut JNIEnv",
        JniType::JniEnv => "JNIEnv",
        _ => return rust_jni_type(ty).to_string(),
    };
    if in_trait {
        format!("{wrapper}<'a>")
    } else {
        wrapper.to_string()
    }
}

/// The raw `jni::sys` type (or `()` for void).
pub fn rust_jni_type(ty: JniType) -> &'static str {
    match ty {
        JniType::JniEnv => "JNIEnv",
        JniType::Void => "()",
        JniType::Boolean => "jboolean",
        JniType::Byte => "jbyte",
        JniType::Char => "jchar",
        JniType::Short => "jshort",
        JniType::Int => "jint",
        JniType::Long => "jlong",
        JniType::Float => "jfloat",
        JniType::Double => "jdouble",
        JniType::BooleanArray => "jbooleanArray",
        JniType::ByteArray => "jbyteArray",
        JniType::CharArray => "jcharArray",
        JniType::ShortArray => "jshortArray",
        JniType::IntArray => "jintArray",
        JniType::LongArray => "jlongArray",
        JniType::FloatArray => "jfloatArray",
        JniType::DoubleArray => "jdoubleArray",
        JniType::ObjectArray => "jobjectArray",
        JniType::Class => "jclass",
        JniType::String => "jstring",
        JniType::Object => "jobject",
    }
}

/// The tail of an exported function header: ` -> jint`, or nothing for void.
pub fn fn_return_sign(ret: JniType) -> String {
    match ret {
        JniType::Void => String::new(),
        _ => format!(" -> {}", rust_jni_type(ret)),
    }
}

/// Expression returned after an exception has been thrown.
///
/// `None` for the environment handle, which is never a return value.
pub fn default_value(ty: JniType) -> Option<&'static str> {
    if ty.is_scalar() {
        Some("Default::default()")
    } else if ty.is_reference() {
        Some("JObject::null().into_raw()")
    } else {
        None
    }
}

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "box", "break", "const", "continue", "do", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "macro", "match",
    "mod", "move", "mut", "priv", "pub", "ref", "return", "static", "struct", "trait", "true",
    "try", "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

// Keywords that cannot be written as raw identifiers.
const RESERVED: &[&str] = &["self", "Self", "super", "crate"];

/// `ident` as Rust accepts it, keywords written as raw identifiers.
///
/// `None` for the keywords that have no raw form.
pub fn raw_ident(ident: &str) -> Option<String> {
    if RESERVED.contains(&ident) {
        None
    } else if KEYWORDS.contains(&ident) {
        Some(format!("r#{ident}"))
    } else {
        Some(ident.to_string())
    }
}

/// A Java identifier as a Rust snake_case identifier.
pub fn rust_ident(java_name: &str) -> String {
    let ident = to_snake_case(java_name).replace('$', "_");
    raw_ident(&ident).unwrap_or_else(|| format!("{ident}_"))
}
