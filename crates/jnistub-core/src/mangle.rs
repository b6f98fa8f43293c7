//! JNI symbol mangling.
//!
//! A native method `m` of class `p.q.C` is looked up by the JVM under the
//! symbol `Java_p_q_C_m`. When several native methods of the class share the
//! name `m`, every one of them gets the mangled parameter descriptor appended
//! after a double underscore: `Java_p_q_C_m__I_3Ljava_lang_String_2`.
//!
//! # Escapes
//!
//! | Character | Replacement |
//! |-----------|-------------|
//! | `_` | `_1` |
//! | `;` | `_2` |
//! | `[` | `_3` |
//! | `.` (and `/` in descriptors) | `_` |

use crate::java_type::{JavaType, TypeNameError};

/// Escape a class name, method name or descriptor fragment.
///
/// The underscore escape runs first so that underscores produced by the
/// separator rule are not escaped again.
pub fn mangle(fragment: &str) -> String {
    fragment
        .replace('_', "_1")
        .replace(';', "_2")
        .replace('[', "_3")
        .replace('.', "_")
}

/// Mangle a field or method-parameter descriptor.
///
/// Descriptors use `/` as the package separator; it is mangled exactly like
/// `.` in a qualified name.
pub fn mangle_descriptor(descriptor: &str) -> String {
    mangle(&descriptor.replace('/', "."))
}

/// Invert [`mangle_descriptor`].
///
/// A lone `_` (not followed by `1`, `2` or `3`) decodes to the package
/// separator `/`.
pub fn unmangle(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut chars = fragment.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '_' {
            out.push(c);
            continue;
        }
        let decoded = match chars.peek() {
            Some('1') => '_',
            Some('2') => ';',
            Some('3') => '[',
            _ => {
                out.push('/');
                continue;
            }
        };
        chars.next();
        out.push(decoded);
    }
    out
}

/// Build the exported symbol for a native method.
///
/// `params` are the method's declared Java parameters; they only contribute
/// to the symbol when `overloaded` is set.
pub fn function_symbol(
    qualified_class: &str,
    method_name: &str,
    overloaded: bool,
    params: &[JavaType],
) -> String {
    let mut symbol = format!("Java_{}_{}", mangle(qualified_class), mangle(method_name));
    if overloaded {
        let descriptor: String = params.iter().map(JavaType::descriptor).collect();
        symbol.push_str("__");
        symbol.push_str(&mangle_descriptor(&descriptor));
    }
    symbol
}

/// The mangled signature suffix of an overloaded symbol, if it has one.
///
/// `__1` inside a symbol is an escaped underscore at the start of a name
/// segment, not the overload separator.
pub fn split_overload_suffix(symbol: &str) -> Option<&str> {
    let mut search_from = 0;
    while let Some(offset) = symbol[search_from..].find("__") {
        let start = search_from + offset + 2;
        let rest = &symbol[start..];
        if !rest.starts_with('1') {
            return Some(rest);
        }
        search_from = start;
    }
    None
}

/// Recover the parameter types encoded in an overloaded symbol.
///
/// Returns `Ok(None)` for symbols without a signature suffix.
pub fn overload_signature(symbol: &str) -> Result<Option<Vec<JavaType>>, TypeNameError> {
    split_overload_suffix(symbol)
        .map(|suffix| JavaType::parse_descriptors(&unmangle(suffix)))
        .transpose()
}
